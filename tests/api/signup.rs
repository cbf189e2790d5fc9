use crate::helpers;
use crate::helpers::TestApp;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

const STORE_PATH: &str = "/rest/v1/form_submissions";
const NOTIFY_PATH: &str = "/functions/v1/send-form-notification";

#[tokio::test]
async fn a_valid_signup_is_stored_notified_and_confirmed() {
    // Arrange
    let app = TestApp::spawn_app().await;

    Mock::given(path(STORE_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.backend_server)
        .await;
    Mock::given(path(NOTIFY_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act - Part 1 - Submit the form
    let response = app.post_signup(&helpers::signup_body()).await;
    helpers::assert_is_redirect_to(&response, "/signup/confirmation");

    // Act - Part 2 - Follow the redirect
    let html_page = app.get_confirmation_html().await;
    assert!(html_page.contains("Thank you!"));
}

#[tokio::test]
async fn the_backend_receives_the_record_in_its_own_naming() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let record = serde_json::json!({
        "name": "Jane",
        "charity_name": "Acme Trust",
        "email": "j@acme.org",
        "role": "CEO",
        "concerns": ""
    });

    Mock::given(path(STORE_PATH))
        .and(header("apikey", helpers::TEST_ANON_KEY))
        .and(body_json(serde_json::json!([record.clone()])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.backend_server)
        .await;
    Mock::given(path(NOTIFY_PATH))
        .and(header(
            "Authorization",
            format!("Bearer {}", helpers::TEST_ANON_KEY).as_str(),
        ))
        .and(body_json(record))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act - concerns left out entirely
    let body = serde_json::json!({
        "name": "Jane",
        "charityName": "Acme Trust",
        "email": "j@acme.org",
        "role": "CEO"
    });
    let response = app.post_signup(&body).await;

    // Assert
    helpers::assert_is_redirect_to(&response, "/signup/confirmation");
}

#[tokio::test]
async fn a_failed_notification_does_not_fail_the_signup() {
    // Arrange
    let app = TestApp::spawn_app().await;

    Mock::given(path(STORE_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.backend_server)
        .await;
    Mock::given(path(NOTIFY_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let response = app.post_signup(&helpers::signup_body()).await;

    // Assert
    helpers::assert_is_redirect_to(&response, "/signup/confirmation");
}

#[tokio::test]
async fn a_rejected_signup_shows_the_backend_reason_once() {
    // Arrange
    let app = TestApp::spawn_app().await;

    Mock::given(path(STORE_PATH))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "message": "duplicate email"
            })),
        )
        .expect(1)
        .mount(&app.backend_server)
        .await;
    // We assert that no notification goes out for an unsaved record
    Mock::given(path(NOTIFY_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend_server)
        .await;

    // Act - Part 1 - Submit the form
    let response = app.post_signup(&helpers::signup_body()).await;
    assert_eq!(response.status().as_u16(), 200);

    // Act - Part 2 - The form comes back with the reason
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<div class="error-banner" role="alert">duplicate email</div>"#));

    // Act - Part 3 - Reload the signup page
    let html_page = app.get_home_html().await;
    assert!(!html_page.contains("duplicate email"));
}

#[tokio::test]
async fn a_rejected_signup_keeps_what_was_typed() {
    // Arrange
    let app = TestApp::spawn_app().await;

    Mock::given(path(STORE_PATH))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "message": "duplicate email"
            })),
        )
        .expect(1)
        .mount(&app.backend_server)
        .await;

    let body = serde_json::json!({
        "name": "Zelda",
        "charityName": "Hyrule Relief",
        "email": "zelda@hyrule.org",
        "role": "Trustee",
        "concerns": "Bias in grant triage"
    });

    // Act
    let response = app.post_signup(&body).await;
    let html_page = response.text().await.unwrap();

    // Assert - every value is still in the form, attribute-encoded
    assert!(html_page.contains(r#"value="Zelda""#));
    assert!(html_page.contains(r#"value="Hyrule&#x20;Relief""#));
    assert!(html_page.contains(r#"value="zelda&#x40;hyrule&#x2E;org""#));
    assert!(html_page.contains(r#"<option value="Trustee" selected>Trustee</option>"#));
    assert!(html_page.contains(">Bias&#x20;in&#x20;grant&#x20;triage</textarea>"));
    assert!(html_page.contains("duplicate email"));
}

#[tokio::test]
async fn a_failure_without_reason_shows_the_generic_message() {
    // Arrange
    let app = TestApp::spawn_app().await;

    Mock::given(path(STORE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let response = app.post_signup(&helpers::signup_body()).await;
    assert_eq!(response.status().as_u16(), 200);

    // Assert
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("Failed to submit form. Please try again."));
}

#[tokio::test]
async fn backend_reasons_are_html_escaped() {
    // Arrange
    let app = TestApp::spawn_app().await;

    Mock::given(path(STORE_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "<script>alert(1)</script>"
            })),
        )
        .mount(&app.backend_server)
        .await;

    // Act
    let response = app.post_signup(&helpers::signup_body()).await;
    let html_page = response.text().await.unwrap();

    // Assert
    assert!(!html_page.contains("<script>alert(1)</script>"));
    assert!(html_page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn signup_returns_a_400_for_invalid_data() {
    // Arrange
    let app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        // Nothing reaches the backend
        .expect(0)
        .mount(&app.backend_server)
        .await;

    let test_cases = vec![
        (
            serde_json::json!({"charityName": "Acme Trust", "email": "j@acme.org", "role": "CEO"}),
            "missing the name",
        ),
        (
            serde_json::json!({"name": "Jane", "charityName": " ", "email": "j@acme.org", "role": "CEO"}),
            "a blank charity name",
        ),
        (
            serde_json::json!({"name": "Jane", "charityName": "Acme Trust", "email": "jane-at-acme", "role": "CEO"}),
            "a malformed email",
        ),
        (
            serde_json::json!({"name": "Jane", "charityName": "Acme Trust", "email": "j@acme.org", "role": ""}),
            "no role selected",
        ),
        (
            serde_json::json!({"name": "Jane", "charityName": "Acme Trust", "email": "j@acme.org", "role": "Volunteer"}),
            "a role that is not offered",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_signup(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            error_message
        );
    }
}

#[tokio::test]
async fn the_signup_page_offers_every_role() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let html_page = app.get_home_html().await;

    // Assert
    for option in [
        r#"<option value="CEO">CEO / Chief Executive</option>"#,
        r#"<option value="COO">COO / Operations Director</option>"#,
        r#"<option value="Trustee">Trustee</option>"#,
        r#"<option value="Finance">Finance Director</option>"#,
        r#"<option value="Other">Other Senior Role</option>"#,
    ] {
        assert!(html_page.contains(option), "missing {}", option);
    }
    assert!(!html_page.contains("error-banner"));
}
