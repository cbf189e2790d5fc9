use crate::domain::{FormInput, Role};
use crate::utils;
use actix_web::HttpResponse;

/// The landing page with an empty signup form.
#[tracing::instrument(name = "/: Signup page")]
pub async fn home() -> HttpResponse {
    utils::ok_to(signup_page(&FormInput::default(), None))
}

/// Render the signup form around `input`, with `error` in the banner above
/// the submit button.
///
/// A failed submission comes back through here, so the visitor can correct
/// the form without retyping it.
pub fn signup_page(input: &FormInput, error: Option<&str>) -> String {
    let error_banner = error
        .map(|message| {
            format!(
                r#"<div class="error-banner" role="alert">{}</div>"#,
                htmlescape::encode_minimal(message)
            )
        })
        .unwrap_or_default();
    let concerns = input.concerns.as_deref().unwrap_or_default();

    // User values are attribute-encoded, braces included, so none of them
    // can be mistaken for a later placeholder. The banner goes in last.
    include_str!("home.html")
        .replace("{role_options}", &role_options(input.role))
        .replace("{name}", &htmlescape::encode_attribute(&input.name))
        .replace("{charity_name}", &htmlescape::encode_attribute(&input.charity_name))
        .replace("{email}", &htmlescape::encode_attribute(&input.email))
        .replace("{concerns}", &htmlescape::encode_attribute(concerns))
        .replace("{error_banner}", &error_banner)
}

fn role_options(selected: Option<Role>) -> String {
    Role::ALL
        .iter()
        .map(|&role| {
            let marker = if selected == Some(role) { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                role.as_str(),
                marker,
                role.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}
