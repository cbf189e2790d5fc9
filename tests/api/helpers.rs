use charity_signup::configuration;
use charity_signup::startup::Application;
use charity_signup::telemetry;
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // `stdout` and `sink` are different types, hence the two branches
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    }
});

pub const TEST_ANON_KEY: &str = "test-anon-key";

pub struct TestApp {
    pub address: String,
    /// Stands in for the hosted backend: both the REST table and the notification function.
    pub backend_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up an instance of our application on a random port,
    /// talking to a fresh mock backend.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let backend_server = MockServer::start().await;

        let config = {
            let mut config =
                configuration::get_configuration().expect("Failed to read configuration");
            // Use a random OS port
            config.application.port = 0;
            config.backend.base_url = backend_server.uri();
            config.backend.anon_key = Secret::new(TEST_ANON_KEY.into());
            config.backend.timeout_milliseconds = 2_000;
            config
        };

        let application = Application::build(config)
            .await
            .expect("Failed to build application.");
        let port = application.port();
        let _ = tokio::spawn(application.run_until_stopped());

        let api_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            backend_server,
            api_client,
        }
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_home_html(&self) -> String {
        self.api_client
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    pub async fn get_confirmation_html(&self) -> String {
        self.api_client
            .get(&format!("{}/signup/confirmation", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    pub async fn post_signup<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/signup", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// A complete form, as the browser would post it.
pub fn signup_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane",
        "charityName": "Acme Trust",
        "email": "j@acme.org",
        "role": "CEO",
        "concerns": ""
    })
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
