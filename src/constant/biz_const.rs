/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// backend credentials, both required at startup
pub const BACKEND_BASE_URL_ENV: &str = "BACKEND_BASE_URL";
pub const BACKEND_ANON_KEY_ENV: &str = "BACKEND_ANON_KEY";

/// backend endpoints, relative to `BACKEND_BASE_URL`
pub const FORM_SUBMISSIONS_PATH: &str = "/rest/v1/form_submissions";
pub const NOTIFICATION_PATH: &str = "/functions/v1/send-form-notification";

/// http request header's key
pub const API_KEY_HEADER: &str = "apikey";
pub const PREFER_HEADER: &str = "Prefer";

/// shown whenever the backend gives us nothing better to say
pub const GENERIC_SUBMIT_FAILURE: &str = "Failed to submit form. Please try again.";
