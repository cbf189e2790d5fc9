use crate::constant::{
    BACKEND_ANON_KEY_ENV, BACKEND_BASE_URL_ENV, LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT,
};
use crate::error::BizErrorEnum;
use crate::util;
use config::{Config, File};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Where the hosted backend lives and how to talk to it.
#[derive(Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub anon_key: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl BackendSettings {
    /// Reject blank credentials so that a half-configured deployment fails
    /// on startup instead of on the first signup.
    pub fn validate(&self) -> Result<(), BizErrorEnum> {
        if util::is_blank(&self.base_url) {
            return Err(BizErrorEnum::MissingBackendSetting(BACKEND_BASE_URL_ENV));
        }
        if util::is_blank(self.anon_key.expose_secret()) {
            return Err(BizErrorEnum::MissingBackendSetting(BACKEND_ANON_KEY_ENV));
        }
        Ok(())
    }

    /// Append a backend path, e.g. `/rest/v1/form_submissions`, to the base url.
    ///
    /// Any path already on the base url is kept, so a backend behind a
    /// prefix (`https://host/api`) resolves to `https://host/api/rest/...`.
    pub fn endpoint(&self, path: &str) -> Result<Url, BizErrorEnum> {
        let base = self.base_url.trim().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{}/{}", base, path)).map_err(|e| {
            tracing::error!("Failed to build backend url: base={}, path={}", self.base_url, path);
            BizErrorEnum::ParseUrlError(e.to_string())
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    /// One client per collaborator, re-used across requests.
    pub fn http_client(&self) -> Result<Client, BizErrorEnum> {
        Client::builder()
            // timeout is a MUST option for client
            .timeout(self.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build http client: {:?}", e);
                BizErrorEnum::BuildHttpClientError(e)
            })
    }
}

pub fn get_configuration() -> Result<Settings, BizErrorEnum> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        BizErrorEnum::GetCurrentDirError(e)
    })?;
    let config_dir = base_path.join("configuration");
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| LOCAL_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            BizErrorEnum::ParseEnvironmentVariableError(e)
        })?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    // Initialise our configuration reader
    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment_filename)))
        // E.g. `APP_APPLICATION__PORT=5001` would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        // The backend credentials keep their well-known names
        .set_override_option("backend.base_url", std::env::var(BACKEND_BASE_URL_ENV).ok())
        .and_then(|builder| {
            builder.set_override_option("backend.anon_key", std::env::var(BACKEND_ANON_KEY_ENV).ok())
        })
        .and_then(|builder| builder.build())
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            BizErrorEnum::BuildConfigSourcesError(e)
        })?;
    // Try to convert the configuration values it read into our Settings type
    let settings: Settings = settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file: {}", e);
        BizErrorEnum::DeserializeConfigurationFileError(e)
    })?;
    settings.backend.validate()?;
    Ok(settings)
}

/// The possible runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            LOCAL_ENVIRONMENT => Ok(Self::Local),
            PRODUCTION_ENVIRONMENT => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}
