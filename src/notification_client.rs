use crate::configuration::BackendSettings;
use crate::constant::NOTIFICATION_PATH;
use crate::domain::SubmissionRecord;
use crate::error::{BizErrorEnum, SubmitError};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

/// Best-effort side channel told about every stored submission.
#[async_trait::async_trait]
pub trait SubmissionNotifier: Send + Sync + 'static {
    /// # Errors
    ///
    /// [`SubmitError::NotificationError`] on a transport failure or a non-2xx answer.
    async fn notify(&self, record: &SubmissionRecord) -> Result<(), SubmitError>;
}

/// Calls the backend's `send-form-notification` function.
#[derive(Debug)]
pub struct NotificationClient {
    http_client: Client,
    url: Url,
    anon_key: Secret<String>,
}

impl NotificationClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, BizErrorEnum> {
        Ok(Self {
            http_client: settings.http_client()?,
            url: settings.endpoint(NOTIFICATION_PATH)?,
            anon_key: settings.anon_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl SubmissionNotifier for NotificationClient {
    #[tracing::instrument(name = "Sending the submission notification", skip(self, record))]
    async fn notify(&self, record: &SubmissionRecord) -> Result<(), SubmitError> {
        self.http_client
            .post(self.url.clone())
            .bearer_auth(self.anon_key.expose_secret())
            .json(record)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| SubmitError::NotificationError(e.into()))?;
        Ok(())
    }
}
