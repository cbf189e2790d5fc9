//! Durable storage for signup form submissions.
//!
//! [`SubmissionStore`] is the seam the signup controller writes through.
//! Two implementations are provided:
//!
//! - [`RestSubmissionStore`] inserts into the hosted backend's
//!   `form_submissions` table over its REST interface
//! - [`InMemorySubmissionStore`] keeps records in memory, for tests and demos

use crate::configuration::BackendSettings;
use crate::constant::{API_KEY_HEADER, FORM_SUBMISSIONS_PATH, PREFER_HEADER};
use crate::domain::SubmissionRecord;
use crate::error::{BizErrorEnum, SubmitError};
use crate::util;
use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The durable record store behind the signup form.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait SubmissionStore: Send + Sync + 'static {
    /// Persist one submission.
    ///
    /// # Errors
    ///
    /// [`SubmitError::PersistenceError`] when the store refuses the record,
    /// carrying its reason if it gave one. Anything else (transport,
    /// timeouts) is a [`SubmitError::UnexpectedError`].
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), SubmitError>;
}

#[derive(Debug)]
pub struct RestSubmissionStore {
    http_client: Client,
    url: Url,
    anon_key: Secret<String>,
}

impl RestSubmissionStore {
    pub fn new(settings: &BackendSettings) -> Result<Self, BizErrorEnum> {
        Ok(Self {
            http_client: settings.http_client()?,
            url: settings.endpoint(FORM_SUBMISSIONS_PATH)?,
            anon_key: settings.anon_key.clone(),
        })
    }
}

/// Error payload returned by the backend's REST layer.
#[derive(Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
}

#[async_trait::async_trait]
impl SubmissionStore for RestSubmissionStore {
    #[tracing::instrument(
        name = "Saving the signup form submission",
        skip(self, record),
        fields(http.status = tracing::field::Empty)
    )]
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), SubmitError> {
        let response = self
            .http_client
            .post(self.url.clone())
            .header(API_KEY_HEADER, self.anon_key.expose_secret())
            .bearer_auth(self.anon_key.expose_secret())
            .header(PREFER_HEADER, "return=minimal")
            // the REST layer takes a batch of rows
            .json(&[record])
            .send()
            .await
            .context("Failed to reach the submission store.")?;

        let status = response.status();
        crate::telemetry::record_field("http.status", &status.as_u16());
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<BackendErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !util::is_blank(message));
        tracing::error!("The submission store rejected the record: {:?}", message);
        Err(SubmitError::PersistenceError(message))
    }
}

/// A submission store backed by a `Vec`. Records are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionStore {
    records: Arc<RwLock<Vec<SubmissionRecord>>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything inserted so far, oldest first.
    pub async fn records(&self) -> Vec<SubmissionRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait::async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), SubmitError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}
