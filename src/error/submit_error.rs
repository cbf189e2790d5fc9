use crate::constant::GENERIC_SUBMIT_FAILURE;
use std::fmt::{Debug, Formatter};

/// Everything that can go wrong while a signup form is being submitted.
#[derive(thiserror::Error)]
pub enum SubmitError {
    /// The submission store refused the record, optionally saying why.
    #[error("{}", persistence_message(.0))]
    PersistenceError(Option<String>),

    /// The notification endpoint could not be reached or answered non-2xx.
    #[error("Failed to send the submission notification.")]
    NotificationError(#[source] anyhow::Error),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl SubmitError {
    /// The text shown in the form's error banner.
    ///
    /// Only a reason reported by the store is passed through; everything
    /// else collapses into the generic message.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::PersistenceError(Some(message)) => message.clone(),
            _ => GENERIC_SUBMIT_FAILURE.to_string(),
        }
    }
}

fn persistence_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(GENERIC_SUBMIT_FAILURE)
}

// We are still using a bespoke implementation of `Debug`
// to get a nice report using the error source chain
impl Debug for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
