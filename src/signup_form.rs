use crate::domain::{FormField, FormInput, InvalidReason, SubmissionRecord, SubmissionState};
use crate::error::SubmitError;
use crate::notification_client::SubmissionNotifier;
use crate::submission_store::SubmissionStore;
use crate::telemetry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Owns the signup form's fields and drives one submission at a time.
///
/// Submitting writes the record to the [`SubmissionStore`] and then tells the
/// [`SubmissionNotifier`]. Only the write decides the outcome: a failed
/// notification is logged and otherwise ignored.
///
/// Neither lock is held across an `.await`, so `submit` can be raced against
/// itself on the same controller; only the first call does any work.
pub struct SignupFormController {
    input: Mutex<FormInput>,
    state: watch::Sender<SubmissionState>,
    store: Arc<dyn SubmissionStore>,
    notifier: Arc<dyn SubmissionNotifier>,
}

impl SignupFormController {
    pub fn new(store: Arc<dyn SubmissionStore>, notifier: Arc<dyn SubmissionNotifier>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            input: Mutex::new(FormInput::default()),
            state,
            store,
            notifier,
        }
    }

    /// Set one field by its HTML name.
    ///
    /// Never touches the submission state.
    pub fn update_field(
        &self,
        field_name: &str,
        value: impl Into<String>,
    ) -> Result<(), InvalidReason> {
        let field = FormField::parse(field_name)?;
        self.update(field, value)
    }

    pub fn update(&self, field: FormField, value: impl Into<String>) -> Result<(), InvalidReason> {
        self.lock_input().set(field, value.into())
    }

    pub fn input(&self) -> FormInput {
        self.lock_input().clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Watch state transitions, e.g. to disable the submit button.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Submit the current input and return the state it ends in.
    ///
    /// A no-op while another submission is in flight or once the form has
    /// been accepted; the current state is returned unchanged.
    #[tracing::instrument(
        name = "Submitting the signup form",
        skip(self),
        fields(submitter_email = tracing::field::Empty, submitter_charity = tracing::field::Empty)
    )]
    pub async fn submit(&self) -> SubmissionState {
        let started = self.state.send_if_modified(|state| {
            if !state.accepts_submit() {
                return false;
            }
            // also clears the previous failure message
            *state = SubmissionState::Submitting;
            true
        });
        if !started {
            let current = self.state();
            tracing::info!("Ignoring submit while {:?}", current);
            return current;
        }

        let next = match self.persist_and_notify().await {
            Ok(()) => SubmissionState::Success,
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to submit the signup form");
                SubmissionState::Failure(e.user_message())
            }
        };
        self.state.send_replace(next.clone());
        next
    }

    async fn persist_and_notify(&self) -> Result<(), SubmitError> {
        let record = {
            let input = self.lock_input();
            SubmissionRecord::from(&*input)
        };
        telemetry::record_field("submitter_email", &record.email);
        telemetry::record_field("submitter_charity", &record.charity_name);

        self.store.insert(&record).await?;

        // The stored row is the source of truth; the notification is a courtesy.
        if let Err(e) = self.notifier.notify(&record).await {
            tracing::warn!(
                error.cause_chain = ?e,
                "Notification failed, but the submission was saved"
            );
        }
        Ok(())
    }

    fn lock_input(&self) -> MutexGuard<'_, FormInput> {
        // no code path panics while holding the lock
        self.input.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
