/// Where a signup form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Editable, nothing sent yet.
    Idle,
    /// A submission is in flight; the form is disabled.
    Submitting,
    /// The record was stored. Terminal.
    Success,
    /// The attempt failed; the form stays editable for another try.
    Failure(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Whether a new submit attempt may start from here.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failure(_))
    }
}
