mod form_input;
mod invalid_reason;
mod role;
mod submission_record;
mod submission_state;

pub use form_input::{FormField, FormInput};
pub use invalid_reason::InvalidReason;
pub use role::Role;
pub use submission_record::SubmissionRecord;
pub use submission_state::SubmissionState;
