use crate::domain::FormInput;
use serde::Serialize;

/// The row written to `form_submissions` and the body of the notification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub charity_name: String,
    pub email: String,
    pub role: String,
    pub concerns: String,
}

impl From<&FormInput> for SubmissionRecord {
    fn from(input: &FormInput) -> Self {
        Self {
            name: input.name.clone(),
            charity_name: input.charity_name.clone(),
            email: input.email.clone(),
            role: input
                .role
                .map(|role| role.as_str().to_string())
                .unwrap_or_default(),
            concerns: input.concerns.clone().unwrap_or_default(),
        }
    }
}
