use crate::domain::{FormField, InvalidReason};
use crate::util;
use serde::Deserialize;

/// The urlencoded body posted by the signup page.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub name: String,
    pub charity_name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub concerns: Option<String>,
}

impl SignupData {
    /// Apply the checks the page's `required` and `type="email"` attributes
    /// ask the browser to perform, for clients that skipped them.
    pub fn check_required(&self) -> Result<(), InvalidReason> {
        if util::is_blank(&self.name) {
            return Err(InvalidReason::NameIsEmpty);
        }
        if util::is_blank(&self.charity_name) {
            return Err(InvalidReason::CharityNameIsEmpty);
        }
        if util::is_blank(&self.email) {
            return Err(InvalidReason::EmailIsEmpty);
        }
        if !validator::validate_email(&self.email) {
            return Err(InvalidReason::EmailFormatWrong);
        }
        if self.role.is_empty() {
            return Err(InvalidReason::RoleIsMissing);
        }
        Ok(())
    }

    /// The posted values keyed by the form field they belong to.
    pub fn into_fields(self) -> [(FormField, String); 5] {
        [
            (FormField::Name, self.name),
            (FormField::CharityName, self.charity_name),
            (FormField::Email, self.email),
            (FormField::Role, self.role),
            (FormField::Concerns, self.concerns.unwrap_or_default()),
        ]
    }
}
