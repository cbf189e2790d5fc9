use crate::domain::{InvalidReason, Role};

/// The five inputs of the signup form, keyed by their HTML `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    CharityName,
    Email,
    Role,
    Concerns,
}

impl FormField {
    pub fn parse(name: &str) -> Result<Self, InvalidReason> {
        match name {
            "name" => Ok(FormField::Name),
            "charityName" => Ok(FormField::CharityName),
            "email" => Ok(FormField::Email),
            "role" => Ok(FormField::Role),
            "concerns" => Ok(FormField::Concerns),
            other => Err(InvalidReason::FieldIsUnknown(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::CharityName => "charityName",
            FormField::Email => "email",
            FormField::Role => "role",
            FormField::Concerns => "concerns",
        }
    }
}

/// What the visitor has typed so far.
///
/// Nothing here is validated: the page marks `name`, `charityName`, `email`
/// and `role` as required and the browser refuses to submit until they are
/// filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub charity_name: String,
    pub email: String,
    /// `None` while the placeholder option is selected.
    pub role: Option<Role>,
    pub concerns: Option<String>,
}

impl FormInput {
    /// Set a single field. An empty role or concerns value clears it.
    pub fn set(&mut self, field: FormField, value: String) -> Result<(), InvalidReason> {
        match field {
            FormField::Name => self.name = value,
            FormField::CharityName => self.charity_name = value,
            FormField::Email => self.email = value,
            FormField::Role => {
                self.role = if value.is_empty() {
                    None
                } else {
                    Some(Role::parse(&value)?)
                }
            }
            FormField::Concerns => {
                self.concerns = if value.is_empty() { None } else { Some(value) }
            }
        }
        Ok(())
    }
}
