/// Why a signup form could not be accepted as-is.
///
/// These are the checks a browser performs through `required` and
/// `type="email"` before it lets the form go out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    #[error("Name is empty")]
    NameIsEmpty,
    #[error("Charity name is empty")]
    CharityNameIsEmpty,
    #[error("Email is empty")]
    EmailIsEmpty,
    #[error("Email's format is not correct")]
    EmailFormatWrong,
    #[error("Role is not selected")]
    RoleIsMissing,
    #[error("'{0}' is not one of the offered roles")]
    RoleIsUnknown(String),
    #[error("'{0}' is not a field of the signup form")]
    FieldIsUnknown(String),
}
