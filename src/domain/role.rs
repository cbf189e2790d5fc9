use crate::domain::InvalidReason;
use serde::Serialize;

/// The senior roles offered by the signup form's select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    #[serde(rename = "CEO")]
    Ceo,
    #[serde(rename = "COO")]
    Coo,
    Trustee,
    Finance,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Ceo,
        Role::Coo,
        Role::Trustee,
        Role::Finance,
        Role::Other,
    ];

    /// Parse the value submitted by the select box.
    pub fn parse(value: &str) -> Result<Self, InvalidReason> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| InvalidReason::RoleIsUnknown(value.to_string()))
    }

    /// The value stored by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ceo => "CEO",
            Role::Coo => "COO",
            Role::Trustee => "Trustee",
            Role::Finance => "Finance",
            Role::Other => "Other",
        }
    }

    /// The text shown next to the option.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Ceo => "CEO / Chief Executive",
            Role::Coo => "COO / Operations Director",
            Role::Trustee => "Trustee",
            Role::Finance => "Finance Director",
            Role::Other => "Other Senior Role",
        }
    }
}
