//! Field identifiers, statuses and verdicts

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four inputs on the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields in submission order
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// The `id` attribute of the input element
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm-password",
        }
    }

    /// Human readable label used as the subject of messages
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm password",
        }
    }

    /// Look up a field by its `id` attribute
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.dom_id() == id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Visual validity state of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    /// Not validated yet
    #[default]
    Unset,
    Valid,
    Invalid,
}

impl FieldStatus {
    /// CSS class reflecting the status, if any
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            FieldStatus::Unset => None,
            FieldStatus::Valid => Some("is-valid"),
            FieldStatus::Invalid => Some("is-invalid"),
        }
    }
}

/// Outcome of running one rule against one value
///
/// A passing verdict never carries a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: FieldStatus,
    pub message: String,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            status: FieldStatus::Valid,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: FieldStatus::Invalid,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == FieldStatus::Valid
    }
}

impl From<Result<(), String>> for Verdict {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Verdict::pass(),
            Err(message) => Verdict::fail(message),
        }
    }
}
