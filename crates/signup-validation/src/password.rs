//! Password character-class requirements

use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Character classes a password must contain
///
/// Each level includes the requirements of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PasswordStrength {
    /// At least one letter
    Letters,
    /// At least one letter and one digit
    LettersDigits,
    /// Uppercase, lowercase and digit
    MixedCase,
    /// Uppercase, lowercase, digit and a non-word character
    Symbols,
}

impl PasswordStrength {
    pub const ALL: [PasswordStrength; 4] = [
        PasswordStrength::Letters,
        PasswordStrength::LettersDigits,
        PasswordStrength::MixedCase,
        PasswordStrength::Symbols,
    ];

    /// Name used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            PasswordStrength::Letters => "letters",
            PasswordStrength::LettersDigits => "letters-digits",
            PasswordStrength::MixedCase => "mixed-case",
            PasswordStrength::Symbols => "symbols",
        }
    }

    /// Message shown when the requirement is not met
    pub fn message(self) -> &'static str {
        match self {
            PasswordStrength::Letters => "Must contain at least one letter",
            PasswordStrength::LettersDigits => "Must contain at least one letter and one number",
            PasswordStrength::MixedCase => {
                "Must contain at least one uppercase, one lowercase letter and one number"
            }
            PasswordStrength::Symbols => {
                "Must contain at least one uppercase, one lowercase letter, one number \
                 and one special character"
            }
        }
    }

    pub fn is_satisfied_by(self, password: &str) -> bool {
        let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_'));

        match self {
            PasswordStrength::Letters => has_letter,
            PasswordStrength::LettersDigits => has_letter && has_digit,
            PasswordStrength::MixedCase => has_upper && has_lower && has_digit,
            PasswordStrength::Symbols => has_upper && has_lower && has_digit && has_special,
        }
    }

    pub fn check(self, password: &str) -> Result<(), String> {
        if self.is_satisfied_by(password) {
            Ok(())
        } else {
            Err(self.message().to_string())
        }
    }
}

impl FromStr for PasswordStrength {
    type Err = RuleError;

    /// # Examples
    /// ```
    /// use signup_validation::PasswordStrength;
    /// assert_eq!("symbols".parse::<PasswordStrength>().unwrap(), PasswordStrength::Symbols);
    /// assert!("extreme".parse::<PasswordStrength>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strength| strength.as_str() == s)
            .ok_or_else(|| RuleError::UnknownStrength(s.to_string()))
    }
}

// Config files go through `FromStr`
impl TryFrom<String> for PasswordStrength {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PasswordStrength> for String {
    fn from(strength: PasswordStrength) -> Self {
        strength.as_str().to_string()
    }
}
