//! The four sign-up field validators

use crate::email::check_email_pattern;
use crate::error::RuleError;
use crate::field::{FieldId, Verdict};
use crate::password::PasswordStrength;
use crate::string::{check_length, check_min_length, check_not_empty, check_only_letters};
use serde::{Deserialize, Serialize};

/// Tunable parameters for the field validators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRules {
    /// Shortest accepted password (inclusive)
    pub password_min: usize,
    /// Password length must stay strictly below this
    pub password_max: usize,
    /// Guard applied to emails before the pattern check
    pub email_min_length: usize,
    /// Optional character-class requirement for passwords
    pub password_strength: Option<PasswordStrength>,
}

impl Default for SignupRules {
    fn default() -> Self {
        Self {
            password_min: 4,
            password_max: 100,
            email_min_length: 5,
            password_strength: None,
        }
    }
}

impl SignupRules {
    pub fn new(
        password_min: usize,
        password_max: usize,
        email_min_length: usize,
        password_strength: Option<PasswordStrength>,
    ) -> Result<Self, RuleError> {
        let rules = Self {
            password_min,
            password_max,
            email_min_length,
            password_strength,
        };
        rules.check()?;
        Ok(rules)
    }

    /// Rejects bounds no password could satisfy
    pub fn check(&self) -> Result<(), RuleError> {
        if self.password_min == 0 {
            return Err(RuleError::ZeroPasswordMin);
        }
        if self.password_min >= self.password_max {
            return Err(RuleError::PasswordBounds {
                min: self.password_min,
                max: self.password_max,
            });
        }
        Ok(())
    }

    pub fn validate_name(&self, value: &str) -> Verdict {
        let label = FieldId::Name.label();
        check_not_empty(value, label)
            .and_then(|_| check_only_letters(value, label))
            .into()
    }

    pub fn validate_email(&self, value: &str) -> Verdict {
        let label = FieldId::Email.label();
        check_not_empty(value, label)
            .and_then(|_| check_min_length(value, label, self.email_min_length))
            .and_then(|_| check_email_pattern(value))
            .into()
    }

    pub fn validate_password(&self, value: &str) -> Verdict {
        let label = FieldId::Password.label();
        check_not_empty(value, label)
            .and_then(|_| check_length(value, label, self.password_min, self.password_max))
            .and_then(|_| match self.password_strength {
                Some(strength) => strength.check(value),
                None => Ok(()),
            })
            .into()
    }

    /// Confirmation is only judged against a password that is itself valid
    pub fn validate_confirm_password(
        &self,
        value: &str,
        password_value: &str,
        password_is_valid: bool,
    ) -> Verdict {
        if !password_is_valid {
            Verdict::fail("Password must be valid")
        } else if value != password_value {
            Verdict::fail("Passwords must match")
        } else {
            Verdict::pass()
        }
    }
}

/// Validates a name with the default rules
pub fn validate_name(value: &str) -> Verdict {
    SignupRules::default().validate_name(value)
}

/// Validates an email with the default rules
pub fn validate_email(value: &str) -> Verdict {
    SignupRules::default().validate_email(value)
}

/// Validates a password with the default rules
pub fn validate_password(value: &str) -> Verdict {
    SignupRules::default().validate_password(value)
}

pub fn validate_confirm_password(
    value: &str,
    password_value: &str,
    password_is_valid: bool,
) -> Verdict {
    SignupRules::default().validate_confirm_password(value, password_value, password_is_valid)
}
