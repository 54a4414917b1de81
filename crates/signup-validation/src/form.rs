//! Whole-form validation

use crate::field::{FieldId, Verdict};
use crate::rules::SignupRules;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Types that can be validated as a whole
pub trait Validate {
    /// Returns Ok(()) if valid, or Err with a map of field names to error messages
    fn validate(&self) -> Result<(), BTreeMap<String, Vec<String>>>;
}

/// Submitted sign-up values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Runs every validator; the confirmation sees the fresh password verdict
    pub fn report(&self, rules: &SignupRules) -> FormReport {
        let name = rules.validate_name(&self.name);
        let email = rules.validate_email(&self.email);
        let password = rules.validate_password(&self.password);
        let confirm_password = rules.validate_confirm_password(
            &self.confirm_password,
            &self.password,
            password.is_valid(),
        );

        FormReport {
            name,
            email,
            password,
            confirm_password,
        }
    }
}

impl Validate for SignupForm {
    fn validate(&self) -> Result<(), BTreeMap<String, Vec<String>>> {
        let report = self.report(&SignupRules::default());
        if report.all_valid() {
            Ok(())
        } else {
            Err(report.errors())
        }
    }
}

/// Verdicts for every field, computed on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub name: Verdict,
    pub email: Verdict,
    pub password: Verdict,
    pub confirm_password: Verdict,
}

impl FormReport {
    pub fn verdict(&self, field: FieldId) -> &Verdict {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn all_valid(&self) -> bool {
        FieldId::ALL.iter().all(|&field| self.verdict(field).is_valid())
    }

    /// Failing fields keyed by DOM id
    pub fn errors(&self) -> BTreeMap<String, Vec<String>> {
        FieldId::ALL
            .iter()
            .map(|&field| (field, self.verdict(field)))
            .filter(|(_, verdict)| !verdict.is_valid())
            .map(|(field, verdict)| (field.dom_id().to_string(), vec![verdict.message.clone()]))
            .collect()
    }
}
