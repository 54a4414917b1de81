// File: src/coordinator.rs
// Purpose: Wiring blur and submit events to validators and the presenter

use crate::config::{FormConfig, MessagesConfig};
use crate::presenter::{Banner, StatusPresenter};
use signup_validation::{FieldId, FieldStatus, SignupForm, SignupRules, Verdict};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Where the coordinator reads current field values from
pub trait FieldSource {
    fn value(&self, field: FieldId) -> String;
}

impl FieldSource for SignupForm {
    fn value(&self, field: FieldId) -> String {
        SignupForm::value(self, field).to_string()
    }
}

/// Last rendered state of one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub status: FieldStatus,
    pub message: String,
}

/// Result of an intercepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { name: String },
    Rejected,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Runs the field validators in response to form events
///
/// Submission never goes anywhere: `on_submit` only reports the outcome and
/// the caller is expected to suppress the browser default.
pub struct FormCoordinator<S, P> {
    source: S,
    presenter: P,
    rules: SignupRules,
    messages: MessagesConfig,
    states: BTreeMap<FieldId, FieldState>,
}

impl<S: FieldSource, P: StatusPresenter> FormCoordinator<S, P> {
    pub fn new(source: S, presenter: P, rules: SignupRules, messages: MessagesConfig) -> Self {
        Self {
            source,
            presenter,
            rules,
            messages,
            states: BTreeMap::new(),
        }
    }

    /// Build from a loaded configuration
    pub fn from_config(source: S, presenter: P, config: &FormConfig) -> anyhow::Result<Self> {
        Ok(Self::new(source, presenter, config.rules()?, config.messages.clone()))
    }

    /// Focus left `field`
    pub fn on_blur(&mut self, field: FieldId) -> Verdict {
        let verdict = self.evaluate(field);
        self.record(field, &verdict);
        verdict
    }

    /// Re-run every validator and show the matching banner
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let mut all_valid = true;
        for field in FieldId::ALL {
            all_valid &= self.on_blur(field).is_valid();
        }

        let name = self.source.value(FieldId::Name);
        let (outcome, banner) = if all_valid {
            (
                SubmitOutcome::Accepted { name: name.clone() },
                Banner::success(&name, &self.messages),
            )
        } else {
            (SubmitOutcome::Rejected, Banner::failure(&self.messages))
        };

        info!(accepted = outcome.is_accepted(), "sign-up submitted");
        self.presenter.show_banner(&banner);
        outcome
    }

    pub fn state(&self, field: FieldId) -> FieldState {
        self.states.get(&field).cloned().unwrap_or_default()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn evaluate(&self, field: FieldId) -> Verdict {
        let value = self.source.value(field);
        match field {
            FieldId::Name => self.rules.validate_name(&value),
            FieldId::Email => self.rules.validate_email(&value),
            FieldId::Password => self.rules.validate_password(&value),
            FieldId::ConfirmPassword => {
                // judged against what the password field currently shows
                let password_is_valid = self.state(FieldId::Password).status == FieldStatus::Valid;
                let password = self.source.value(FieldId::Password);
                self.rules
                    .validate_confirm_password(&value, &password, password_is_valid)
            }
        }
    }

    fn record(&mut self, field: FieldId, verdict: &Verdict) {
        debug!(
            field = %field,
            status = ?verdict.status,
            message = %verdict.message,
            "field validated"
        );
        self.states.insert(
            field,
            FieldState {
                status: verdict.status,
                message: verdict.message.clone(),
            },
        );
        self.presenter.present(field, verdict);
    }
}
