// Sign-up form - status presentation and event coordination
// DOM-free: browsers plug in through FieldSource and StatusPresenter

pub mod config;
pub mod coordinator;
pub mod presenter;

pub use config::{FormConfig, MessagesConfig, RulesConfig, ThemeConfig};
pub use coordinator::{FieldSource, FieldState, FormCoordinator, SubmitOutcome};
pub use presenter::{
    apply_status_class, Banner, BannerKind, Display, FieldView, HelpText, MemoryPresenter,
    StatusPresenter,
};

// Re-export the rule layer so bindings need a single dependency
pub use signup_validation as validation;
pub use signup_validation::{FieldId, FieldStatus, SignupForm, SignupRules, Verdict};
