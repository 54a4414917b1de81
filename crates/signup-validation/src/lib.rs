//! Sign-up Validation Core
//!
//! Pure rule evaluation for the sign-up form. Validators return a [`Verdict`]
//! and never render anything; presentation lives in `signup-form`.

pub mod email;
pub mod error;
pub mod field;
pub mod form;
pub mod password;
pub mod rules;
pub mod string;

// Re-export all validators
pub use email::*;
pub use error::RuleError;
pub use field::*;
pub use form::*;
pub use password::*;
pub use rules::*;
pub use string::*;
