use thiserror::Error;

/// Inconsistent rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("password minimum length must be at least 1")]
    ZeroPasswordMin,

    #[error("password minimum length {min} must be below the maximum {max}")]
    PasswordBounds { min: usize, max: usize },

    #[error(
        "unknown password strength '{0}' (expected letters, letters-digits, mixed-case or symbols)"
    )]
    UnknownStrength(String),
}
