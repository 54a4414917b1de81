// File: src/config.rs
// Purpose: Form configuration parsing from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signup_validation::{PasswordStrength, SignupRules};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

/// Field rule parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_password_min")]
    pub password_min: usize,

    #[serde(default = "default_password_max")]
    pub password_max: usize,

    #[serde(default = "default_email_min_length")]
    pub email_min_length: usize,

    /// One of "letters", "letters-digits", "mixed-case", "symbols"
    #[serde(default)]
    pub password_strength: Option<PasswordStrength>,
}

/// Help text colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_valid_color")]
    pub valid_color: String,

    #[serde(default = "default_invalid_color")]
    pub invalid_color: String,
}

/// Submission banner text and classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// `{name}` is replaced with the submitted name
    #[serde(default = "default_success")]
    pub success: String,

    #[serde(default = "default_failure")]
    pub failure: String,

    #[serde(default = "default_success_class")]
    pub success_class: String,

    #[serde(default = "default_failure_class")]
    pub failure_class: String,
}

// Default values
fn default_password_min() -> usize {
    4
}

fn default_password_max() -> usize {
    100
}

fn default_email_min_length() -> usize {
    5
}

fn default_valid_color() -> String {
    "#28a745".to_string()
}

fn default_invalid_color() -> String {
    "#dc3545".to_string()
}

fn default_success() -> String {
    "Sign up successful, welcome {name}".to_string()
}

fn default_failure() -> String {
    "Make sure all fields are valid".to_string()
}

fn default_success_class() -> String {
    "alert alert-success rounded-0 mt-1".to_string()
}

fn default_failure_class() -> String {
    "alert alert-danger rounded-0 mt-1".to_string()
}

// Default implementations
impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            password_min: default_password_min(),
            password_max: default_password_max(),
            email_min_length: default_email_min_length(),
            password_strength: None,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            valid_color: default_valid_color(),
            invalid_color: default_invalid_color(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            success: default_success(),
            failure: default_failure(),
            success_class: default_success_class(),
            failure_class: default_failure_class(),
        }
    }
}

impl MessagesConfig {
    pub fn success_for(&self, name: &str) -> String {
        self.success.replace("{name}", name)
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        // Surface bad bounds at load time rather than on first blur
        config
            .rules()
            .with_context(|| format!("Invalid rules in config file: {:?}", path))?;

        Ok(config)
    }

    /// Checked validator parameters
    pub fn rules(&self) -> Result<SignupRules> {
        let rules = SignupRules::new(
            self.rules.password_min,
            self.rules.password_max,
            self.rules.email_min_length,
            self.rules.password_strength,
        )?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.rules.password_min, 4);
        assert_eq!(config.rules.password_max, 100);
        assert_eq!(config.theme.valid_color, "#28a745");
        assert_eq!(config.theme.invalid_color, "#dc3545");
        assert_eq!(config.rules().unwrap(), SignupRules::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = FormConfig::load(file.path()).unwrap();
        assert_eq!(config.rules.email_min_length, 5);
        assert_eq!(config.messages.failure, "Make sure all fields are valid");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [rules]
            password_min = 8
            password_strength = "symbols"

            [messages]
            success = "Hi {name}!"
        "#;
        let config: FormConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.rules.password_min, 8);
        assert_eq!(config.rules.password_max, 100);
        assert_eq!(config.rules.password_strength, Some(PasswordStrength::Symbols));
        assert_eq!(config.messages.success_for("Ada"), "Hi Ada!");
        assert_eq!(config.messages.success_class, "alert alert-success rounded-0 mt-1");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FormConfig::load(dir.path().join("signup.toml")).unwrap();
        assert_eq!(config.rules.password_min, 4);
    }

    #[test]
    fn test_load_rejects_bad_bounds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules]\npassword_min = 50\npassword_max = 10").unwrap();

        let err = FormConfig::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("must be below the maximum"));
    }

    #[test]
    fn test_load_rejects_unknown_strength() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules]\npassword_strength = \"extreme\"").unwrap();

        let err = FormConfig::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown password strength 'extreme'"));
    }

    #[test]
    fn test_strength_written_back_by_name() {
        let mut config = FormConfig::default();
        config.rules.password_strength = Some(PasswordStrength::MixedCase);

        let written = toml::to_string(&config).unwrap();
        assert!(written.contains("password_strength = \"mixed-case\""));
    }
}
