//! String checks shared by the field rules

use once_cell::sync::Lazy;
use regex::Regex;

static LETTERS_AND_SPACES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z ]+$").expect("letters pattern is valid")
});

/// Fails when the value is blank after trimming
pub fn check_not_empty(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} must not be empty", label))
    } else {
        Ok(())
    }
}

/// Fails unless every character is an ASCII letter or a space
pub fn check_only_letters(value: &str, label: &str) -> Result<(), String> {
    if LETTERS_AND_SPACES.is_match(value) {
        Ok(())
    } else {
        Err(format!("{} must contain only letters", label))
    }
}

/// Validates `min <= len < max`, counting characters rather than bytes
pub fn check_length(value: &str, label: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        Err(format!("{} must be at least {} characters long", label, min))
    } else if len >= max {
        Err(format!("{} must be shorter than {} characters", label, max))
    } else {
        Ok(())
    }
}

/// Validates `len >= min`
pub fn check_min_length(value: &str, label: &str, min: usize) -> Result<(), String> {
    if value.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("{} must be at least {} characters long", label, min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(check_not_empty("x", "Name").is_ok());
        assert_eq!(
            check_not_empty("   ", "Name"),
            Err("Name must not be empty".to_string())
        );
    }

    #[test]
    fn test_only_letters() {
        assert!(check_only_letters("Ada Lovelace", "Name").is_ok());
        assert!(check_only_letters("Ada-Lovelace", "Name").is_err());
        assert!(check_only_letters("Zoë", "Name").is_err());
        assert!(check_only_letters("", "Name").is_err());
    }

    #[test]
    fn test_length_bounds() {
        assert!(check_length("abcd", "Password", 4, 100).is_ok());
        assert!(check_length(&"a".repeat(99), "Password", 4, 100).is_ok());
        assert_eq!(
            check_length("abc", "Password", 4, 100),
            Err("Password must be at least 4 characters long".to_string())
        );
        assert_eq!(
            check_length(&"a".repeat(100), "Password", 4, 100),
            Err("Password must be shorter than 100 characters".to_string())
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // four characters, eight bytes
        assert!(check_length("éééé", "Password", 4, 100).is_ok());
        assert!(check_min_length("éé", "Email", 3).is_err());
    }
}
