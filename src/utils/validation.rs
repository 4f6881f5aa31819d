use crate::utils::error::{AppError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern"))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !email_pattern().is_match(value) {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected an address like name@example.com".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, values: &[f64]) -> Result<()> {
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: bad.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user.email", "ada@example.com").is_ok());
        assert!(validate_email("user.email", "ada@").is_err());
        assert!(validate_email("user.email", "ada example.com").is_err());
        assert!(validate_email("user.email", "").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("matrices.identity_size", 3, 1).is_ok());
        assert!(validate_positive_number("matrices.identity_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("user.first_name", "Ada").is_ok());
        assert!(validate_non_empty_string("user.first_name", "   ").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("prices.values", &[1.0, 2.5]).is_ok());
        let err = validate_finite("prices.values", &[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "./out").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "a\0b").is_err());
    }
}
