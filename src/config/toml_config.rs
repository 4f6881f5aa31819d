use crate::core::demo::DemoInputs;
use crate::domain::model::{Matrix, User, UserId};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_email, validate_finite, validate_non_empty_string, validate_positive_number,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Demo inputs loaded from a TOML file. Every section and key is optional;
/// anything left out falls back to [`DemoInputs::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    pub user: Option<UserConfig>,
    pub prices: Option<PricesConfig>,
    pub matrices: Option<MatricesConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricesConfig {
    pub values: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatricesConfig {
    pub a: Option<Matrix>,
    pub b: Option<Matrix>,
    pub square: Option<Matrix>,
    pub c: Option<Matrix>,
    pub d: Option<Matrix>,
    pub scalar: Option<f64>,
    pub identity_size: Option<usize>,
}

fn env_var_pattern() -> &'static Regex {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static env var pattern"))
}

impl DemoConfig {
    /// Loads a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        tracing::debug!("Loaded {} bytes from {}", content.len(), path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Merges the configured values over the defaults.
    pub fn to_inputs(&self) -> DemoInputs {
        let mut inputs = DemoInputs::default();

        if let Some(user) = &self.user {
            let base = &inputs.user;
            inputs.user = User::new(
                user.id.map(UserId).unwrap_or(base.id),
                user.first_name.clone().unwrap_or_else(|| base.first_name.clone()),
                user.last_name.clone().unwrap_or_else(|| base.last_name.clone()),
                user.email.clone().unwrap_or_else(|| base.email.clone()),
            );
        }

        if let Some(values) = self.prices.as_ref().and_then(|p| p.values.clone()) {
            inputs.prices = values;
        }

        if let Some(m) = &self.matrices {
            let slots = [
                (&m.a, &mut inputs.a),
                (&m.b, &mut inputs.b),
                (&m.square, &mut inputs.square),
                (&m.c, &mut inputs.c),
                (&m.d, &mut inputs.d),
            ];
            for (configured, slot) in slots {
                if let Some(matrix) = configured {
                    *slot = matrix.clone();
                }
            }
            if let Some(scalar) = m.scalar {
                inputs.scalar = scalar;
            }
            if let Some(size) = m.identity_size {
                inputs.identity_size = size;
            }
        }

        inputs
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        if let Some(user) = &self.user {
            if let Some(first) = &user.first_name {
                validate_non_empty_string("user.first_name", first)?;
            }
            if let Some(last) = &user.last_name {
                validate_non_empty_string("user.last_name", last)?;
            }
            if let Some(email) = &user.email {
                validate_email("user.email", email)?;
            }
        }

        if let Some(values) = self.prices.as_ref().and_then(|p| p.values.as_deref()) {
            validate_finite("prices.values", values)?;
        }

        if let Some(m) = &self.matrices {
            if let Some(size) = m.identity_size {
                validate_positive_number("matrices.identity_size", size, 1)?;
            }
            if let Some(scalar) = m.scalar {
                validate_finite("matrices.scalar", &[scalar])?;
            }

            let configured = [
                ("matrices.a", &m.a),
                ("matrices.b", &m.b),
                ("matrices.square", &m.square),
                ("matrices.c", &m.c),
                ("matrices.d", &m.d),
            ];
            for (field, matrix) in configured {
                if let Some(matrix) = matrix {
                    for row in matrix.iter_rows() {
                        validate_finite(field, row)?;
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[user]
id = 7
first_name = "Grace"
last_name = "Hopper"
email = "grace@example.com"

[prices]
values = [1.5, 2.5]

[matrices]
a = [[1, 2], [3, 4]]
b = [[5, 6], [7, 8]]
scalar = 3
identity_size = 2
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let inputs = config.to_inputs();
        assert_eq!(inputs.user.full_name(), "Grace Hopper");
        assert_eq!(inputs.user.id, UserId(7));
        assert_eq!(inputs.prices, vec![1.5, 2.5]);
        assert_eq!(inputs.a.shape(), (2, 2));
        assert_eq!(inputs.scalar, 3.0);
        assert_eq!(inputs.identity_size, 2);
        // untouched keys keep their defaults
        assert_eq!(inputs.square, DemoInputs::default().square);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config.to_inputs(), DemoInputs::default());
    }

    #[test]
    fn test_partial_user_keeps_default_fields() {
        let config = DemoConfig::from_toml_str("[user]\nfirst_name = \"Charles\"\n").unwrap();
        let inputs = config.to_inputs();
        assert_eq!(inputs.user.full_name(), "Charles Lovelace");
        assert_eq!(inputs.user.email, "ada@example.com");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TYPED_APP_TEST_EMAIL", "env@example.com");

        let config =
            DemoConfig::from_toml_str("[user]\nemail = \"${TYPED_APP_TEST_EMAIL}\"\n").unwrap();
        assert_eq!(
            config.user.unwrap().email.as_deref(),
            Some("env@example.com")
        );

        std::env::remove_var("TYPED_APP_TEST_EMAIL");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let config =
            DemoConfig::from_toml_str("[user]\nlast_name = \"${TYPED_APP_SURELY_UNSET}\"\n")
                .unwrap();
        assert_eq!(
            config.user.unwrap().last_name.as_deref(),
            Some("${TYPED_APP_SURELY_UNSET}")
        );
    }

    #[test]
    fn test_ragged_matrix_is_a_parse_error() {
        let err = DemoConfig::from_toml_str("[matrices]\na = [[1, 2], [3]]\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("All rows must have the same length"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(DemoConfig::from_toml_str("[matrices]\ne = [[1]]\n").is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_email = DemoConfig::from_toml_str("[user]\nemail = \"nope\"\n").unwrap();
        assert!(bad_email.validate().is_err());

        let zero_identity = DemoConfig::from_toml_str("[matrices]\nidentity_size = 0\n").unwrap();
        assert!(zero_identity.validate().is_err());

        let blank_name = DemoConfig::from_toml_str("[user]\nfirst_name = \"  \"\n").unwrap();
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_blank_last_name_rejected() {
        let config = DemoConfig::from_toml_str("[user]\nlast_name = \"  \"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("user.last_name"));
    }

    #[test]
    fn test_non_finite_matrix_values_rejected() {
        let config =
            DemoConfig::from_toml_str("[matrices]\nsquare = [[nan, 1.0], [1.0, 2.0]]\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("matrices.square"));

        let config = DemoConfig::from_toml_str("[matrices]\nb = [[1.0, -inf]]\n").unwrap();
        assert!(config.validate().is_err());

        let config = DemoConfig::from_toml_str("[matrices]\nc = [[1.0, 2.5]]\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[prices]\nvalues = [10, 20.5]\n")
            .unwrap();

        let config = DemoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.to_inputs().prices, vec![10.0, 20.5]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DemoConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
