//! Top-level guard configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ObservabilityConfig, SanitizerConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GUARD_*`)
/// 2. Config file (`GuardConfig::load`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub sanitizer: SanitizerConfig,
    pub observability: ObservabilityConfig,
}

impl GuardConfig {
    /// Load a config file, apply environment overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: GuardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: GuardConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sanitizer.separators.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "sanitizer.separators".to_string(),
                message: "at least one separator is required".to_string(),
            });
        }
        for sep in &self.sanitizer.separators {
            if sep.is_alphanumeric() || sep.is_whitespace() {
                return Err(ConfigError::ValidationFailed {
                    field: "sanitizer.separators".to_string(),
                    message: format!("'{sep}' must be punctuation, not a letter, digit or space"),
                });
            }
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !defaults::VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "'{}' is not one of {}",
                    self.observability.log_level,
                    defaults::VALID_LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Apply `GUARD_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(defaults::ENV_PHRASE_RULES).and_then(|v| v.parse::<bool>().ok()) {
            self.sanitizer.phrase_rules = v;
        }
        if let Some(v) = lookup(defaults::ENV_STRICT).and_then(|v| v.parse::<bool>().ok()) {
            self.sanitizer.strict = v;
        }
        if let Some(v) = lookup(defaults::ENV_LOG_LEVEL) {
            self.observability.log_level = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TermConfig;
    use std::io::Write;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = GuardConfig::from_toml("").unwrap();
        assert_eq!(config, GuardConfig::default());
        assert_eq!(config.sanitizer.separators, vec!['-', '_']);
        assert!(config.sanitizer.phrase_rules);
        assert!(!config.sanitizer.strict);
    }

    #[test]
    fn parses_additional_terms() {
        let config = GuardConfig::from_toml(
            r#"
            [sanitizer]
            separators = ["."]

            [[sanitizer.additional_terms]]
            term = "venmo"
            break_offset = 2

            [[sanitizer.additional_terms]]
            term = "cash"
            break_offset = 1
            exact_word = true
            "#,
        )
        .unwrap();

        assert_eq!(config.sanitizer.separators, vec!['.']);
        assert_eq!(
            config.sanitizer.additional_terms,
            vec![
                TermConfig {
                    term: "venmo".to_string(),
                    break_offset: 2,
                    exact_word: false,
                },
                TermConfig {
                    term: "cash".to_string(),
                    break_offset: 1,
                    exact_word: true,
                },
            ]
        );
    }

    #[test]
    fn rejects_empty_separator_list() {
        let err = GuardConfig::from_toml("[sanitizer]\nseparators = []").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "sanitizer.separators"));
    }

    #[test]
    fn rejects_alphanumeric_separator() {
        let err = GuardConfig::from_toml("[sanitizer]\nseparators = [\"x\"]").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = GuardConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap_err();
        assert!(err.to_string().contains("observability.log_level"));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = GuardConfig::from_toml("[sanitizer\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn overrides_apply_and_ignore_garbage() {
        let mut config = GuardConfig::default();
        config.apply_overrides_from(|key| match key {
            "GUARD_PHRASE_RULES" => Some("false".to_string()),
            "GUARD_STRICT" => Some("not-a-bool".to_string()),
            "GUARD_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });
        assert!(!config.sanitizer.phrase_rules);
        assert!(!config.sanitizer.strict);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let err = GuardConfig::load(Path::new("/definitely/not/here/guard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[observability]\njson = false").unwrap();
        let config = GuardConfig::load(file.path()).unwrap();
        assert!(!config.observability.json);
    }

    #[test]
    fn toml_round_trip_preserves_terms() {
        let mut config = GuardConfig::default();
        config.sanitizer.additional_terms.push(TermConfig {
            term: "zelle".to_string(),
            break_offset: 3,
            exact_word: false,
        });
        let text = config.to_toml().unwrap();
        assert_eq!(GuardConfig::from_toml(&text).unwrap(), config);
    }
}
