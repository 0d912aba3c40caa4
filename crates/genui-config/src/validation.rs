// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as valid bind hosts, positive retention windows, and backend-specific
//! required keys.

use crate::diagnostic::ConfigError;
use crate::model::{GenuiConfig, ImageBackend};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &GenuiConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }

    if config.gemini.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.images.retention_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "images.retention_secs must be greater than 0".to_string(),
        });
    }

    if config.images.backend == ImageBackend::Gcs {
        let gcs = &config.images.gcs;
        if gcs.bucket.as_deref().is_none_or(|b| b.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: "images.gcs.bucket is required when images.backend = \"gcs\"".to_string(),
            });
        }
        if gcs.access_token.as_deref().is_none_or(|t| t.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: "images.gcs.access_token is required when images.backend = \"gcs\""
                    .to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&GenuiConfig::default()).is_ok());
    }

    #[test]
    fn empty_host_fails_validation() {
        let mut config = GenuiConfig::default();
        config.server.host = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "server.host"));
    }

    #[test]
    fn malformed_host_fails_validation() {
        let mut config = GenuiConfig::default();
        config.server.host = "local host!".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "not a valid IP"));
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = GenuiConfig::default();
        config.logging.level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "logging.level"));
    }

    #[test]
    fn zero_retention_fails_validation() {
        let mut config = GenuiConfig::default();
        config.images.retention_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "retention_secs"));
    }

    #[test]
    fn gcs_backend_requires_bucket_and_token() {
        let mut config = GenuiConfig::default();
        config.images.backend = ImageBackend::Gcs;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(has_message(&errors, "images.gcs.bucket"));
        assert!(has_message(&errors, "images.gcs.access_token"));
    }

    #[test]
    fn gcs_backend_with_credentials_validates() {
        let mut config = GenuiConfig::default();
        config.images.backend = ImageBackend::Gcs;
        config.images.gcs.bucket = Some("genui-images".into());
        config.images.gcs.access_token = Some("ya29.token".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = GenuiConfig::default();
        config.server.host = String::new();
        config.gemini.model = String::new();
        config.gemini.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
