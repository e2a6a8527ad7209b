// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as URL schemes and paired credential fields.

use crate::diagnostic::ConfigError;
use crate::model::VoxlineConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &VoxlineConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.app.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "app.name must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.app.log_level
            ),
        });
    }

    let base_url = config.connexcs.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "connexcs.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("connexcs.base_url must be an http(s) URL, got `{base_url}`"),
        });
    }

    if config.connexcs.agent_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "connexcs.agent_model must not be empty".to_string(),
        });
    }

    // Credentials must come as a pair; a lone half is a misconfiguration
    // rather than a mock-mode request.
    let entry = &config.integrations.connexcs;
    match (&entry.username, &entry.password) {
        (Some(_), None) => errors.push(ConfigError::Validation {
            message: "integrations.connexcs.password must be set when username is set"
                .to_string(),
        }),
        (None, Some(_)) => errors.push(ConfigError::Validation {
            message: "integrations.connexcs.username must be set when password is set"
                .to_string(),
        }),
        _ => {}
    }

    if let Some(username) = &entry.username
        && username.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "integrations.connexcs.username must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
