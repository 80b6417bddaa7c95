// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-empty paths and distinct blob and identity locations.

use crate::diagnostic::ConfigError;
use crate::model::SealVaultConfig;

/// Accepted values for `log.level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &SealVaultConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let vault_path = config.storage.vault_path.trim();
    let identity_path = config.sealing.identity_path.trim();

    if vault_path.is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.vault_path must not be empty".to_string(),
        });
    }

    if identity_path.is_empty() {
        errors.push(ConfigError::Validation {
            message: "sealing.identity_path must not be empty".to_string(),
        });
    }

    if !vault_path.is_empty() && vault_path == identity_path {
        errors.push(ConfigError::Validation {
            message: format!(
                "storage.vault_path and sealing.identity_path must differ, both are `{vault_path}`"
            ),
        });
    }

    if config.sealing.key_label.is_empty() {
        errors.push(ConfigError::Validation {
            message: "sealing.key_label must not be empty".to_string(),
        });
    }

    let level = config.log.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
