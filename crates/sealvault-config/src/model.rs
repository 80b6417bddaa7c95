// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for sealvault.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level sealvault configuration.
///
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SealVaultConfig {
    /// Host storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Sealing key settings.
    #[serde(default)]
    pub sealing: SealingConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Host storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the single sealed vault blob.
    #[serde(default = "default_vault_path")]
    pub vault_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            vault_path: default_vault_path(),
        }
    }
}

fn default_vault_path() -> String {
    "wallet.seal".to_string()
}

/// Sealing key configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SealingConfig {
    /// Path of the boundary identity secret. Created on first use.
    #[serde(default = "default_identity_path")]
    pub identity_path: String,

    /// HKDF info label the sealing key is derived under.
    #[serde(default = "default_key_label")]
    pub key_label: String,
}

impl Default for SealingConfig {
    fn default() -> Self {
        Self {
            identity_path: default_identity_path(),
            key_label: default_key_label(),
        }
    }
}

fn default_identity_path() -> String {
    "boundary.key".to_string()
}

fn default_key_label() -> String {
    "sealvault/seal-key/v1".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
