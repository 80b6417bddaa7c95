// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./sealvault.toml` > `~/.config/sealvault/sealvault.toml`
//! > `/etc/sealvault/sealvault.toml` with environment variable overrides via the
//! `SEALVAULT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use tracing::debug;

use crate::model::SealVaultConfig;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SEALVAULT_";

/// Config file name searched in each hierarchy directory.
const CONFIG_FILE_NAME: &str = "sealvault.toml";

/// Config files in merge order (later overrides earlier).
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![Path::new("/etc/sealvault").join(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("sealvault").join(CONFIG_FILE_NAME));
    }
    let local = std::env::current_dir()
        .map(|d| d.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME));
    paths.push(local);
    paths
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/sealvault/sealvault.toml`
/// 3. `~/.config/sealvault/sealvault.toml`
/// 4. `./sealvault.toml`
/// 5. `SEALVAULT_*` environment variables
pub fn load_config() -> Result<SealVaultConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<SealVaultConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SealVaultConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SealVaultConfig, figment::Error> {
    debug!(path = %path.display(), "loading explicit config file");
    Figment::new()
        .merge(Serialized::defaults(SealVaultConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the layered Figment before extraction.
pub fn build_figment() -> Figment {
    search_paths().into_iter().fold(
        Figment::new().merge(Serialized::defaults(SealVaultConfig::default())),
        |figment, path| {
            if path.exists() {
                debug!(path = %path.display(), "merging config file");
            }
            figment.merge(Toml::file(path))
        },
    )
    .merge(env_provider())
}

/// Environment provider with explicit section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `SEALVAULT_STORAGE_VAULT_PATH` must map to
/// `storage.vault_path`, not `storage.vault.path`.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .ignore(&["MASTER_PASSWORD"])
        .map(|key| env_key_to_path(key.as_str()).into())
}

/// Map a prefix-stripped env var name to a dotted config path.
///
/// Figment hands the key over in its original case, so it is lowercased
/// before the section prefix is rewritten.
fn env_key_to_path(key: &str) -> String {
    key.to_ascii_lowercase()
        .replacen("storage_", "storage.", 1)
        .replacen("sealing_", "sealing.", 1)
        .replacen("log_", "log.", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_case_env_keys_map_to_sections() {
        assert_eq!(env_key_to_path("STORAGE_VAULT_PATH"), "storage.vault_path");
        assert_eq!(env_key_to_path("SEALING_KEY_LABEL"), "sealing.key_label");
        assert_eq!(env_key_to_path("SEALING_IDENTITY_PATH"), "sealing.identity_path");
        assert_eq!(env_key_to_path("LOG_LEVEL"), "log.level");
    }

    #[test]
    fn env_override_reaches_nested_field() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SEALVAULT_STORAGE_VAULT_PATH", "env.seal");
            let config: SealVaultConfig = Figment::new()
                .merge(Serialized::defaults(SealVaultConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert_eq!(config.storage.vault_path, "env.seal");
            Ok(())
        });
    }

    #[tracing_test::traced_test]
    #[test]
    fn explicit_path_load_is_logged() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("explicit.toml", "[log]\nlevel = \"debug\"\n")?;
            let config = load_config_from_path(Path::new("explicit.toml"))?;
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
        assert!(logs_contain("loading explicit config file"));
        assert!(logs_contain("explicit.toml"));
    }
}
