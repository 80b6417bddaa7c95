// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the sealvault configuration system.

use figment::Jail;
use sealvault_config::diagnostic::ConfigError;
use sealvault_config::{
    load_and_validate, load_and_validate_path, load_and_validate_str, load_config,
    load_config_from_str,
};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[storage]
vault_path = "/var/lib/sealvault/wallet.seal"

[sealing]
identity_path = "/var/lib/sealvault/boundary.key"
key_label = "custom-label"

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.storage.vault_path, "/var/lib/sealvault/wallet.seal");
    assert_eq!(config.sealing.identity_path, "/var/lib/sealvault/boundary.key");
    assert_eq!(config.sealing.key_label, "custom-label");
    assert_eq!(config.log.level, "debug");
}

/// An empty document yields the compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.storage.vault_path, "wallet.seal");
    assert_eq!(config.sealing.identity_path, "boundary.key");
    assert_eq!(config.sealing.key_label, "sealvault/seal-key/v1");
    assert_eq!(config.log.level, "info");
}

/// A misspelled key produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_in_storage_suggests_correction() {
    let toml = r#"
[storage]
vault_pth = "x.seal"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let found = errors.iter().any(|e| {
        matches!(
            e,
            ConfigError::UnknownKey { key, suggestion: Some(s), .. }
                if key == "vault_pth" && s == "vault_path"
        )
    });
    assert!(found, "expected an UnknownKey suggestion, got: {errors:?}");
}

/// Unknown top-level sections are rejected.
#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[network]
port = 8080
"#;
    assert!(load_config_from_str(toml).is_err());
}

/// A string where a table is expected yields a type diagnostic.
#[test]
fn wrong_type_produces_error() {
    let toml = r#"
log = "debug"
"#;
    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(!errors.is_empty());
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_through_loader() {
    let toml = r#"
[storage]
vault_path = "same"

[sealing]
identity_path = "same"
"#;
    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("must differ"))));
}

/// Local `./sealvault.toml` is picked up and env vars override it.
#[test]
fn env_overrides_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "sealvault.toml",
            r#"
[storage]
vault_path = "from-file.seal"

[log]
level = "warn"
"#,
        )?;
        jail.set_env("SEALVAULT_STORAGE_VAULT_PATH", "from-env.seal");

        let config = load_config()?;
        assert_eq!(config.storage.vault_path, "from-env.seal");
        assert_eq!(config.log.level, "warn");
        Ok(())
    });
}

/// Underscored key names map to their section, not to nested tables.
#[test]
fn env_maps_underscored_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("SEALVAULT_SEALING_IDENTITY_PATH", "id.key");
        jail.set_env("SEALVAULT_SEALING_KEY_LABEL", "label-from-env");
        jail.set_env("SEALVAULT_LOG_LEVEL", "trace");

        let config = load_config()?;
        assert_eq!(config.sealing.identity_path, "id.key");
        assert_eq!(config.sealing.key_label, "label-from-env");
        assert_eq!(config.log.level, "trace");
        Ok(())
    });
}

/// The master password variable shares the prefix but is not a config key.
#[test]
fn master_password_env_is_not_a_config_key() {
    Jail::expect_with(|jail| {
        jail.set_env("SEALVAULT_MASTER_PASSWORD", "longpass1");
        let config = load_and_validate().expect("password env must not break config");
        assert_eq!(config.storage.vault_path, "wallet.seal");
        Ok(())
    });
}

/// An explicit path is loaded on its own.
#[test]
fn explicit_path_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[storage]\nvault_path = \"custom.seal\"\n")?;
        let path = jail.directory().join("custom.toml");
        let config = load_and_validate_path(&path).expect("explicit config should load");
        assert_eq!(config.storage.vault_path, "custom.seal");
        Ok(())
    });
}

/// A missing explicit path is reported instead of silently using defaults.
#[test]
fn missing_explicit_path_is_reported() {
    let errors = load_and_validate_path(std::path::Path::new("/nonexistent/sealvault.toml"))
        .expect_err("missing file should be an error");
    assert!(matches!(&errors[0], ConfigError::Other(msg) if msg.contains("not found")));
}
