// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password acquisition via the SEALVAULT_MASTER_PASSWORD environment variable
//! or a TTY prompt.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// The environment variable name for providing the master password.
pub const MASTER_PASSWORD_ENV_VAR: &str = "SEALVAULT_MASTER_PASSWORD";

/// Why no password could be obtained.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read password: {0}")]
    Read(#[from] std::io::Error),

    #[error("passwords do not match")]
    Mismatch,

    #[error("empty password not allowed")]
    Empty,

    #[error(
        "no password provided. Pass it as an argument, set {MASTER_PASSWORD_ENV_VAR}, or run interactively."
    )]
    Unavailable,
}

/// Get the master password from the environment or an interactive prompt.
///
/// Priority:
/// 1. `SEALVAULT_MASTER_PASSWORD` (for scripts)
/// 2. Interactive TTY prompt via `rpassword`
pub fn get_master_password() -> Result<SecretString, PromptError> {
    if let Some(password) = from_env() {
        return Ok(password);
    }

    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return read_nonempty("Master password: ");
    }

    Err(PromptError::Unavailable)
}

/// Prompt twice for a new password and require both entries to match.
///
/// Used for `create` (where the environment variable is also honoured) and
/// for the replacement password of `change-password` (where it is not, since
/// it already carries the old password).
pub fn get_new_password_with_confirm(allow_env: bool) -> Result<SecretString, PromptError> {
    if allow_env && let Some(password) = from_env() {
        return Ok(password);
    }

    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        let first = read_nonempty("New master password: ")?;
        let second = rpassword::prompt_password("Confirm master password: ")?;
        if first.expose_secret() != second.as_str() {
            return Err(PromptError::Mismatch);
        }
        return Ok(first);
    }

    Err(PromptError::Unavailable)
}

fn from_env() -> Option<SecretString> {
    std::env::var(MASTER_PASSWORD_ENV_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(SecretString::from)
}

fn read_nonempty(prompt: &str) -> Result<SecretString, PromptError> {
    let password = rpassword::prompt_password(prompt)?;
    if password.is_empty() {
        return Err(PromptError::Empty);
    }
    Ok(SecretString::from(password))
}
