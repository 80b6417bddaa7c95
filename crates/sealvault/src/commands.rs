// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command dispatch for the `sealvault` binary.
//!
//! Resolves passwords from flags, the environment, or a prompt, runs the
//! matching service command, and returns the line to print on success.

use sealvault_core::{BlobStore, VaultError};
use sealvault_vault::{
    get_master_password, get_new_password_with_confirm, PromptError, TrustedVaultService,
};
use secrecy::SecretString;
use thiserror::Error;

use crate::display;
use crate::Commands;

/// Exit code for failures outside the vault itself.
const FRONT_END_EXIT_CODE: i32 = 1;

/// Anything that stops a command from completing.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Vault(e) => e.exit_code(),
            Self::Prompt(_) => FRONT_END_EXIT_CODE,
        }
    }
}

/// Run `command` against `service`.
pub fn execute<S: BlobStore>(
    service: &TrustedVaultService<S>,
    command: Commands,
) -> Result<String, CliError> {
    match command {
        Commands::Create { master_password } => {
            let password = new_password(master_password, true)?;
            service.create(&password)?;
            Ok(display::success("vault created"))
        }
        Commands::Show {
            master_password,
            reveal,
        } => {
            let password = master(master_password)?;
            let vault = service.show(&password)?;
            Ok(display::render_vault(&vault, reveal))
        }
        Commands::ChangePassword {
            master_password,
            new_password: replacement,
        } => {
            let old = master(master_password)?;
            let new = new_password(replacement, false)?;
            service.change_password(&old, &new)?;
            Ok(display::success("master password changed"))
        }
        Commands::Add {
            master_password,
            title,
            username,
            password,
        } => {
            let master_pw = master(master_password)?;
            service.add_item(&master_pw, &title, &username, &password)?;
            Ok(display::success(&format!("added \"{title}\"")))
        }
        Commands::Remove {
            master_password,
            index,
        } => {
            let password = master(master_password)?;
            service.remove_item(&password, index)?;
            Ok(display::success(&format!("removed item {index}")))
        }
        Commands::Status => Ok(display::render_state(service.probe())),
    }
}

fn master(flag: Option<String>) -> Result<SecretString, PromptError> {
    match flag {
        Some(value) => Ok(SecretString::from(value)),
        None => get_master_password(),
    }
}

fn new_password(flag: Option<String>, allow_env: bool) -> Result<SecretString, PromptError> {
    match flag {
        Some(value) => Ok(SecretString::from(value)),
        None => get_new_password_with_confirm(allow_env),
    }
}
