// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sealvault - a sealed, single-file password vault.
//!
//! This is the binary entry point. It loads configuration, builds the
//! trust boundary over file-backed storage, and runs one command.

mod commands;
mod display;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use sealvault_config::SealVaultConfig;
use sealvault_core::BlobStore;
use sealvault_storage::FileBlobStore;
use sealvault_vault::{SealingEngine, TrustedVaultService};
use tracing::{debug, info, warn};

use crate::commands::CliError;

/// Sealvault - a sealed, single-file password vault.
#[derive(Parser, Debug)]
#[command(name = "sealvault", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the search path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Create a new empty vault.
    Create {
        /// Master password (falls back to SEALVAULT_MASTER_PASSWORD, then a prompt).
        #[arg(long)]
        master_password: Option<String>,
    },
    /// List the stored items.
    Show {
        #[arg(long)]
        master_password: Option<String>,
        /// Print item passwords in full instead of masked.
        #[arg(long)]
        reveal: bool,
    },
    /// Replace the master password.
    ChangePassword {
        /// Current master password.
        #[arg(long)]
        master_password: Option<String>,
        /// Replacement master password (prompted with confirmation if omitted).
        #[arg(long)]
        new_password: Option<String>,
    },
    /// Add a credential entry.
    Add {
        #[arg(long)]
        master_password: Option<String>,
        #[arg(long)]
        title: String,
        #[arg(long)]
        username: String,
        /// The item's password.
        #[arg(long)]
        password: String,
    },
    /// Remove the entry at INDEX.
    Remove {
        #[arg(long)]
        master_password: Option<String>,
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Report whether a vault exists and can be unsealed.
    Status,
}

impl Commands {
    /// Subcommand name for logs. Never includes argument values.
    fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Show { .. } => "show",
            Self::ChangePassword { .. } => "change-password",
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::Status => "status",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.plain && std::io::stdout().is_terminal();
    if !use_color {
        colored::control::set_override(false);
    }

    let loaded = match &cli.config {
        Some(path) => sealvault_config::load_and_validate_path(path),
        None => sealvault_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            sealvault_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);
    debug!(
        vault = %config.storage.vault_path,
        identity = %config.sealing.identity_path,
        "configuration loaded"
    );

    match run(&config, cli.command) {
        Ok(message) => println!("{message}"),
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            std::process::exit(e.exit_code());
        }
    }
}

/// Build the service described by `config` and run one command against it.
fn run(config: &SealVaultConfig, command: Commands) -> Result<String, CliError> {
    let store = FileBlobStore::from_config(&config.storage);
    if identity_missing_for_vault(config, &store) {
        warn!(
            identity = %config.sealing.identity_path,
            vault = %config.storage.vault_path,
            "boundary identity is missing but a vault file exists; a new identity will be created and cannot unseal it"
        );
    }
    let engine = SealingEngine::from_config(&config.sealing)?;
    let service = TrustedVaultService::new(store, engine);
    info!(command = command.name(), "running command");
    commands::execute(&service, command)
}

/// A vault blob is on disk but the identity that sealed it is gone.
fn identity_missing_for_vault(config: &SealVaultConfig, store: &FileBlobStore) -> bool {
    store.exists() && !Path::new(&config.sealing.identity_path).exists()
}

/// Initialize the tracing subscriber with an env filter, writing to stderr.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sealvault={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
