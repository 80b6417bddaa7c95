// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the sealvault credential vault.
//!
//! Every command handler reports exactly one [`VaultError`] on failure. None
//! of the variants carry plaintext secrets.

use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// The error type returned by every trust-boundary command.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Master or new password length outside the allowed range.
    #[error("password length {len} is outside the allowed range of 8..=99 bytes")]
    PasswordOutOfRange { len: usize },

    /// Create was invoked while a vault blob is already present.
    #[error("a vault already exists at the configured location")]
    AlreadyExists,

    /// An item field exceeds its fixed slot.
    #[error("item {field} exceeds 99 bytes")]
    ItemTooLong { field: &'static str },

    /// The vault holds the maximum number of items.
    #[error("vault is full (100 items)")]
    Full,

    /// Item index is negative, beyond capacity, or past the live items.
    #[error("no item at index {index}")]
    NotFound { index: i64 },

    /// Supplied password does not match the stored master password.
    #[error("wrong master password")]
    Unauthorized,

    /// The sealed blob failed its integrity or authenticity check.
    #[error("sealed vault failed integrity check -- corrupted blob or foreign key")]
    Tamper,

    /// The host storage collaborator could not return the blob.
    #[error("cannot load vault: {source}")]
    LoadFailure {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The host storage collaborator could not persist the blob.
    #[error("cannot save vault: {source}")]
    PersistFailure {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The sealing engine could not produce a blob or could not be opened.
    #[error("sealing failed: {0}")]
    SealFailure(String),
}

/// Fieldless classification of [`VaultError`], used for exit codes and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    PasswordOutOfRange,
    AlreadyExists,
    ItemTooLong,
    Full,
    NotFound,
    Unauthorized,
    Tamper,
    LoadFailure,
    PersistFailure,
    SealFailure,
}

impl ErrorKind {
    /// Process exit code for this kind. `0` is success and `1` is reserved
    /// for front-end failures outside the trust boundary.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::PasswordOutOfRange => 2,
            ErrorKind::AlreadyExists => 3,
            ErrorKind::ItemTooLong => 4,
            ErrorKind::Full => 5,
            ErrorKind::NotFound => 6,
            ErrorKind::Unauthorized => 7,
            ErrorKind::Tamper => 8,
            ErrorKind::LoadFailure => 9,
            ErrorKind::PersistFailure => 10,
            ErrorKind::SealFailure => 11,
        }
    }
}

impl VaultError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VaultError::PasswordOutOfRange { .. } => ErrorKind::PasswordOutOfRange,
            VaultError::AlreadyExists => ErrorKind::AlreadyExists,
            VaultError::ItemTooLong { .. } => ErrorKind::ItemTooLong,
            VaultError::Full => ErrorKind::Full,
            VaultError::NotFound { .. } => ErrorKind::NotFound,
            VaultError::Unauthorized => ErrorKind::Unauthorized,
            VaultError::Tamper => ErrorKind::Tamper,
            VaultError::LoadFailure { .. } => ErrorKind::LoadFailure,
            VaultError::PersistFailure { .. } => ErrorKind::PersistFailure,
            VaultError::SealFailure(_) => ErrorKind::SealFailure,
        }
    }

    /// Shorthand for [`ErrorKind::exit_code`] on this error's kind.
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}
