// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the sealvault credential vault.
//!
//! This crate provides the error taxonomy shared by the trust boundary and its
//! front ends, the host storage trait the boundary persists through, and the
//! fixed capacity limits of the vault record.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ErrorKind, VaultError};
pub use traits::BlobStore;
pub use types::{
    FIELD_SLOT_LEN, MAX_FIELD_LEN, MAX_ITEMS, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, VaultState,
};
