// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity limits and common types.

use strum::Display;

/// Maximum number of items a vault holds.
pub const MAX_ITEMS: usize = 100;

/// Maximum content bytes of any stored string.
pub const MAX_FIELD_LEN: usize = 99;

/// Width of one fixed string slot: content plus NUL terminator.
pub const FIELD_SLOT_LEN: usize = MAX_FIELD_LEN + 1;

/// Minimum master password length in bytes.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum master password length in bytes.
pub const MAX_PASSWORD_LEN: usize = MAX_FIELD_LEN;

/// Persisted state of the vault as seen by the trust boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum VaultState {
    /// No blob is persisted.
    Absent,
    /// A blob is persisted and this boundary can unseal it.
    Sealed,
    /// A blob is persisted but cannot be loaded or unsealed.
    Unreadable,
}
