// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The sealvault trust boundary.
//!
//! Plaintext vault contents exist only inside this crate. The host receives a
//! single opaque blob sealed with AES-256-GCM under a key derived from the
//! boundary identity, and every command re-loads and re-unseals that blob.

pub mod codec;
pub mod crypto;
pub mod identity;
pub mod model;
pub mod prompt;
pub mod service;

pub use crypto::{SealingEngine, SEALED_LEN};
pub use identity::BoundaryIdentity;
pub use model::{Item, Vault};
pub use prompt::{get_master_password, get_new_password_with_confirm, PromptError};
pub use service::TrustedVaultService;

/// Mask a secret value for display: `"hunter2-secret"` -> `"hunt...cret"`.
///
/// Values shorter than 10 characters are fully masked as `"****"`, so the
/// prefix and suffix never cover the whole value.
pub fn mask_secret(value: &str) -> String {
    if value.chars().count() < 10 {
        return "****".to_string();
    }
    let prefix: String = value.chars().take(4).collect();
    let suffix: String = {
        let tail: Vec<char> = value.chars().rev().take(4).collect();
        tail.into_iter().rev().collect()
    };
    format!("{prefix}...{suffix}")
}
