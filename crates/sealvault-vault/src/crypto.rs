// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The sealing engine: AES-256-GCM over the fixed-layout vault.
//!
//! The key is derived from the [`BoundaryIdentity`] with HKDF-SHA256 and never
//! leaves this module. Every seal draws a fresh random 96-bit nonce; nonce
//! reuse would be catastrophic for GCM security.
//!
//! Blob layout: `nonce (12) || ciphertext (PLAINTEXT_LEN) || tag (16)`.

use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM, NONCE_LEN};
use ring::hkdf;
use ring::rand::{SecureRandom, SystemRandom};
use sealvault_config::model::SealingConfig;
use sealvault_core::VaultError;
use tracing::debug;

use crate::codec::{self, PLAINTEXT_LEN};
use crate::identity::BoundaryIdentity;
use crate::model::Vault;

/// GCM authentication tag length.
pub const TAG_LEN: usize = 16;

/// Length of every sealed blob.
pub const SEALED_LEN: usize = NONCE_LEN + PLAINTEXT_LEN + TAG_LEN;

/// HKDF salt; fixed so the same identity always yields the same key.
const HKDF_SALT: &[u8] = b"sealvault boundary sealing";

/// Associated data authenticated alongside every blob.
const BLOB_AAD: &[u8] = b"sealvault sealed vault";

/// Seals and unseals vaults under a key bound to one boundary identity.
pub struct SealingEngine {
    key: LessSafeKey,
    rng: SystemRandom,
}

impl std::fmt::Debug for SealingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealingEngine")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl SealingEngine {
    /// Derive the sealing key for `identity` under `key_label`.
    pub fn new(identity: &BoundaryIdentity, key_label: &str) -> Result<Self, VaultError> {
        let prk = hkdf::Salt::new(hkdf::HKDF_SHA256, HKDF_SALT).extract(identity.secret());
        let info = [key_label.as_bytes()];
        let okm = prk
            .expand(&info, &AES_256_GCM)
            .map_err(|_| VaultError::SealFailure("sealing key derivation failed".into()))?;
        Ok(Self {
            key: LessSafeKey::new(UnboundKey::from(okm)),
            rng: SystemRandom::new(),
        })
    }

    /// Open the engine for the identity named in `config`, creating it on first use.
    pub fn from_config(config: &SealingConfig) -> Result<Self, VaultError> {
        let identity = BoundaryIdentity::load_or_create(config.identity_path.as_ref())?;
        Self::new(&identity, &config.key_label)
    }

    /// Encrypt and authenticate `vault` into a blob of exactly [`SEALED_LEN`] bytes.
    pub fn seal(&self, vault: &Vault) -> Result<Vec<u8>, VaultError> {
        let plaintext = codec::encode(vault);

        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| VaultError::SealFailure("failed to generate random nonce".into()))?;

        let mut blob = Vec::with_capacity(SEALED_LEN);
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&plaintext);

        // Encrypt in place; the plaintext copy in `blob` becomes ciphertext.
        let tag = self
            .key
            .seal_in_place_separate_tag(
                Nonce::assume_unique_for_key(nonce_bytes),
                Aad::from(BLOB_AAD),
                &mut blob[NONCE_LEN..],
            )
            .map_err(|_| VaultError::SealFailure("AES-256-GCM encryption failed".into()))?;
        blob.extend_from_slice(tag.as_ref());

        debug!(bytes = blob.len(), items = vault.len(), "vault sealed");
        Ok(blob)
    }

    /// Verify and decrypt a blob produced by [`SealingEngine::seal`].
    ///
    /// Every failure (wrong length, wrong key, altered bytes, or a decoded
    /// record that breaks the vault invariants) is [`VaultError::Tamper`],
    /// and no plaintext is released.
    pub fn unseal(&self, blob: &[u8]) -> Result<Vault, VaultError> {
        if blob.len() != SEALED_LEN {
            return Err(VaultError::Tamper);
        }

        let (nonce_bytes, sealed) = blob.split_at(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce_bytes).map_err(|_| VaultError::Tamper)?;

        let mut in_out = zeroize::Zeroizing::new(sealed.to_vec());
        let plaintext = self
            .key
            .open_in_place(nonce, Aad::from(BLOB_AAD), &mut in_out)
            .map_err(|_| VaultError::Tamper)?;

        if plaintext.len() != PLAINTEXT_LEN {
            return Err(VaultError::Tamper);
        }
        let vault = codec::decode(plaintext)?;
        debug!(items = vault.len(), "vault unsealed");
        Ok(vault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use proptest::prelude::*;

    fn engine() -> SealingEngine {
        SealingEngine::new(&BoundaryIdentity::generate().unwrap(), "test-label").unwrap()
    }

    fn sample() -> Vault {
        let mut vault = Vault::new("longpass1").unwrap();
        vault
            .append_item(Item::new("site", "bob", "p@ss").unwrap())
            .unwrap();
        vault
    }

    #[test]
    fn seal_unseal_roundtrip() {
        let engine = engine();
        let vault = sample();
        let blob = engine.seal(&vault).unwrap();
        assert_eq!(engine.unseal(&blob).unwrap(), vault);
    }

    #[test]
    fn sealed_size_is_fixed() {
        let engine = engine();
        let empty = Vault::new("longpass1").unwrap();
        assert_eq!(engine.seal(&empty).unwrap().len(), SEALED_LEN);
        assert_eq!(engine.seal(&sample()).unwrap().len(), SEALED_LEN);
        assert_eq!(SEALED_LEN, 30_136);
    }

    #[test]
    fn seal_produces_different_blobs_for_same_vault() {
        let engine = engine();
        let vault = sample();
        let a = engine.seal(&vault).unwrap();
        let b = engine.seal(&vault).unwrap();
        assert_ne!(a[..NONCE_LEN], b[..NONCE_LEN]);
        assert_ne!(a, b);
    }

    #[test]
    fn blob_does_not_contain_plaintext() {
        let engine = engine();
        let blob = engine.seal(&sample()).unwrap();
        assert!(!blob.windows(9).any(|w| w == b"longpass1"));
    }

    #[test]
    fn other_identity_cannot_unseal() {
        let blob = engine().seal(&sample()).unwrap();
        assert!(matches!(engine().unseal(&blob), Err(VaultError::Tamper)));
    }

    #[test]
    fn other_label_cannot_unseal() {
        let identity = BoundaryIdentity::generate().unwrap();
        let a = SealingEngine::new(&identity, "label-a").unwrap();
        let b = SealingEngine::new(&identity, "label-b").unwrap();
        let blob = a.seal(&sample()).unwrap();
        assert!(matches!(b.unseal(&blob), Err(VaultError::Tamper)));
    }

    #[test]
    fn same_identity_and_label_unseal() {
        let identity = BoundaryIdentity::generate().unwrap();
        let a = SealingEngine::new(&identity, "label").unwrap();
        let b = SealingEngine::new(&identity, "label").unwrap();
        let blob = a.seal(&sample()).unwrap();
        assert_eq!(b.unseal(&blob).unwrap(), sample());
    }

    #[test]
    fn truncated_and_extended_blobs_are_tamper() {
        let engine = engine();
        let blob = engine.seal(&sample()).unwrap();
        assert!(matches!(engine.unseal(&blob[..blob.len() - 1]), Err(VaultError::Tamper)));
        assert!(matches!(engine.unseal(&[]), Err(VaultError::Tamper)));

        let mut longer = blob.clone();
        longer.push(0);
        assert!(matches!(engine.unseal(&longer), Err(VaultError::Tamper)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn any_flipped_byte_is_tamper(index in 0..SEALED_LEN, mask in 1u8..=255) {
            let engine = engine();
            let mut blob = engine.seal(&sample()).unwrap();
            blob[index] ^= mask;
            prop_assert!(matches!(engine.unseal(&blob), Err(VaultError::Tamper)));
        }

        #[test]
        fn any_valid_vault_roundtrips(
            password in "[ -~]{8,99}",
            items in proptest::collection::vec(
                ("[ -~]{0,99}", "[ -~]{0,99}", "[ -~]{0,99}"),
                0..8,
            ),
        ) {
            let engine = engine();
            let mut vault = Vault::new(&password).unwrap();
            for (title, username, pw) in &items {
                vault.append_item(Item::new(title, username, pw).unwrap()).unwrap();
            }
            let unsealed = engine.unseal(&engine.seal(&vault).unwrap()).unwrap();
            prop_assert_eq!(unsealed, vault);
        }
    }
}
