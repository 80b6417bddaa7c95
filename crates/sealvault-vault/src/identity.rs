// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary identity: the secret the sealing key is bound to.
//!
//! Generated once with the system CSPRNG and reused by every later
//! invocation. Blobs sealed under one identity cannot be unsealed under
//! another.

use std::io::Write;
use std::path::Path;

use ring::rand::{SecureRandom, SystemRandom};
use sealvault_core::VaultError;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Length of the identity secret in bytes.
pub const IDENTITY_LEN: usize = 32;

/// The boundary identity secret.
///
/// Debug output intentionally omits the secret.
pub struct BoundaryIdentity {
    secret: Zeroizing<[u8; IDENTITY_LEN]>,
}

impl std::fmt::Debug for BoundaryIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryIdentity")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl BoundaryIdentity {
    /// Generate a fresh random identity that is never written anywhere.
    pub fn generate() -> Result<Self, VaultError> {
        let rng = SystemRandom::new();
        let mut secret = Zeroizing::new([0u8; IDENTITY_LEN]);
        rng.fill(secret.as_mut())
            .map_err(|_| VaultError::SealFailure("failed to generate boundary identity".into()))?;
        Ok(Self { secret })
    }

    /// Load the identity at `path`, creating it on first use.
    ///
    /// A new identity file is written atomically and, on Unix, readable by
    /// the owner only.
    pub fn load_or_create(path: &Path) -> Result<Self, VaultError> {
        if path.exists() {
            return Self::load(path);
        }

        let identity = Self::generate()?;
        identity.write_new(path)?;
        info!(path = %path.display(), "boundary identity created");
        Ok(identity)
    }

    /// Load an existing identity file.
    pub fn load(path: &Path) -> Result<Self, VaultError> {
        let bytes = Zeroizing::new(std::fs::read(path).map_err(|e| {
            VaultError::SealFailure(format!(
                "cannot read boundary identity {}: {e}",
                path.display()
            ))
        })?);

        let mut secret = Zeroizing::new([0u8; IDENTITY_LEN]);
        if bytes.len() != IDENTITY_LEN {
            return Err(VaultError::SealFailure(format!(
                "boundary identity {} is malformed (expected {IDENTITY_LEN} bytes)",
                path.display()
            )));
        }
        secret.copy_from_slice(&bytes);
        debug!(path = %path.display(), "boundary identity loaded");
        Ok(Self { secret })
    }

    pub(crate) fn secret(&self) -> &[u8] {
        self.secret.as_ref()
    }

    fn write_new(&self, path: &Path) -> Result<(), VaultError> {
        let write_err = |e: std::io::Error| {
            VaultError::SealFailure(format!(
                "cannot write boundary identity {}: {e}",
                path.display()
            ))
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;

        // NamedTempFile is created owner-only on Unix.
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(self.secret()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        // Never clobber an identity another process wrote in the meantime.
        tmp.persist_noclobber(path)
            .map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generated_identities_differ() {
        let a = BoundaryIdentity::generate().unwrap();
        let b = BoundaryIdentity::generate().unwrap();
        assert_ne!(a.secret(), b.secret());
    }

    #[test]
    fn load_or_create_persists_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys").join("boundary.key");

        let created = BoundaryIdentity::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::metadata(&path).unwrap().len(), IDENTITY_LEN as u64);

        let reloaded = BoundaryIdentity::load_or_create(&path).unwrap();
        assert_eq!(created.secret(), reloaded.secret());
    }

    #[cfg(unix)]
    #[test]
    fn identity_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("boundary.key");
        BoundaryIdentity::load_or_create(&path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }

    #[test]
    fn malformed_identity_is_seal_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("boundary.key");
        std::fs::write(&path, b"too short").unwrap();

        let err = BoundaryIdentity::load_or_create(&path).unwrap_err();
        assert!(matches!(err, VaultError::SealFailure(msg) if msg.contains("malformed")));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let identity = BoundaryIdentity::generate().unwrap();
        assert!(format!("{identity:?}").contains("[REDACTED]"));
    }
}
