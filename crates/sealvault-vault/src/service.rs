// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The trust boundary's command surface.
//!
//! Each command runs one load -> unseal -> authorize -> mutate -> seal ->
//! persist pipeline. Input validation happens before any I/O, the password
//! is checked strictly after a successful unseal and strictly before any
//! mutation, and nothing is persisted unless every earlier step succeeded.
//! The unsealed [`Vault`] is owned by the pipeline and zeroized when it
//! drops, on success and on every error path.

use sealvault_core::{BlobStore, MAX_ITEMS, VaultError, VaultState};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use crate::crypto::SealingEngine;
use crate::model::{check_password_len, Item, Vault};

/// The five vault commands plus an existence probe, over an injected
/// host storage collaborator.
#[derive(Debug)]
pub struct TrustedVaultService<S> {
    store: S,
    engine: SealingEngine,
}

impl<S: BlobStore> TrustedVaultService<S> {
    pub fn new(store: S, engine: SealingEngine) -> Self {
        Self { store, engine }
    }

    /// Create an empty vault. Fails if any blob is already present.
    pub fn create(&self, master_password: &SecretString) -> Result<(), VaultError> {
        let vault = Vault::new(master_password.expose_secret())?;

        if self.store.exists() {
            warn!("create refused: a vault blob is already present");
            return Err(VaultError::AlreadyExists);
        }

        self.commit(&vault)?;
        info!("vault created");
        Ok(())
    }

    /// Return the unsealed vault for display.
    pub fn show(&self, master_password: &SecretString) -> Result<Vault, VaultError> {
        let vault = self.unlock(master_password)?;
        info!(items = vault.len(), "vault retrieved");
        Ok(vault)
    }

    /// Replace the master password after verifying the old one.
    pub fn change_password(
        &self,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), VaultError> {
        check_password_len(new_password.expose_secret())?;

        let mut vault = self.unlock(old_password)?;
        vault.set_master_password(new_password.expose_secret())?;
        self.commit(&vault)?;
        info!("master password changed");
        Ok(())
    }

    /// Append a credential entry.
    pub fn add_item(
        &self,
        master_password: &SecretString,
        title: &str,
        username: &str,
        password: &str,
    ) -> Result<(), VaultError> {
        let item = Item::new(title, username, password)?;

        let mut vault = self.unlock(master_password)?;
        vault.append_item(item)?;
        self.commit(&vault)?;
        info!(items = vault.len(), "item added");
        Ok(())
    }

    /// Remove the entry at `index`, keeping the order of the others.
    pub fn remove_item(&self, master_password: &SecretString, index: i64) -> Result<(), VaultError> {
        if !usize::try_from(index).is_ok_and(|i| i < MAX_ITEMS) {
            return Err(VaultError::NotFound { index });
        }

        let mut vault = self.unlock(master_password)?;
        vault.remove_item(index)?;
        self.commit(&vault)?;
        info!(index, items = vault.len(), "item removed");
        Ok(())
    }

    /// Report whether a blob is present and whether this boundary can unseal it.
    ///
    /// Needs no password; only the seal is checked and the vault is dropped
    /// immediately.
    pub fn probe(&self) -> VaultState {
        if !self.store.exists() {
            return VaultState::Absent;
        }
        match self.open() {
            Ok(_) => VaultState::Sealed,
            Err(e) => {
                debug!(kind = %e.kind(), "persisted blob is unreadable");
                VaultState::Unreadable
            }
        }
    }

    /// Load and unseal the persisted vault.
    fn open(&self) -> Result<Vault, VaultError> {
        let blob = self
            .store
            .load()
            .map_err(|e| VaultError::LoadFailure { source: Box::new(e) })?;
        debug!(bytes = blob.len(), "sealed blob loaded");

        self.engine.unseal(&blob).inspect_err(|e| {
            if matches!(e, VaultError::Tamper) {
                warn!("sealed blob failed integrity check");
            }
        })
    }

    /// Open the vault and check `password` against it.
    fn unlock(&self, password: &SecretString) -> Result<Vault, VaultError> {
        let vault = self.open()?;
        if !vault.authorize(password.expose_secret()) {
            warn!("wrong master password");
            return Err(VaultError::Unauthorized);
        }
        Ok(vault)
    }

    /// Seal `vault` and hand the blob to the host.
    fn commit(&self, vault: &Vault) -> Result<(), VaultError> {
        let blob = self.engine.seal(vault)?;
        self.store
            .save(&blob)
            .map_err(|e| VaultError::PersistFailure { source: Box::new(e) })?;
        debug!(bytes = blob.len(), "sealed blob persisted");
        Ok(())
    }
}
