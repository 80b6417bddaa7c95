// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for command-level tests.
//!
//! `TestHarness` wires a [`TrustedVaultService`] to a [`MemoryBlobStore`]
//! and a sealing engine over a freshly generated boundary identity, so
//! tests run without touching the filesystem.

use sealvault_core::VaultError;
use sealvault_vault::{BoundaryIdentity, SealingEngine, TrustedVaultService};
use secrecy::SecretString;

use crate::memory::MemoryBlobStore;

/// Label used for every harness engine.
const TEST_KEY_LABEL: &str = "sealvault/test";

/// Wrap a literal password.
pub fn secret(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    master_password: Option<String>,
    items: usize,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            master_password: None,
            items: 0,
        }
    }

    /// Create the vault with this master password before returning.
    pub fn with_vault(mut self, master_password: &str) -> Self {
        self.master_password = Some(master_password.to_string());
        self
    }

    /// Pre-populate the vault with `count` items named `site-<n>`.
    ///
    /// Requires [`TestHarnessBuilder::with_vault`].
    pub fn with_items(mut self, count: usize) -> Self {
        self.items = count;
        self
    }

    pub fn build(self) -> Result<TestHarness, VaultError> {
        let store = MemoryBlobStore::new();
        let engine = SealingEngine::new(&BoundaryIdentity::generate()?, TEST_KEY_LABEL)?;
        let service = TrustedVaultService::new(store.clone(), engine);

        if let Some(password) = &self.master_password {
            let password = secret(password);
            service.create(&password)?;
            for n in 0..self.items {
                service.add_item(
                    &password,
                    &format!("site-{n}"),
                    &format!("user-{n}"),
                    &format!("pw-{n}"),
                )?;
            }
        }

        Ok(TestHarness { service, store })
    }
}

/// A vault service over in-memory storage.
pub struct TestHarness {
    pub service: TrustedVaultService<MemoryBlobStore>,
    pub store: MemoryBlobStore,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Current persisted blob, panicking if there is none.
    pub fn blob(&self) -> Vec<u8> {
        self.store.blob().expect("harness has no persisted blob")
    }
}
