// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory host storage doubles.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use sealvault_core::BlobStore;
use tracing::debug;

/// Blob storage held in memory. Clones share the same blob.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blob: Arc<Mutex<Option<Vec<u8>>>>,
    saves: Arc<AtomicUsize>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current blob, if any.
    pub fn blob(&self) -> Option<Vec<u8>> {
        self.lock().clone()
    }

    /// Overwrite the stored bytes directly, bypassing the save counter.
    pub fn set_blob(&self, blob: Vec<u8>) {
        *self.lock() = Some(blob);
    }

    /// Flip bits of one stored byte.
    ///
    /// # Panics
    ///
    /// Panics if no blob is stored or `index` is out of range.
    pub fn corrupt(&self, index: usize, mask: u8) {
        let mut guard = self.lock();
        let blob = guard.as_mut().expect("no blob stored");
        blob[index] ^= mask;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        self.blob.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BlobStore for MemoryBlobStore {
    fn exists(&self) -> bool {
        self.lock().is_some()
    }

    fn load(&self) -> std::io::Result<Vec<u8>> {
        self.lock().clone().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no blob stored")
        })
    }

    fn save(&self, blob: &[u8]) -> std::io::Result<()> {
        *self.lock() = Some(blob.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        debug!(bytes = blob.len(), "memory blob saved");
        Ok(())
    }
}

/// Wraps a [`MemoryBlobStore`] and fails loads or saves on demand.
#[derive(Debug, Clone, Default)]
pub struct FailingBlobStore {
    inner: MemoryBlobStore,
    fail_load: Arc<AtomicBool>,
    fail_save: Arc<AtomicBool>,
}

impl FailingBlobStore {
    pub fn new(inner: MemoryBlobStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &MemoryBlobStore {
        &self.inner
    }
}

impl BlobStore for FailingBlobStore {
    fn exists(&self) -> bool {
        self.inner.exists()
    }

    fn load(&self) -> std::io::Result<Vec<u8>> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("injected load failure"));
        }
        self.inner.load()
    }

    fn save(&self, blob: &[u8]) -> std::io::Result<()> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("injected save failure"));
        }
        self.inner.save(blob)
    }
}
