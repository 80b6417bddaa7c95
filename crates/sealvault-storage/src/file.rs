// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed [`BlobStore`] with write-to-temp-then-rename saves.

use std::io::Write;
use std::path::{Path, PathBuf};

use sealvault_config::model::StorageConfig;
use sealvault_core::BlobStore;
use tracing::debug;

/// Stores the sealed blob at one fixed path.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.vault_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Flush the directory entry so the rename survives a crash.
    #[cfg(unix)]
    fn sync_dir(&self) -> std::io::Result<()> {
        std::fs::File::open(self.dir())?.sync_all()
    }

    #[cfg(not(unix))]
    fn sync_dir(&self) -> std::io::Result<()> {
        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    /// A file at the path counts as present even if it is empty or corrupt.
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> std::io::Result<Vec<u8>> {
        let blob = std::fs::read(&self.path)?;
        debug!(path = %self.path.display(), bytes = blob.len(), "blob read");
        Ok(blob)
    }

    fn save(&self, blob: &[u8]) -> std::io::Result<()> {
        let dir = self.dir();
        std::fs::create_dir_all(dir)?;

        // The temp file lives next to the target so the rename stays on one
        // filesystem; it is removed automatically if any step fails.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(blob)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        self.sync_dir()?;

        debug!(path = %self.path.display(), bytes = blob.len(), "blob written");
        Ok(())
    }
}
