// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host storage trait for the single opaque sealed blob.

/// Untrusted host-side storage of exactly one sealed vault blob.
///
/// Implementations never inspect the bytes they store. `load` must return
/// exactly what the last successful `save` received, and `save` must be
/// atomic enough that a reader never observes a partially written blob.
/// Calls are assumed to be serialized by the caller.
pub trait BlobStore {
    /// Returns `true` if a blob is present, regardless of whether it unseals.
    fn exists(&self) -> bool;

    /// Reads the persisted blob.
    fn load(&self) -> std::io::Result<Vec<u8>>;

    /// Replaces the persisted blob.
    fn save(&self, blob: &[u8]) -> std::io::Result<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn load(&self) -> std::io::Result<Vec<u8>> {
        (**self).load()
    }

    fn save(&self, blob: &[u8]) -> std::io::Result<()> {
        (**self).save(blob)
    }
}
