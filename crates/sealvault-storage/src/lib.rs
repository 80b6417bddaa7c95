// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host storage collaborator for sealvault.
//!
//! Stores the sealed blob as one file. The trust boundary never gives this
//! crate anything but opaque ciphertext.

pub mod file;

pub use file::FileBlobStore;
