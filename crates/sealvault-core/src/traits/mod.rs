// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions at the edge of the trust boundary.

pub mod storage;

pub use storage::BlobStore;
