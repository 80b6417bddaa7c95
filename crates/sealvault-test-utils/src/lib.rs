// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for sealvault integration tests.
//!
//! # Components
//!
//! - [`MemoryBlobStore`] - in-memory host storage with inspectable state
//! - [`FailingBlobStore`] - host storage whose loads or saves can be made to fail
//! - [`TestHarness`] - a service over in-memory storage with an ephemeral identity

pub mod harness;
pub mod memory;

pub use harness::{secret, TestHarness};
pub use memory::{FailingBlobStore, MemoryBlobStore};
