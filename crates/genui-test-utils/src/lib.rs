// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for GenUI Playground integration tests.
//!
//! Provides mock backends and a router harness for fast, deterministic tests
//! without network access.
//!
//! # Components
//!
//! - [`ManualClock`] - Clock that advances only when told to
//! - [`MockImageGenerator`] - Image generator with pre-configured results
//! - [`TestHarness`] - Full gateway router wired to the mocks

pub mod clock;
pub mod harness;
pub mod mock_generator;

pub use clock::ManualClock;
pub use harness::{TestHarness, TestResponse};
pub use mock_generator::{MockImageGenerator, MockResult};
