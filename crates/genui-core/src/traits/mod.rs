// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam traits between the gateway and its backends.
//!
//! Async traits use `#[async_trait]` so they can be held as
//! `Arc<dyn ...>` inside shared server state.

pub mod clock;
pub mod generator;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use generator::ImageGenerator;
pub use store::ImageStore;
