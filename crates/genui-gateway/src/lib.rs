// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the GenUI Playground.
//!
//! Serves the image generation proxy, the pattern registry, and the agent
//! tools over a single axum router. All backends are injected through
//! [`GatewayState`], so tests can drive [`build_router`] with in-memory stores
//! and mock generators.

pub mod handlers;
pub mod patterns;
pub mod server;
pub mod tools;

pub use server::{build_router, start_server, GatewayState, ServerConfig};
