// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern registry for the GenUI Playground.
//!
//! A pattern is a pre-built UI component the chat agent can recommend:
//! metadata, its canonical TSX source, and props for a demo render. This
//! crate provides:
//! - [`PatternRegistry`] -- keyed store with category, domain and text search
//! - [`builtin`] -- the six patterns shipped with the service
//! - [`card`] and [`gallery`] -- card views with prop overrides
//! - [`discovery`] -- agent tools that query the registry

pub mod builtin;
pub mod card;
pub mod discovery;
pub mod gallery;
pub mod registry;

pub use card::{render_card, resolve_props, PatternCard, PatternCardView};
pub use discovery::register_discovery_tools;
pub use gallery::{render_gallery, GalleryEntry, GalleryRequest, GalleryView};
pub use registry::{PatternDescriptor, PatternRegistry};
