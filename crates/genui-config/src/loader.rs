// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./genui.toml` > `~/.config/genui/genui.toml` > `/etc/genui/genui.toml`
//! with environment variable overrides via the `GENUI_` prefix and the bare
//! `GEMINI_API_KEY` variable.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::GenuiConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/genui/genui.toml` (system-wide)
/// 3. `~/.config/genui/genui.toml` (user XDG config)
/// 4. `./genui.toml` (local directory)
/// 5. `GEMINI_API_KEY`
/// 6. `GENUI_*` environment variables
pub fn load_config() -> Result<GenuiConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<GenuiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GenuiConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// Unlike the XDG files, an explicitly named file must exist.
pub fn load_config_from_path(path: &Path) -> Result<GenuiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GenuiConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(gemini_key_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(GenuiConfig::default()))
        .merge(Toml::file("/etc/genui/genui.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("genui/genui.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("genui.toml"))
        .merge(gemini_key_provider())
        .merge(env_provider())
}

/// `GEMINI_API_KEY` is the conventional variable for the Gemini API; accept it
/// unprefixed so existing deployments keep working.
fn gemini_key_provider() -> Env {
    Env::raw()
        .only(&["GEMINI_API_KEY"])
        .map(|_| "gemini.api_key".into())
}

/// Create the `GENUI_` environment variable provider.
///
/// Uses an explicit section map rather than `Env::split("_")` because keys
/// contain underscores: `GENUI_IMAGES_GCS_ACCESS_TOKEN` must map to
/// `images.gcs.access_token`, not `images.gcs.access.token`.
fn env_provider() -> Env {
    Env::prefixed("GENUI_").map(|key| map_env_key(&key.as_str().to_ascii_lowercase()).into())
}

/// Map a prefix-stripped env var name (lowercased by the caller) to a dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    const SECTIONS: &[(&str, &str)] = &[
        ("images_gcs_", "images.gcs."),
        ("images_", "images."),
        ("server_", "server."),
        ("logging_", "logging."),
        ("gemini_", "gemini."),
    ];

    for (prefix, dotted) in SECTIONS {
        if let Some(rest) = key.strip_prefix(prefix) {
            return format!("{dotted}{rest}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(map_env_key("server_port"), "server.port");
        assert_eq!(map_env_key("logging_level"), "logging.level");
        assert_eq!(map_env_key("gemini_api_key"), "gemini.api_key");
        assert_eq!(map_env_key("images_retention_secs"), "images.retention_secs");
        assert_eq!(
            map_env_key("images_gcs_access_token"),
            "images.gcs.access_token"
        );
        assert_eq!(map_env_key("unknown"), "unknown");
    }

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
