// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `genui config` command implementation.

use genui_config::GenuiConfig;
use genui_core::GenuiError;

/// Prints the effective configuration as TOML with secrets redacted.
pub fn run_config(config: &GenuiConfig) -> Result<(), GenuiError> {
    print!("{}", render_config(config)?);
    Ok(())
}

fn render_config(config: &GenuiConfig) -> Result<String, GenuiError> {
    toml::to_string_pretty(&config.redacted())
        .map_err(|e| GenuiError::Config(format!("failed to render configuration: {e}")))
}
