// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GenUI Playground service.
//!
//! This is the binary entry point: pattern registry, image generation proxy,
//! and agent tools behind one HTTP server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod patterns;
mod serve;
mod show_config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GenUI Playground backend: UI patterns and cached AI images.
#[derive(Parser, Debug)]
#[command(name = "genui", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server.
    Serve,
    /// List registered UI patterns.
    Patterns(patterns::PatternsArgs),
    /// Print the effective configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => genui_config::load_and_validate_path(path),
        None => genui_config::load_and_validate(),
    };
    let config = match config {
        Ok(config) => config,
        Err(errors) => {
            genui_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Patterns(args)) => patterns::run_patterns(&args),
        Some(Commands::Config) => show_config::run_config(&config),
        None => {
            println!("genui: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
