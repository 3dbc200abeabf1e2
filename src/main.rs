// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Revo - adaptive render-quality optimizer
//!
//! Entry point for the Revo CLI application.

use clap::Parser;

use revo::cli::{Cli, Commands};
use revo::commands;
use revo::config::Settings;
use revo::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables optimizer diagnostics without
    // requiring users to know target names up front. `RUST_LOG` still takes
    // precedence.
    let directive = match cli.verbose {
        0 => None,
        1 => Some("revo=debug"),
        _ => Some("revo=trace"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    // Ensure directories exist
    Settings::ensure_directories()?;

    // Dispatch to appropriate command
    match cli.command {
        Commands::Probe(args) => {
            commands::probe::execute(&args, &cli.format, &settings)?;
        }
        Commands::Tiers => {
            commands::tiers::execute(&cli.format)?;
        }
        Commands::Watch(args) => {
            commands::watch::execute(&args, &settings).await?;
        }
    }

    Ok(())
}
