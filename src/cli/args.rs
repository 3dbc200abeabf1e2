// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Revo.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::probe::ConnectionClass;

/// Revo - adaptive render-quality optimizer
#[derive(Parser, Debug)]
#[command(name = "revo")]
#[command(version, about = "Adaptive render-quality optimizer for resource-constrained hosts")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe host capabilities and show the derived settings
    #[command(alias = "hw")]
    Probe(ProbeArgs),

    /// Show the quality tier ladder and its parameter tables
    Tiers,

    /// Run the optimizer against live metrics and log adjustments
    Watch(WatchArgs),
}

/// Arguments for the probe subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ProbeArgs {
    /// Show derived settings in addition to raw capabilities
    #[arg(short, long)]
    pub detailed: bool,

    /// Assume a connection class instead of the probed default
    #[arg(long)]
    pub connection: Option<ConnectionClass>,
}

/// Arguments for the watch subcommand
#[derive(clap::Args, Debug)]
pub struct WatchArgs {
    /// Synthetic frame cadence to feed the sampler
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Stop after this many seconds (0 = run until interrupted)
    #[arg(long, default_value_t = 0)]
    pub duration: u64,

    /// Assume a connection class instead of the probed default
    #[arg(long)]
    pub connection: Option<ConnectionClass>,
}

/// Output format options
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

impl ValueEnum for ConnectionClass {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            ConnectionClass::Slow2g,
            ConnectionClass::Cell2g,
            ConnectionClass::Cell3g,
            ConnectionClass::Cell4g,
            ConnectionClass::Unknown,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(match self {
            ConnectionClass::Slow2g => "slow-2g",
            ConnectionClass::Cell2g => "2g",
            ConnectionClass::Cell3g => "3g",
            ConnectionClass::Cell4g => "4g",
            ConnectionClass::Unknown => "unknown",
        }))
    }
}
