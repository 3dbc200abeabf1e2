// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Revo
//!
//! The adaptive core itself never fails: missing capability signals fall
//! back to documented defaults. These types cover the settings file and
//! CLI surface.

use thiserror::Error;

/// Main error type for Revo operations
#[derive(Error, Debug)]
pub enum RevoError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sampler lifecycle errors
    #[error("Sampler error: {0}")]
    Sampler(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Revo operations
pub type Result<T> = std::result::Result<T, RevoError>;
