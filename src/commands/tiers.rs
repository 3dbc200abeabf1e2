// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tier ladder command

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::quality::QualityTier;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TierRow {
    tier: String,
    resolution: (u32, u32),
    frame_rate: u32,
    chunk_size_bytes: usize,
    image_compression_quality: u8,
}

fn rows() -> Vec<TierRow> {
    QualityTier::ladder()
        .iter()
        .map(|tier| TierRow {
            tier: tier.to_string(),
            resolution: tier.resolution(),
            frame_rate: tier.frame_rate(),
            chunk_size_bytes: tier.chunk_size_bytes(),
            image_compression_quality: tier.image_compression_quality(),
        })
        .collect()
}

/// Execute the tiers command
pub fn execute(format: &OutputFormat) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&rows())?);
        return Ok(());
    }

    println!("\n=== Quality Tier Ladder ===\n");
    println!(
        "{:<8} {:>11} {:>5} {:>7} {:>12}",
        "Tier", "Resolution", "FPS", "Chunk", "Compression"
    );
    for row in rows() {
        println!(
            "{:<8} {:>6}x{:<4} {:>5} {:>7} {:>12}",
            row.tier,
            row.resolution.0,
            row.resolution.1,
            row.frame_rate,
            row.chunk_size_bytes,
            row.image_compression_quality
        );
    }
    println!();

    Ok(())
}
