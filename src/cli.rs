use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ShareCount, Threshold};

/// Validates that threshold is at least 2
/// A threshold of 1 defeats the purpose of Shamir Secret Sharing
/// (any single share would be able to recover the entire secret)
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

/// Validates that the share count fits the field (2..=255)
fn validate_share_count(s: &str) -> Result<ShareCount, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid share count (2-255)"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shatter")]
#[command(about = "Split a secret into Shamir shares and combine them back")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret into hex-encoded shares, printed one per line
    Split {
        /// Number of shares to create
        #[arg(short, long, value_parser = validate_share_count)]
        parts: ShareCount,

        /// Threshold: minimum number of shares needed to reconstruct (must be >= 2)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,

        /// Read the secret from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Combine shares to reconstruct the original secret on stdout
    Combine {
        /// Hex-encoded shares, or with --file, paths to files holding one share each
        #[arg(required = true)]
        shares: Vec<String>,

        /// Read the share arguments as file paths
        #[arg(short, long)]
        file: bool,
    },
}
