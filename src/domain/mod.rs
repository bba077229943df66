//! Domain types for the command-line boundary
//!
//! This module contains validated newtypes and configuration for split
//! parameters, so bad input fails before any secret material is read:
//! - [`Threshold`] - Minimum shares required for reconstruction (2..=255)
//! - [`ShareCount`] - Total number of shares to create (2..=255)
//! - [`SplitConfig`] - Validated threshold and share count pair

mod config;
mod share_count;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use threshold::Threshold;
