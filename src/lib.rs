//! Shamir secret sharing over GF(2^8), with a thin command-line wrapper
//!
//! The [`shamir`] module is the engine: field arithmetic, polynomial
//! construction, and Lagrange interpolation. Everything else is glue:
//! [`codec`] encodes shares as checksummed hex, [`domain`] validates
//! split parameters at the CLI boundary, [`commands`] ties the two to the
//! engine, and [`cli`] declares the command surface.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod shamir;

pub use shamir::{MAX_SHARES, ShamirError, Share, combine, split, split_with_rng};
