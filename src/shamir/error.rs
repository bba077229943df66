//! Error taxonomy for the sharing engine
//!
//! Every failure the engine can report is a distinct variant so callers can
//! match on the cause instead of parsing messages. None of them are
//! retryable: repeating the call with the same inputs reproduces the error
//! (the entropy variant carries the underlying source failure).

use thiserror::Error;

/// Failures of the split and combine operations
#[derive(Debug, Error)]
pub enum ShamirError {
    /// Split was asked for a threshold below 2. A threshold of 1 would let
    /// any single share recover the secret.
    #[error("threshold must be at least 2 (got {0})")]
    ThresholdTooSmall(usize),

    /// Split was asked for fewer shares than the threshold requires.
    #[error("share count {parts} is smaller than threshold {threshold}")]
    InsufficientParts { parts: usize, threshold: usize },

    /// Split was asked for more shares than GF(2^8) has nonzero
    /// x-coordinates.
    #[error("cannot issue more than 255 shares (got {0})")]
    TooManyParts(usize),

    /// Split was given an empty secret.
    #[error("secret must not be empty")]
    EmptySecret,

    /// The random source failed while drawing polynomial coefficients.
    /// No shares are returned when this happens.
    #[error("entropy source failed")]
    Entropy(#[source] rand::Error),

    /// Combine needs at least 2 shares to interpolate anything.
    #[error("need at least 2 shares to combine (got {0})")]
    InsufficientShares(usize),

    /// Combine was given shares whose evaluation lengths disagree, or a
    /// share with no evaluation bytes at all.
    #[error("shares are malformed or of inconsistent length")]
    MalformedShares,

    /// Combine was given two shares with the same x-coordinate. Conflicting
    /// evaluations at one point make interpolation ill-defined, so this is
    /// rejected instead of silently picking one.
    #[error("duplicate share x-coordinate {0:#04x}")]
    DuplicateShare(u8),

    /// Division by the zero field element. Unreachable through the public
    /// contracts while x-coordinates are distinct; raised from valid inputs
    /// it would indicate a defect in the engine.
    #[error("division by zero in GF(2^8)")]
    DivisionByZero,
}
