//! Shamir secret sharing over GF(2^8)
//!
//! [`split`] turns a byte secret into `n` shares of which any `t`
//! reconstruct it exactly via [`combine`], while any `t - 1` are
//! information-theoretically independent of the secret. Each secret byte
//! becomes the constant term of its own random degree-(t-1) polynomial;
//! a share is the evaluation of every byte's polynomial at one nonzero
//! x-coordinate, plus that coordinate.
//!
//! The engine is stateless: shares carry no record of which split produced
//! them or what the threshold was. Combining shares from different splits,
//! or fewer shares than the original threshold, yields a correct-length but
//! garbage result rather than an error. That is a property of the
//! mathematics, not a detectable fault; keeping shares of one split
//! together is the caller's job.

mod error;
mod gf256;
mod polynomial;

pub use error::ShamirError;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use polynomial::Polynomial;

/// Largest number of shares one split can produce: GF(2^8) has 255 nonzero
/// elements to use as x-coordinates.
pub const MAX_SHARES: usize = 255;

/// One share of a split secret.
///
/// Holds the x-coordinate and one evaluation byte per secret byte. The
/// binary layout (via the `Vec<u8>` conversions) is the evaluation bytes
/// followed by the x-coordinate, so a share is always one byte longer than
/// the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    x: u8,
    ys: Vec<u8>,
}

impl Share {
    /// The x-coordinate this share was evaluated at.
    #[must_use]
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Length of the secret this share can help reconstruct.
    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.ys.len()
    }
}

impl From<&Share> for Vec<u8> {
    fn from(share: &Share) -> Self {
        let mut bytes = Vec::with_capacity(share.ys.len() + 1);
        bytes.extend_from_slice(&share.ys);
        bytes.push(share.x);
        bytes
    }
}

impl TryFrom<&[u8]> for Share {
    type Error = ShamirError;

    /// Parses the binary layout: evaluation bytes, then the x-coordinate as
    /// the final byte.
    ///
    /// # Errors
    /// Returns [`ShamirError::MalformedShares`] for inputs shorter than two
    /// bytes (no evaluation bytes would remain after the coordinate).
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let [ys @ .., x] = bytes else {
            return Err(ShamirError::MalformedShares);
        };
        if ys.is_empty() {
            return Err(ShamirError::MalformedShares);
        }
        Ok(Self {
            x: *x,
            ys: ys.to_vec(),
        })
    }
}

/// Splits `secret` into `parts` shares, any `threshold` of which
/// reconstruct it. Draws coefficients from the operating system's entropy
/// source.
///
/// # Errors
/// - [`ShamirError::ThresholdTooSmall`] if `threshold < 2`
/// - [`ShamirError::TooManyParts`] if `parts > 255`
/// - [`ShamirError::InsufficientParts`] if `parts < threshold`
/// - [`ShamirError::EmptySecret`] if the secret has no bytes
/// - [`ShamirError::Entropy`] if the random source fails
pub fn split(secret: &[u8], parts: usize, threshold: usize) -> Result<Vec<Share>, ShamirError> {
    split_with_rng(secret, parts, threshold, &mut OsRng)
}

/// [`split`] with an injected random source, so callers and tests can
/// substitute a deterministic or failing generator.
pub fn split_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    parts: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Share>, ShamirError> {
    if threshold < 2 {
        return Err(ShamirError::ThresholdTooSmall(threshold));
    }
    if parts > MAX_SHARES {
        return Err(ShamirError::TooManyParts(parts));
    }
    if parts < threshold {
        return Err(ShamirError::InsufficientParts { parts, threshold });
    }
    if secret.is_empty() {
        return Err(ShamirError::EmptySecret);
    }

    // x = 1..=parts. Distinct and nonzero is all that matters here; the
    // coordinates carry no secret, only the polynomial coefficients do.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "parts <= MAX_SHARES == 255 checked above"
    )]
    let count = parts as u8;
    let mut shares: Vec<Share> = (1..=count)
        .map(|x| Share {
            x,
            ys: Vec::with_capacity(secret.len()),
        })
        .collect();

    for &byte in secret {
        let polynomial = Polynomial::random(byte, threshold - 1, rng)?;
        for share in &mut shares {
            share.ys.push(polynomial.evaluate(share.x));
        }
    }

    Ok(shares)
}

/// Reconstructs a secret from shares of one split call.
///
/// Uses every supplied share; given consistent shares, any superset of the
/// original threshold interpolates to the same secret, so passing more than
/// `t` shares is fine. What cannot be detected is *inconsistency*: shares
/// from different splits, or fewer than the original threshold, produce a
/// correct-length garbage value (see the module docs).
///
/// # Errors
/// - [`ShamirError::InsufficientShares`] for fewer than 2 shares
/// - [`ShamirError::MalformedShares`] if evaluation lengths disagree
/// - [`ShamirError::DuplicateShare`] if two shares have the same
///   x-coordinate
pub fn combine(shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
    if shares.len() < 2 {
        return Err(ShamirError::InsufficientShares(shares.len()));
    }

    let secret_len = shares[0].ys.len();
    if secret_len == 0 || shares.iter().any(|share| share.ys.len() != secret_len) {
        return Err(ShamirError::MalformedShares);
    }

    let mut seen = [false; 256];
    for share in shares {
        if seen[usize::from(share.x)] {
            return Err(ShamirError::DuplicateShare(share.x));
        }
        seen[usize::from(share.x)] = true;
    }

    let mut secret = Vec::with_capacity(secret_len);
    for position in 0..secret_len {
        secret.push(interpolate_at_zero(shares, position)?);
    }
    Ok(secret)
}

/// Lagrange interpolation at x = 0 for one byte position:
/// `sum_i(y_i * prod_{j != i}(x_j / (x_i + x_j)))`, noting that negation is
/// the identity in a characteristic-2 field.
///
/// Division by zero cannot occur once x-coordinates are known distinct; the
/// error is propagated anyway as an invariant check.
fn interpolate_at_zero(shares: &[Share], position: usize) -> Result<u8, ShamirError> {
    let mut acc = 0u8;
    for (i, share_i) in shares.iter().enumerate() {
        let mut basis = 1u8;
        for (j, share_j) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let denominator = gf256::add(share_i.x, share_j.x);
            basis = gf256::mul(basis, gf256::div(share_j.x, denominator)?);
        }
        acc = gf256::add(acc, gf256::mul(basis, share_i.ys[position]));
    }
    Ok(acc)
}
