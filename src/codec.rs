//! Textual share encoding
//!
//! Shares travel as lowercase hex with an appended CRC32, so a share that
//! was mistyped, truncated, or corrupted in transit is rejected at parse
//! time instead of interpolating to garbage. The encoded layout is:
//!
//! ```text
//! hex( evaluation bytes || x-coordinate || crc32_be )
//! ```
//!
//! The checksum covers only transcription mistakes. It does not
//! authenticate a share, and it cannot tell shares of two different split
//! calls apart; that remains undetectable by the scheme itself.
//!
//! # Examples
//!
//! ```rust
//! use shatter::codec::{decode_share, encode_share};
//! use shatter::shamir::split;
//!
//! # fn main() -> anyhow::Result<()> {
//! let shares = split(b"hello", 3, 2)?;
//!
//! let text = encode_share(&shares[0]);
//! let parsed = decode_share(&text)?;
//!
//! assert_eq!(parsed, shares[0]);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, bail};
use crc::{CRC_32_ISO_HDLC, Crc};
use zeroize::Zeroizing;

use crate::shamir::Share;

/// CRC32 algorithm for share integrity checking
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Smallest decodable payload: one evaluation byte, the x-coordinate, and
/// the four checksum bytes.
const MIN_ENCODED_LEN: usize = 2 + 4;

/// Encodes a share as hex with a trailing CRC32.
#[must_use]
pub fn encode_share(share: &Share) -> String {
    let bytes = Zeroizing::new(Vec::from(share));
    let checksum = CRC32.checksum(&bytes);

    let mut payload = Zeroizing::new(Vec::with_capacity(bytes.len() + 4));
    payload.extend_from_slice(&bytes);
    payload.extend_from_slice(&checksum.to_be_bytes());

    hex::encode(&*payload)
}

/// Decodes a hex share, verifying its checksum.
///
/// Accepts upper- or lowercase hex and surrounding whitespace.
///
/// # Errors
/// Returns an error if the input is not valid hex, is too short to hold a
/// share and checksum, or fails checksum verification.
pub fn decode_share(text: &str) -> Result<Share> {
    let payload = Zeroizing::new(
        hex::decode(text.trim()).context("Share is not valid hex")?,
    );

    if payload.len() < MIN_ENCODED_LEN {
        bail!(
            "Share too short: {} bytes, need at least {MIN_ENCODED_LEN}",
            payload.len()
        );
    }

    let (bytes, checksum_bytes) = payload.split_at(payload.len() - 4);

    let expected = CRC32.checksum(bytes);
    let actual = u32::from_be_bytes([
        checksum_bytes[0],
        checksum_bytes[1],
        checksum_bytes[2],
        checksum_bytes[3],
    ]);
    if expected != actual {
        bail!("Checksum verification failed: expected {expected:#010x}, got {actual:#010x}");
    }

    Share::try_from(bytes).context("Share payload is malformed")
}
