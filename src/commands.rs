use anyhow::{Context, Result, bail};
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::SplitConfig;
use crate::shamir;

/// Split a secret into hex-encoded Shamir shares
///
/// Returns one encoded share string per requested share.
///
/// # Errors
/// Returns an error if the secret is empty or the random source fails
pub fn split_secret(secret: &[u8], config: SplitConfig) -> Result<Vec<String>> {
    let parts = usize::from(*config.share_count());
    let threshold = usize::from(*config.threshold());

    let shares =
        shamir::split(secret, parts, threshold).context("Failed to split secret into shares")?;

    Ok(shares.iter().map(codec::encode_share).collect())
}

/// Combine hex-encoded shares to reconstruct the original secret
///
/// The reconstructed bytes come back in a `Zeroizing` buffer that wipes
/// itself on drop.
///
/// # Errors
/// Returns an error if any share fails to decode, or if the share set is
/// rejected by the engine (too few, duplicated, or inconsistent shares)
pub fn combine_shares(share_strings: &[String]) -> Result<Zeroizing<Vec<u8>>> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let mut shares = Vec::with_capacity(share_strings.len());
    for (idx, share_str) in share_strings.iter().enumerate() {
        let share = codec::decode_share(share_str)
            .with_context(|| format!("Failed to parse share #{}", idx + 1))?;
        shares.push(share);
    }

    let secret = shamir::combine(&shares).context("Failed to reconstruct secret")?;
    Ok(Zeroizing::new(secret))
}
