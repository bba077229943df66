//! Property tests for split/combine workflows

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use shatter::{ShamirError, combine, split};

/// Wrapper for nonempty secrets of modest length
#[derive(Clone, Debug)]
struct SecretBytes(Vec<u8>);

impl Arbitrary for SecretBytes {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = (usize::arbitrary(g) % 48) + 1; // 1..=48
        let mut bytes = vec![0u8; len];
        for byte in &mut bytes {
            *byte = u8::arbitrary(g);
        }
        SecretBytes(bytes)
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidShamirParams {
    threshold: usize,
    num_shares: usize,
}

impl Arbitrary for ValidShamirParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Share count between 2 and 12 (keep split cost reasonable)
        let num_shares = (usize::arbitrary(g) % 11) + 2; // 2..=12

        // Threshold between 2 and num_shares (never 1)
        let threshold = (usize::arbitrary(g) % (num_shares - 1)) + 2; // 2..=num_shares

        ValidShamirParams {
            threshold,
            num_shares,
        }
    }
}

/// Any threshold-sized subset of shares recovers the original secret
#[quickcheck]
fn prop_split_combine_round_trip(secret: SecretBytes, params: ValidShamirParams) -> bool {
    let SecretBytes(secret) = secret;
    let shares = match split(&secret, params.num_shares, params.threshold) {
        Ok(shares) => shares,
        Err(_) => return false,
    };

    if shares.len() != params.num_shares {
        return false;
    }

    // First t shares, and last t shares, both reconstruct.
    let head = &shares[..params.threshold];
    let tail = &shares[shares.len() - params.threshold..];

    combine(head).is_ok_and(|s| s == secret) && combine(tail).is_ok_and(|s| s == secret)
}

/// Supplying more shares than the threshold changes nothing
#[quickcheck]
fn prop_extra_shares_are_harmless(secret: SecretBytes, params: ValidShamirParams) -> bool {
    let SecretBytes(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    combine(&shares).is_ok_and(|s| s == secret)
}

/// All x-coordinates of one split are distinct and nonzero
#[quickcheck]
fn prop_x_coordinates_distinct_and_nonzero(secret: SecretBytes, params: ValidShamirParams) -> bool {
    let SecretBytes(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    let mut seen = [false; 256];
    for share in &shares {
        if share.x() == 0 || seen[usize::from(share.x())] {
            return false;
        }
        seen[usize::from(share.x())] = true;
    }
    true
}

/// Every share carries exactly one evaluation byte per secret byte
#[quickcheck]
fn prop_share_lengths_track_secret(secret: SecretBytes, params: ValidShamirParams) -> bool {
    let SecretBytes(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    shares.iter().all(|share| {
        share.secret_len() == secret.len() && Vec::from(share).len() == secret.len() + 1
    })
}

/// A repeated share is rejected instead of skewing interpolation
#[quickcheck]
fn prop_duplicate_share_rejected(secret: SecretBytes, params: ValidShamirParams) -> bool {
    let SecretBytes(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    let mut duplicated = shares.clone();
    duplicated[0] = duplicated[1].clone();

    matches!(combine(&duplicated), Err(ShamirError::DuplicateShare(_)))
}
