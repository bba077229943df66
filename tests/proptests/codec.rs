//! Property tests for the hex share codec

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use shatter::codec::{decode_share, encode_share};
use shatter::split;

/// Wrapper for nonempty secrets of modest length
#[derive(Clone, Debug)]
struct SecretBytes(Vec<u8>);

impl Arbitrary for SecretBytes {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = (usize::arbitrary(g) % 32) + 1; // 1..=32
        let mut bytes = vec![0u8; len];
        for byte in &mut bytes {
            *byte = u8::arbitrary(g);
        }
        SecretBytes(bytes)
    }
}

/// Encoding then decoding any real share is the identity
#[quickcheck]
fn prop_codec_round_trip(secret: SecretBytes) -> bool {
    let SecretBytes(secret) = secret;
    let Ok(shares) = split(&secret, 3, 2) else {
        return false;
    };

    shares.iter().all(|share| {
        let text = encode_share(share);
        decode_share(&text).is_ok_and(|parsed| parsed == *share)
    })
}

/// Changing any single hex digit is caught by the checksum
#[quickcheck]
fn prop_single_digit_corruption_detected(secret: SecretBytes, position: usize) -> bool {
    let SecretBytes(secret) = secret;
    let Ok(shares) = split(&secret, 3, 2) else {
        return false;
    };

    let text = encode_share(&shares[0]);
    let mut bytes = text.into_bytes();
    let target = position % bytes.len();

    // Replace the digit with a different hex digit; a nibble flip is well
    // inside CRC32's guaranteed burst detection.
    bytes[target] = if bytes[target] == b'0' { b'f' } else { b'0' };
    let corrupted = String::from_utf8(bytes).unwrap();

    decode_share(&corrupted).is_err()
}
