//! Random polynomials over GF(2^8)

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{ShamirError, gf256};

/// A degree-(t-1) polynomial whose constant term is one secret byte.
///
/// The coefficient buffer is the only place a secret byte and its masking
/// coefficients live together, so it zeroizes on drop and never leaves this
/// module; callers only see evaluations.
pub(super) struct Polynomial {
    coefficients: Zeroizing<Vec<u8>>,
}

impl Polynomial {
    /// Builds a polynomial with `intercept` as constant term and `degree`
    /// coefficients drawn from `rng`.
    ///
    /// # Errors
    /// Returns [`ShamirError::Entropy`] if the random source fails; no
    /// partially-random polynomial is ever produced.
    pub(super) fn random<R: RngCore + CryptoRng>(
        intercept: u8,
        degree: usize,
        rng: &mut R,
    ) -> Result<Self, ShamirError> {
        let mut coefficients = Zeroizing::new(vec![0u8; degree + 1]);
        coefficients[0] = intercept;
        rng.try_fill_bytes(&mut coefficients[1..])
            .map_err(ShamirError::Entropy)?;
        Ok(Self { coefficients })
    }

    /// Evaluates the polynomial at `x` by Horner's rule.
    pub(super) fn evaluate(&self, x: u8) -> u8 {
        // x = 0 is the constant term directly.
        if x == 0 {
            return self.coefficients[0];
        }
        let mut acc = 0u8;
        for &coefficient in self.coefficients.iter().rev() {
            acc = gf256::add(gf256::mul(acc, x), coefficient);
        }
        acc
    }
}
