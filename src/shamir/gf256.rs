//! Arithmetic over GF(2^8)
//!
//! Elements are bytes in polynomial representation, reduced by the AES
//! irreducible polynomial x^8 + x^4 + x^3 + x + 1 (0x11B). Multiplication
//! and division are O(1) lookups in log/exp tables indexed by the generator
//! 0x03; the tables are built once on first use and read-only afterwards,
//! so concurrent callers need no synchronization.

use std::sync::LazyLock;

use super::ShamirError;

/// AES irreducible polynomial, used to reduce during table construction.
const POLYNOMIAL: u16 = 0x11B;

/// Discrete log and exponential tables for the generator 0x03.
struct Tables {
    log: [u8; 256],
    exp: [u8; 256],
}

static TABLES: LazyLock<Tables> = LazyLock::new(|| {
    let mut log = [0u8; 256];
    let mut exp = [0u8; 256];

    // Walk the powers of the generator: 3x = 2x + x in GF(2^8).
    let mut val: u16 = 1;
    for i in 0..255u16 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "val is reduced below 256 on every iteration"
        )]
        let byte = val as u8;
        exp[i as usize] = byte;
        log[byte as usize] = i as u8;

        let doubled = if val & 0x80 == 0 {
            val << 1
        } else {
            (val << 1) ^ POLYNOMIAL
        };
        val ^= doubled;
    }
    // The generator has order 255, so exp wraps; filling the last slot keeps
    // every lookup in-table.
    exp[255] = exp[0];

    Tables { log, exp }
});

/// Addition: XOR. Commutative and its own inverse (`add(a, a) == 0`).
/// Subtraction is the same operation in a characteristic-2 field.
#[inline]
pub(crate) fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplication via log/exp lookup. `mul(a, 0) == 0` for all a.
#[inline]
pub(crate) fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let tables = &*TABLES;
    let sum = u16::from(tables.log[a as usize]) + u16::from(tables.log[b as usize]);
    tables.exp[(sum % 255) as usize]
}

/// Division: `a * b^-1`. The zero element has no inverse.
///
/// # Errors
/// Returns [`ShamirError::DivisionByZero`] when `b == 0`.
#[inline]
pub(crate) fn div(a: u8, b: u8) -> Result<u8, ShamirError> {
    if b == 0 {
        return Err(ShamirError::DivisionByZero);
    }
    if a == 0 {
        return Ok(0);
    }
    let tables = &*TABLES;
    let diff = 255 + u16::from(tables.log[a as usize]) - u16::from(tables.log[b as usize]);
    Ok(tables.exp[(diff % 255) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn add_is_xor_and_self_inverse() {
        assert_eq!(add(0x53, 0xCA), 0x53 ^ 0xCA);
        for a in 0..=255u8 {
            assert_eq!(add(a, a), 0);
            assert_eq!(add(a, 0), a);
        }
    }

    #[test]
    fn mul_identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(mul(a, 1), a);
            assert_eq!(mul(1, a), a);
            assert_eq!(mul(a, 0), 0);
            assert_eq!(mul(0, a), 0);
        }
    }

    #[test]
    fn mul_known_vectors() {
        // FIPS-197 worked examples for the AES field.
        assert_eq!(mul(0x57, 0x83), 0xC1);
        assert_eq!(mul(0x53, 0xCA), 0x01);
        assert_eq!(mul(0x02, 0x87), 0x15);
    }

    #[test]
    fn mul_commutative() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn mul_distributes_over_add() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let (a, b, c): (u8, u8, u8) = rng.r#gen();
            assert_eq!(mul(a, add(b, c)), add(mul(a, b), mul(a, c)));
        }
    }

    #[test]
    fn mul_and_div_are_mutual_inverses() {
        for a in 1..=255u8 {
            for b in 1..=255u8 {
                let product = mul(a, b);
                assert_eq!(div(product, b).unwrap(), a, "({a} * {b}) / {b}");
            }
        }
    }

    #[test]
    fn div_by_zero_is_an_error() {
        for a in 0..=255u8 {
            assert!(matches!(div(a, 0), Err(ShamirError::DivisionByZero)));
        }
    }

    #[test]
    fn div_of_zero_is_zero() {
        for b in 1..=255u8 {
            assert_eq!(div(0, b).unwrap(), 0);
        }
    }
}
