//! Modular arithmetic over a fixed modulus
//!
//! [`PrimeField`] serves both the coordinate field 𝔽ₚ and the scalar ring
//! ℤₙ. Inputs may be any non-negative integer; every result is normalised
//! into `[0, m−1]`.

use crate::error::{validate, Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Arithmetic modulo a fixed integer m ≥ 2.
///
/// Primality of the modulus is trusted, not checked. With a composite
/// modulus `inv` still works for units and fails for everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    bits: u64,
    byte_len: usize,
}

impl PrimeField {
    /// Create the ring of integers modulo `modulus`
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(
            modulus >= BigUint::from(2u32),
            "PrimeField::new",
            "modulus must be at least 2",
        )?;
        let bits = modulus.bits();
        let byte_len = ((bits + 7) / 8) as usize;
        Ok(PrimeField {
            modulus,
            bits,
            byte_len,
        })
    }

    /// The modulus m
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Number of bytes needed to hold any reduced element
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Is `value` already a canonical representative (`value < m`)?
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// value mod m
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// (a + b) mod m
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// (a − b) mod m
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.modulus - (b - a)
        }
    }

    /// (a · b) mod m
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// a² mod m
    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// (−a) mod m
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    /// Multiplicative inverse a⁻¹ mod m via the extended Euclidean algorithm
    ///
    /// Fails with [`Error::NoInverse`] when gcd(a, m) ≠ 1, which for a prime
    /// modulus means a ≡ 0.
    pub fn inv(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::NoInverse {
                context: "PrimeField::inv",
            });
        }

        let m = BigInt::from(self.modulus.clone());
        let (mut old_r, mut r) = (BigInt::from(a), m.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

        while !r.is_zero() {
            let q = &old_r / &r;
            let next_r = &old_r - &q * &r;
            old_r = std::mem::replace(&mut r, next_r);
            let next_s = &old_s - &q * &s;
            old_s = std::mem::replace(&mut s, next_s);
        }

        // old_r = gcd(a, m)
        if !old_r.is_one() {
            return Err(Error::NoInverse {
                context: "PrimeField::inv",
            });
        }

        old_s.mod_floor(&m).to_biguint().ok_or(Error::NoInverse {
            context: "PrimeField::inv",
        })
    }

    /// Big-endian encoding left-padded to [`byte_len`](Self::byte_len)
    pub fn to_bytes(&self, value: &BigUint) -> Vec<u8> {
        to_be_bytes_padded(value, self.byte_len)
    }
}

/// Parse big-endian hexadecimal text (no prefix) into an integer
pub fn parse_hex(context: &'static str, hex_str: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex_str.as_bytes(), 16)
        .ok_or_else(|| Error::param(context, format!("invalid hexadecimal '{}'", hex_str)))
}

/// Big-endian bytes of `value`, left-padded with zeros to `len`
///
/// Values wider than `len` are returned unpadded.
pub fn to_be_bytes_padded(value: &BigUint, len: usize) -> Vec<u8> {
    let raw = if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    };
    if raw.len() >= len {
        return raw;
    }
    let mut out = vec![0u8; len - raw.len()];
    out.extend_from_slice(&raw);
    out
}
