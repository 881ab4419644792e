//! ECDH key material
//!
//! A private key is a scalar in `[1, n−1]`; the public key is that multiple
//! of the base point; the shared secret is the private scalar applied to the
//! peer's public point. Only the shared point's x-coordinate is meant to be
//! used as secret material.

use super::curve::CurveParameters;
use super::field::to_be_bytes_padded;
use super::point::Point;
use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Draws allowed before sampling gives up
///
/// For P-256 a single draw is rejected with probability about 2⁻³².
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// Secret scalar in `[1, n−1]`, stored big-endian and wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: Vec<u8>,
}

impl PrivateKey {
    /// Sample a uniform scalar in `[1, n−1]` by rejection sampling
    pub fn generate<R: CryptoRng + RngCore>(
        curve: &CurveParameters,
        rng: &mut R,
    ) -> Result<Self> {
        const CTX: &str = "PrivateKey::generate";
        let n = curve.n();
        let bits = n.bits();
        let len = curve.scalar_field().byte_len();
        let mask = 0xFFu8 >> ((len as u64 * 8 - bits) as u32);

        let mut buf = Zeroizing::new(vec![0u8; len]);
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            rng.try_fill_bytes(buf.as_mut_slice()).map_err(|e| Error::Randomness {
                context: CTX,
                message: e.to_string(),
            })?;
            buf[0] &= mask;

            let candidate = BigUint::from_bytes_be(&buf);
            if !candidate.is_zero() && &candidate < n {
                return Ok(PrivateKey {
                    bytes: buf.to_vec(),
                });
            }
        }

        Err(Error::Randomness {
            context: CTX,
            message: format!(
                "no scalar in [1, n-1] after {} draws",
                MAX_SAMPLING_ATTEMPTS
            ),
        })
    }

    /// Wrap a known scalar, which must lie in `[1, n−1]`
    pub fn from_scalar(curve: &CurveParameters, k: &BigUint) -> Result<Self> {
        if k.is_zero() || k >= curve.n() {
            return Err(Error::param(
                "PrivateKey::from_scalar",
                "scalar must be in [1, n-1]",
            ));
        }
        Ok(PrivateKey {
            bytes: curve.scalar_field().to_bytes(k),
        })
    }

    /// Big-endian scalar bytes, padded to the width of n
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The scalar as an integer
    pub fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Public point k·G
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Compute the public key of `private`
    pub fn derive(curve: &CurveParameters, private: &PrivateKey) -> Result<Self> {
        Ok(PublicKey(curve.mul_base(&private.scalar())?))
    }

    /// Accept a point received from a peer
    ///
    /// Rejects the identity and anything failing the curve equation.
    pub fn from_point(curve: &CurveParameters, point: Point) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::param(
                "PublicKey::from_point",
                "public key cannot be the identity",
            ));
        }
        curve.validate_point(&point)?;
        Ok(PublicKey(point))
    }

    /// The underlying point
    pub fn point(&self) -> &Point {
        &self.0
    }

    /// Consume the key and return its point
    pub fn into_point(self) -> Point {
        self.0
    }
}

/// Private scalar together with its public point
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Secret scalar
    pub private: PrivateKey,
    /// private·G
    pub public: PublicKey,
}

impl KeyPair {
    /// Sample a fresh key pair
    pub fn generate<R: CryptoRng + RngCore>(
        curve: &CurveParameters,
        rng: &mut R,
    ) -> Result<Self> {
        let private = PrivateKey::generate(curve, rng)?;
        Self::from_private(curve, private)
    }

    /// Complete a key pair from a known private key
    pub fn from_private(curve: &CurveParameters, private: PrivateKey) -> Result<Self> {
        let public = PublicKey::derive(curve, &private)?;
        Ok(KeyPair { private, public })
    }
}

/// Shared point private·PeerPublic
#[derive(Clone)]
pub struct SharedSecret {
    point: Point,
    width: usize,
}

impl SharedSecret {
    /// Apply `private` to the peer's public point
    ///
    /// The peer key is re-validated here; an off-curve or identity peer
    /// point never reaches scalar multiplication.
    pub fn derive(
        curve: &CurveParameters,
        private: &PrivateKey,
        peer: &PublicKey,
    ) -> Result<Self> {
        if peer.point().is_identity() {
            return Err(Error::param(
                "SharedSecret::derive",
                "peer public key is the identity",
            ));
        }
        curve.validate_point(peer.point())?;

        let point = curve.scalar_mul(peer.point(), &private.scalar())?;
        if point.is_identity() {
            return Err(Error::param(
                "SharedSecret::derive",
                "shared point is the identity",
            ));
        }
        Ok(SharedSecret {
            point,
            width: curve.coordinate_len(),
        })
    }

    /// The shared point
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Big-endian x-coordinate, padded to the field width
    pub fn x_coordinate_bytes(&self) -> Vec<u8> {
        match self.point.x() {
            Some(x) => to_be_bytes_padded(x, self.width),
            None => vec![0u8; self.width],
        }
    }

    /// Lowercase hex of the x-coordinate
    pub fn to_hex(&self) -> String {
        hex::encode(self.x_coordinate_bytes())
    }

    /// Constant-time comparison of the x-coordinates
    pub fn ct_eq(&self, other: &Self) -> bool {
        let a = Zeroizing::new(self.x_coordinate_bytes());
        let b = Zeroizing::new(other.x_coordinate_bytes());
        a.as_slice().ct_eq(b.as_slice()).into()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl Eq for SharedSecret {}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}
