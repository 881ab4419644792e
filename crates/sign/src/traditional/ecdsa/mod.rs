//! ECDSA over short-Weierstrass curves
//!
//! Signing and verification work on a message digest computed by the
//! caller; no hash function is bundled.
//!
//! Signing:
//! 1. z = the leftmost bitlen(n) bits of the digest
//! 2. k ← uniform in [1, n−1]
//! 3. r = (k·G).x mod n; if r = 0, go back to step 2
//! 4. s = k⁻¹(z + r·d) mod n; if s = 0, go back to step 2
//!
//! Verification:
//! 1. r, s ∈ [1, n−1]
//! 2. w = s⁻¹, u₁ = z·w, u₂ = r·w (mod n)
//! 3. X = u₁·G + u₂·Q; reject if X = O
//! 4. accept iff X.x mod n = r

mod primitives;

pub use primitives::{compute_r, compute_s};

use ecdhx_algorithms::ec::keys::MAX_SAMPLING_ATTEMPTS;
use ecdhx_algorithms::ec::{field::to_be_bytes_padded, CurveParameters, PrivateKey, PublicKey};
use ecdhx_algorithms::error::{validate, Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

/// ECDSA signature components (r, s)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// (k·G).x mod n
    pub r: BigUint,
    /// k⁻¹(z + r·d) mod n
    pub s: BigUint,
}

impl Signature {
    /// Fixed-width encoding r ∥ s, each padded to the byte length of n
    pub fn to_bytes(&self, curve: &CurveParameters) -> Vec<u8> {
        let width = curve.scalar_field().byte_len();
        let mut out = to_be_bytes_padded(&self.r, width);
        out.extend_from_slice(&to_be_bytes_padded(&self.s, width));
        out
    }

    /// Parse a fixed-width r ∥ s encoding
    pub fn from_bytes(curve: &CurveParameters, bytes: &[u8]) -> Result<Self> {
        let width = curve.scalar_field().byte_len();
        validate::length("Signature::from_bytes", bytes.len(), 2 * width)?;
        let (r, s) = bytes.split_at(width);
        Ok(Signature {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        })
    }
}

/// Leftmost bitlen(n) bits of `digest` as an integer
pub fn hash_to_scalar(curve: &CurveParameters, digest: &[u8]) -> BigUint {
    let e = BigUint::from_bytes_be(digest);
    let digest_bits = digest.len() as u64 * 8;
    let order_bits = curve.n().bits();
    if digest_bits > order_bits {
        e >> (digest_bits - order_bits)
    } else {
        e
    }
}

/// Sign a digest with a fresh random nonce per attempt
pub fn sign_prehashed<R: CryptoRng + RngCore>(
    curve: &CurveParameters,
    digest: &[u8],
    private_key: &PrivateKey,
    rng: &mut R,
) -> Result<Signature> {
    let z = hash_to_scalar(curve, digest);

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let k = PrivateKey::generate(curve, rng)?;
        let r = match compute_r(curve, &k.scalar()) {
            Ok(r) => r,
            Err(Error::DegenerateR) => continue,
            Err(e) => return Err(e),
        };
        let s = compute_s(curve, &z, &r, private_key, &k.scalar())?;
        if s.is_zero() {
            continue;
        }
        return Ok(Signature { r, s });
    }

    Err(Error::Randomness {
        context: "sign_prehashed",
        message: format!("no usable nonce after {} draws", MAX_SAMPLING_ATTEMPTS),
    })
}

/// Verify a signature over a digest
pub fn verify_prehashed(
    curve: &CurveParameters,
    digest: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
) -> Result<()> {
    const CTX: &str = "verify_prehashed";
    let n = curve.n();
    let in_range = |v: &BigUint| !v.is_zero() && v < n;
    if !in_range(&signature.r) || !in_range(&signature.s) {
        return Err(Error::signature(CTX, "component outside [1, n-1]"));
    }
    if public_key.point().is_identity() {
        return Err(Error::signature(CTX, "public key is the identity"));
    }
    curve.validate_point(public_key.point())?;

    let zn = curve.scalar_field();
    let z = hash_to_scalar(curve, digest);
    let w = zn.inv(&signature.s)?;
    let u1 = zn.mul(&z, &w);
    let u2 = zn.mul(&signature.r, &w);

    let point = curve.add(
        &curve.mul_base(&u1)?,
        &curve.scalar_mul(public_key.point(), &u2)?,
    )?;
    let x = point
        .x()
        .ok_or_else(|| Error::signature(CTX, "verification point is the identity"))?;

    let v = zn.reduce(x);
    let width = zn.byte_len();
    let matches: bool = to_be_bytes_padded(&v, width)
        .ct_eq(&to_be_bytes_padded(&signature.r, width))
        .into();
    if !matches {
        return Err(Error::signature(CTX, "signature verification failed"));
    }
    Ok(())
}
