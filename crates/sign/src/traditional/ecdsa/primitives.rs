//! The two ECDSA signature components

use ecdhx_algorithms::ec::{CurveParameters, PrivateKey};
use ecdhx_algorithms::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// r = (k·G).x mod n
///
/// Fails with [`Error::DegenerateR`] when r = 0, including the case
/// k ≡ 0 (mod n) where k·G is the identity. The caller must pick a new k.
pub fn compute_r(curve: &CurveParameters, k: &BigUint) -> Result<BigUint> {
    let point = curve.mul_base(k)?;
    let x = point.x().ok_or(Error::DegenerateR)?;
    let r = curve.scalar_field().reduce(x);
    if r.is_zero() {
        return Err(Error::DegenerateR);
    }
    Ok(r)
}

/// s = k⁻¹ · (msg_hash + r · d) mod n
///
/// Fails with [`Error::NoInverse`] when k ≡ 0 (mod n).
pub fn compute_s(
    curve: &CurveParameters,
    msg_hash: &BigUint,
    r: &BigUint,
    private_key: &PrivateKey,
    k: &BigUint,
) -> Result<BigUint> {
    let zn = curve.scalar_field();
    let k_inv = zn.inv(k)?;
    let rd = zn.mul(r, &private_key.scalar());
    Ok(zn.mul(&k_inv, &zn.add(msg_hash, &rd)))
}
