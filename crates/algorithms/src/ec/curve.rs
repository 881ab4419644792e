//! Curve domain parameters
//!
//! A [`CurveParameters`] value is built once and then only read. Sessions
//! running in parallel share one instance behind an `Arc`.

use super::field::{parse_hex, PrimeField};
use super::point::Point;
use crate::error::{validate, Error, Result};
use ecdhx_params::traditional::ecdh::{lookup_profile, CurveProfile, PRIME256V1};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Short-Weierstrass domain parameters (a, b, p, G, n)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    name: String,
    a: BigUint,
    b: BigUint,
    field: PrimeField,
    generator: Point,
    scalar_field: PrimeField,
}

impl CurveParameters {
    /// NIST P-256
    pub fn p256() -> Self {
        Self::from_definition(&PRIME256V1).expect("Standard P-256 parameters must be valid")
    }

    /// Look up a named profile
    ///
    /// Only `prime256v1` and its aliases are recognised.
    pub fn from_profile(name: &str) -> Result<Self> {
        let profile = lookup_profile(name).ok_or_else(|| Error::Configuration {
            name: name.to_string(),
        })?;
        Self::from_definition(profile)
    }

    fn from_definition(profile: &CurveProfile) -> Result<Self> {
        const CTX: &str = "CurveParameters::from_profile";
        Self::new(
            profile.name,
            parse_hex(CTX, profile.a)?,
            parse_hex(CTX, profile.b)?,
            parse_hex(CTX, profile.p)?,
            parse_hex(CTX, profile.g_x)?,
            parse_hex(CTX, profile.g_y)?,
            parse_hex(CTX, profile.n)?,
        )
    }

    /// Explicit parameter set
    ///
    /// Checks that p is odd and at least 3, that a and b are reduced, that
    /// the curve is non-singular and that G satisfies the curve equation.
    /// Primality of p and the order n of G are trusted.
    pub fn new(
        name: impl Into<String>,
        a: BigUint,
        b: BigUint,
        p: BigUint,
        g_x: BigUint,
        g_y: BigUint,
        n: BigUint,
    ) -> Result<Self> {
        const CTX: &str = "CurveParameters::new";
        validate::parameter(
            p >= BigUint::from(3u32) && p.is_odd(),
            CTX,
            "modulus must be an odd prime",
        )?;
        validate::parameter(a < p && b < p, CTX, "coefficients must be reduced mod p")?;

        let field = PrimeField::new(p)?;
        let scalar_field = PrimeField::new(n)?;

        // 4a³ + 27b² ≠ 0
        let disc = field.add(
            &field.mul(&BigUint::from(4u32), &field.mul(&a, &field.square(&a))),
            &field.mul(&BigUint::from(27u32), &field.square(&b)),
        );
        validate::parameter(!disc.is_zero(), CTX, "curve is singular")?;

        let curve = CurveParameters {
            name: name.into(),
            a,
            b,
            field,
            generator: Point::affine(g_x, g_y),
            scalar_field,
        };
        validate::parameter(
            curve.is_on_curve(&curve.generator) && !curve.generator.is_identity(),
            CTX,
            "base point is not on the curve",
        )?;
        Ok(curve)
    }

    /// Profile name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coefficient a
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Prime modulus p
    pub fn p(&self) -> &BigUint {
        self.field.modulus()
    }

    /// Order n of the base point
    pub fn n(&self) -> &BigUint {
        self.scalar_field.modulus()
    }

    /// Base point G
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Arithmetic mod p
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Arithmetic mod n
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalar_field
    }

    /// Width in bytes of one coordinate
    pub fn coordinate_len(&self) -> usize {
        self.field.byte_len()
    }

    /// Does the point belong to the curve group?
    ///
    /// The identity always does. Affine points need reduced coordinates
    /// satisfying y² ≡ x³ + a·x + b (mod p).
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                if !self.field.contains(x) || !self.field.contains(y) {
                    return false;
                }
                let f = &self.field;
                let lhs = f.square(y);
                let rhs = f.add(&f.add(&f.mul(&f.square(x), x), &f.mul(&self.a, x)), &self.b);
                lhs == rhs
            }
        }
    }

    /// [`is_on_curve`](Self::is_on_curve) as a `Result`
    pub fn validate_point(&self, point: &Point) -> Result<()> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            Err(Error::PointNotOnCurve {
                curve: self.name.clone(),
            })
        }
    }
}
