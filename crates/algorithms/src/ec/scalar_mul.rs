//! Binary double-and-add scalar multiplication
//!
//! Not constant time: the number of additions depends on the bits of k.

use super::curve::CurveParameters;
use super::point::Point;
use crate::error::Result;
use num_bigint::BigUint;
use num_traits::Zero;

impl CurveParameters {
    /// k·P, scanning k from the most significant bit down
    ///
    /// k is used as given, with no reduction mod n, so k = n yields the
    /// identity for a point of order n.
    pub fn scalar_mul(&self, point: &Point, k: &BigUint) -> Result<Point> {
        if k.is_zero() || point.is_identity() {
            return Ok(Point::Identity);
        }

        let mut acc = Point::Identity;
        for i in (0..k.bits()).rev() {
            acc = self.double(&acc)?;
            if k.bit(i) {
                acc = self.add(&acc, point)?;
            }
        }
        Ok(acc)
    }

    /// k·G
    pub fn mul_base(&self, k: &BigUint) -> Result<Point> {
        self.scalar_mul(self.generator(), k)
    }
}
