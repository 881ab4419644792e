//! Affine group law
//!
//! Textbook chord-and-tangent formulas over 𝔽ₚ. The identity is handled
//! before any division so the slope denominators are non-zero for valid
//! inputs; an unexpected zero denominator surfaces as `NoInverse`.

use super::curve::CurveParameters;
use super::point::Point;
use crate::error::Result;
use num_bigint::BigUint;
use num_traits::Zero;

impl CurveParameters {
    /// P₁ + P₂
    pub fn add(&self, p1: &Point, p2: &Point) -> Result<Point> {
        let (x1, y1, x2, y2) = match (p1, p2) {
            (Point::Identity, _) => return Ok(p2.clone()),
            (_, Point::Identity) => return Ok(p1.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };
        let f = self.field();

        // P + (−P) = O
        if x1 == x2 && *y1 == f.neg(y2) {
            return Ok(Point::Identity);
        }
        if x1 == x2 && y1 == y2 {
            return self.double(p1);
        }

        let slope = f.mul(&f.sub(y2, y1), &f.inv(&f.sub(x2, x1))?);
        let rx = f.sub(&f.sub(&f.square(&slope), x1), x2);
        let ry = f.sub(&f.mul(&slope, &f.sub(x1, &rx)), y1);
        Ok(Point::affine(rx, ry))
    }

    /// 2P
    pub fn double(&self, p: &Point) -> Result<Point> {
        let (x, y) = match p {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (x, y),
        };
        // vertical tangent
        if y.is_zero() {
            return Ok(Point::Identity);
        }
        let f = self.field();

        let three = BigUint::from(3u32);
        let numerator = f.add(&f.mul(&three, &f.square(x)), self.a());
        let denominator = f.add(y, y);
        let slope = f.mul(&numerator, &f.inv(&denominator)?);
        let rx = f.sub(&f.square(&slope), &f.add(x, x));
        let ry = f.sub(&f.mul(&slope, &f.sub(x, &rx)), y);
        Ok(Point::affine(rx, ry))
    }

    /// −P
    pub fn negate(&self, p: &Point) -> Point {
        match p {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::affine(x.clone(), self.field().neg(y)),
        }
    }
}
