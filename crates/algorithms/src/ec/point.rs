//! Affine curve points with an explicit identity

use num_bigint::BigUint;

/// A point on a short-Weierstrass curve
///
/// The point at infinity is its own variant. Coordinates (0, 0) are an
/// ordinary affine point and may lie on the curve for some parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// Neutral element of the group
    Identity,
    /// Affine coordinates in `[0, p−1]`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Build an affine point without checking it against any curve
    ///
    /// Use [`CurveParameters::validate_point`](super::CurveParameters::validate_point)
    /// before trusting coordinates that came from outside.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate, `None` for the identity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the identity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::Identity
    }
}
