//! JSON wire format for curve points
//!
//! An affine point travels as `{"X": "0x…", "Y": "0x…"}`. Output is always
//! `0x`-prefixed lowercase hexadecimal. Input may also carry plain decimal
//! strings or bare JSON integers, the form Go's `encoding/json` emits for
//! `*big.Int`. The identity travels as `{"infinity": true}` and never as a
//! coordinate pair, so (0, 0) keeps its meaning as an ordinary point.

use ecdhx_algorithms::ec::{CurveParameters, Point};
use ecdhx_algorithms::error::{Error, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// `serde_json/arbitrary_precision` keeps integer literals as their exact text
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WirePoint {
    #[serde(rename = "X", default, skip_serializing_if = "Option::is_none")]
    x: Option<Value>,
    #[serde(rename = "Y", default, skip_serializing_if = "Option::is_none")]
    y: Option<Value>,
    #[serde(default, skip_serializing_if = "is_false")]
    infinity: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Serialize a point to its JSON wire form
pub fn encode_point(point: &Point) -> Result<Vec<u8>> {
    let wire = match point {
        Point::Identity => WirePoint {
            x: None,
            y: None,
            infinity: true,
        },
        Point::Affine { x, y } => WirePoint {
            x: Some(Value::String(format!("0x{:x}", x))),
            y: Some(Value::String(format!("0x{:x}", y))),
            infinity: false,
        },
    };
    serde_json::to_vec(&wire).map_err(|e| Error::serialization("wire::encode_point", e.to_string()))
}

/// Parse a JSON wire point and check it against `curve`
///
/// Coordinates must be reduced mod p and satisfy the curve equation. The
/// identity is returned as-is; callers that need a public key reject it.
pub fn decode_point(curve: &CurveParameters, bytes: &[u8]) -> Result<Point> {
    const CTX: &str = "wire::decode_point";
    let wire: WirePoint =
        serde_json::from_slice(bytes).map_err(|e| Error::deserialization(CTX, e.to_string()))?;

    let point = match (wire.infinity, wire.x, wire.y) {
        (true, None, None) => return Ok(Point::Identity),
        (true, _, _) => {
            return Err(Error::deserialization(
                CTX,
                "identity must not carry coordinates",
            ))
        }
        (false, Some(x), Some(y)) => {
            Point::affine(parse_coordinate(curve, "X", &x)?, parse_coordinate(curve, "Y", &y)?)
        }
        (false, _, _) => return Err(Error::deserialization(CTX, "missing coordinate")),
    };

    curve.validate_point(&point)?;
    Ok(point)
}

/// Parse one coordinate, reduced mod p
///
/// Strings are `0x` hex or decimal digits. Numbers must be non-negative
/// integer literals; fractions and exponents are rejected.
fn parse_coordinate(curve: &CurveParameters, field: &str, value: &Value) -> Result<BigUint> {
    const CTX: &str = "wire::parse_coordinate";
    let literal;
    let (digits, radix) = match value {
        Value::String(text) => match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => (hex, 16),
            None => (text.as_str(), 10),
        },
        Value::Number(number) => {
            literal = number.to_string();
            (literal.as_str(), 10)
        }
        _ => {
            return Err(Error::deserialization(
                CTX,
                format!("{} must be a string or an integer", field),
            ))
        }
    };

    let well_formed = !digits.is_empty()
        && digits.chars().all(|c| match radix {
            16 => c.is_ascii_hexdigit(),
            _ => c.is_ascii_digit(),
        });
    if !well_formed {
        return Err(Error::deserialization(
            CTX,
            format!("{} is not a non-negative integer", field),
        ));
    }

    let value = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
        Error::deserialization(CTX, format!("{} is not a non-negative integer", field))
    })?;
    if !curve.field().contains(&value) {
        return Err(Error::deserialization(
            CTX,
            format!("{} exceeds the field modulus", field),
        ));
    }
    Ok(value)
}
