//! Executes ECDH component cases against the curve engine

use super::error::{Result, VectorError};
use super::model::{ExpectedResult, TestCase, TestGroup, TestSuite};
use ecdhx_algorithms::ec::field::to_be_bytes_padded;
use ecdhx_algorithms::ec::{CurveParameters, Point, PrivateKey, PublicKey, SharedSecret};
use num_bigint::BigUint;

/// Result of one case
#[derive(Debug)]
pub struct CaseReport {
    pub tg_id: u64,
    pub tc_id: u64,
    pub outcome: Result<()>,
}

fn parse_int(hex_str: &str) -> Result<BigUint> {
    // odd-length strings get a leading zero nibble
    let padded = if hex_str.len() % 2 == 1 {
        format!("0{}", hex_str)
    } else {
        hex_str.to_string()
    };
    Ok(BigUint::from_bytes_be(&hex::decode(padded)?))
}

fn expect_hex(field: &'static str, expected: &str, actual: &[u8]) -> Result<()> {
    let actual = hex::encode(actual);
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(VectorError::Mismatch {
            field,
            expected: expected.to_string(),
            actual,
        })
    }
}

fn derive(
    curve: &CurveParameters,
    case: &TestCase,
) -> ecdhx_api::Result<(PublicKey, SharedSecret)> {
    let scalar =
        |s: &str| parse_int(s).map_err(|e| ecdhx_api::Error::param("vector", e.to_string()));
    let private = PrivateKey::from_scalar(curve, &scalar(&case.d)?)?;
    let public = PublicKey::derive(curve, &private)?;

    let peer_point = Point::affine(scalar(&case.qx)?, scalar(&case.qy)?);
    let peer = PublicKey::from_point(curve, peer_point)?;
    let secret = SharedSecret::derive(curve, &private, &peer)?;
    Ok((public, secret))
}

/// Run one case
pub fn run_case(curve: &CurveParameters, case: &TestCase) -> Result<()> {
    let derived = derive(curve, case);

    match case.expected_result {
        ExpectedResult::Valid => {
            let (public, secret) = derived?;
            let width = curve.coordinate_len();
            let coordinate = |v: Option<&BigUint>| {
                v.map(|v| to_be_bytes_padded(v, width)).unwrap_or_default()
            };
            if let Some(x) = &case.q_iut_x {
                expect_hex("qIutX", x, &coordinate(public.point().x()))?;
            }
            if let Some(y) = &case.q_iut_y {
                expect_hex("qIutY", y, &coordinate(public.point().y()))?;
            }
            let z = case.z.as_deref().ok_or(VectorError::MissingField("z"))?;
            expect_hex("z", z, &secret.x_coordinate_bytes())
        }
        ExpectedResult::Invalid => {
            let expected = case
                .error_category
                .clone()
                .ok_or(VectorError::MissingField("errorCategory"))?;
            match derived {
                Ok(_) => Err(VectorError::UnexpectedSuccess { expected }),
                Err(e) if e.category() == expected => Ok(()),
                Err(e) => Err(VectorError::Mismatch {
                    field: "errorCategory",
                    expected,
                    actual: e.category().to_string(),
                }),
            }
        }
    }
}

fn run_group(group: &TestGroup) -> Vec<CaseReport> {
    let curve = match CurveParameters::from_profile(&group.curve) {
        Ok(curve) => curve,
        Err(e) => {
            let message = e.to_string();
            return group
                .tests
                .iter()
                .map(|case| CaseReport {
                    tg_id: group.tg_id,
                    tc_id: case.tc_id,
                    outcome: Err(VectorError::Crypto(ecdhx_api::Error::param(
                        "vector group",
                        message.clone(),
                    ))),
                })
                .collect();
        }
    };

    group
        .tests
        .iter()
        .map(|case| CaseReport {
            tg_id: group.tg_id,
            tc_id: case.tc_id,
            outcome: run_case(&curve, case),
        })
        .collect()
}

/// Run every case of every group
pub fn run_suite(suite: &TestSuite) -> Vec<CaseReport> {
    suite.test_groups.iter().flat_map(run_group).collect()
}
