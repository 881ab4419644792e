//! Data model for the vector files
//! No dependency on the rest of the crate.

use serde::Deserialize;

/// Outcome a case is expected to have
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedResult {
    #[default]
    Valid,
    Invalid,
}

/// One ECDH component case; all integers are big-endian hex
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub tc_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    /// Peer public point
    pub qx: String,
    pub qy: String,
    /// Our private scalar
    pub d: String,
    /// Our public point, for valid cases
    #[serde(default)]
    pub q_iut_x: Option<String>,
    #[serde(default)]
    pub q_iut_y: Option<String>,
    /// Shared x-coordinate, for valid cases
    #[serde(default)]
    pub z: Option<String>,
    #[serde(default)]
    pub expected_result: ExpectedResult,
    /// Error category of an invalid case
    #[serde(default)]
    pub error_category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    pub tg_id: u64,
    /// Curve profile name
    pub curve: String,
    pub tests: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub algorithm: String,
    pub mode: String,
    pub test_groups: Vec<TestGroup>,
}
