//! Loads vector files from disk

use super::error::Result;
use super::model::TestSuite;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the JSON vector files
pub fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("json")
}

/// Parse `name` from [`vector_dir`]
pub fn load_suite(name: &str) -> Result<TestSuite> {
    let text = fs::read_to_string(vector_dir().join(name))?;
    Ok(serde_json::from_str(&text)?)
}
