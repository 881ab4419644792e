//! Exchange configuration
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration.

use crate::transport::DEFAULT_MAX_FRAME_LEN;
use ecdhx_algorithms::ec::CurveParameters;
use ecdhx_algorithms::error::{validate, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Which key pair the responder uses for each session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// A fresh key pair inside every session
    #[default]
    Ephemeral,
    /// One key pair generated at startup and reused by every session
    Static,
}

/// Settings shared by the initiator and the responder
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExchangeConfig {
    /// Curve profile name
    pub curve: String,
    /// Address the responder listens on and the initiator dials
    pub address: String,
    /// Deadline for each read and write in milliseconds, 0 for none
    pub io_timeout_ms: u64,
    /// Largest accepted message in bytes
    pub max_frame_len: usize,
    /// Responder key policy
    pub key_policy: KeyPolicy,
    /// Stack size of each responder session thread, platform default if unset
    pub worker_stack_size: Option<usize>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        ExchangeConfig {
            curve: "prime256v1".to_string(),
            address: "127.0.0.1:8080".to_string(),
            io_timeout_ms: 30_000,
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
            key_policy: KeyPolicy::Ephemeral,
            worker_stack_size: None,
        }
    }
}

impl ExchangeConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ExchangeConfig = serde_json::from_str(json)
            .map_err(|e| Error::param("ExchangeConfig::from_json", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::param(
                "ExchangeConfig::from_file",
                format!("cannot read {}: {}", path.display(), e),
            )
        })?;
        Self::from_json(&json)
    }

    /// Check value ranges and that the curve profile exists
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            self.max_frame_len >= 64,
            "ExchangeConfig",
            "max_frame_len must be at least 64 bytes",
        )?;
        validate::parameter(
            !self.address.is_empty(),
            "ExchangeConfig",
            "address must not be empty",
        )?;
        self.curve_parameters().map(|_| ())
    }

    /// Build the configured curve
    pub fn curve_parameters(&self) -> Result<CurveParameters> {
        CurveParameters::from_profile(&self.curve)
    }

    /// Per-operation I/O deadline
    pub fn io_timeout(&self) -> Option<Duration> {
        match self.io_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
