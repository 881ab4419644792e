//! Run one exchange against a responder and print the shared secret
//!
//! Usage: `ecdhx-initiator [config.json]`

use ecdhx::exchange::{ExchangeConfig, Initiator};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => ExchangeConfig::from_file(path),
        None => Ok(ExchangeConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match Initiator::connect(&config) {
        Ok(summary) => {
            println!("connected to {}", config.address);
            println!("shared secret {}", summary.shared_secret.to_hex());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("exchange failed: {} [{}]", e, e.category());
            ExitCode::FAILURE
        }
    }
}
