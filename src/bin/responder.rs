//! Listen for initiators and report each finished exchange
//!
//! Usage: `ecdhx-responder [config.json]`

use ecdhx::exchange::{ExchangeConfig, Responder, SessionOutcome};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

fn load_config() -> Result<ExchangeConfig, ecdhx::api::Error> {
    match std::env::args().nth(1) {
        Some(path) => ExchangeConfig::from_file(path),
        None => Ok(ExchangeConfig::default()),
    }
}

fn report(outcome: SessionOutcome) {
    let peer = outcome
        .peer
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    match outcome.result {
        Ok(summary) => println!(
            "session {} from {}: shared secret {}",
            outcome.id,
            peer,
            summary.shared_secret.to_hex()
        ),
        Err(e) => eprintln!("session {} from {}: {} [{}]", outcome.id, peer, e, e.category()),
    }
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let responder = match Responder::bind(config) {
        Ok(responder) => responder,
        Err(e) => {
            eprintln!("cannot start responder: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match responder.local_addr() {
        Ok(addr) => println!("listening on {} ({})", addr, responder.curve().name()),
        Err(e) => eprintln!("listening on an unknown address: {}", e),
    }

    let (tx, rx) = mpsc::channel();
    let reporter = thread::spawn(move || rx.into_iter().for_each(report));

    let served = responder.serve(tx, None);
    let _ = reporter.join();
    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("listener stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
