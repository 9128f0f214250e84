//! # Ledger
//!
//! Entry point. Initializes tracing and runs the hash-chain demo and benchmark.
//! Uses the following crates:
//! - `primitives` for hash functions and clocks
//! - `chain` for the blocks and the chain
//! - `benchmark` for the throughput comparison
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

use std::io;
use std::process::ExitCode;
use std::sync::Once;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use app::config::AppConfig;
use app::run::run;

static INIT: Once = Once::new();

/// Initializes tracing for the application.
/// Logs go to stderr so stdout only carries the report.
fn init_tracing() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let fmt_layer = fmt::layer()
            .with_writer(io::stderr)
            .compact()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(false)
            .with_target(false);

        Registry::default().with(env_filter).with(fmt_layer).init();
    });
}

fn main() -> ExitCode {
    init_tracing();

    let config = AppConfig::default();
    let stdout = io::stdout();
    match run(&config, &mut stdout.lock()) {
        Ok(report) => {
            if let Some(fastest) = report.fastest() {
                tracing::info!("Fastest: {} ({:?})", fastest.algorithm, fastest.elapsed);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
