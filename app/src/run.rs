use crate::config::AppConfig;

use benchmark::benchmark::{Benchmark, BenchmarkReport};
use chain::block::block::Block;
use chain::chain::{Chain, ChainError, ChainValidationError};
use primitives::hash_function::{HashAlgorithm, HashFunction};

use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn, Level};

/// Errors that end the application.
#[derive(Error, Debug, derive_more::From)]
pub enum AppError {
    /// A chain could not be built or extended.
    #[error(transparent)]
    ChainError(ChainError),
    /// A freshly built chain did not validate.
    #[error("{algorithm} chain is invalid: {source}")]
    #[from(ignore)]
    InvalidChain {
        /// Algorithm of the failing chain.
        algorithm: HashAlgorithm,
        /// First failing check.
        source: ChainValidationError,
    },
    /// Writing the report failed.
    #[error(transparent)]
    IOError(io::Error),
}

/// Builds a chain with `algorithm` and appends `transactions` to it.
pub fn build_chain(algorithm: HashAlgorithm, transactions: &[String]) -> Result<Chain, AppError> {
    let mut chain = Chain::new(algorithm.hasher())?;
    for transaction in transactions {
        chain.append(transaction.as_str())?;
    }
    verify_chain(algorithm, &chain)?;
    Ok(chain)
}

/// Validates `chain`, logging it as JSON when debug logging is on.
pub fn verify_chain(algorithm: HashAlgorithm, chain: &Chain) -> Result<(), AppError> {
    chain
        .validate()
        .map_err(|source| AppError::InvalidChain { algorithm, source })?;
    info!("{} chain {} is valid ({} blocks)", algorithm, chain.id(), chain.len());
    if tracing::enabled!(Level::DEBUG) {
        match serde_json::to_string(chain) {
            Ok(json) => debug!("{json}"),
            Err(e) => warn!("Chain {} could not be serialized: {}", chain.id(), e),
        }
    }
    Ok(())
}

/// Writes one block as `Index`, `Previous Hash`, `Timestamp`, `Data` and `Hash` lines
/// followed by a blank line.
pub fn write_block(out: &mut impl Write, block: &Block) -> io::Result<()> {
    writeln!(out, "Index: {}", block.index)?;
    writeln!(out, "Previous Hash: {}", block.previous_hash)?;
    match block.timestamp_utc() {
        Some(utc) => writeln!(out, "Timestamp: {} ({})", block.timestamp, utc.to_rfc3339())?,
        None => writeln!(out, "Timestamp: {}", block.timestamp)?,
    }
    writeln!(out, "Data: {}", block.data)?;
    writeln!(out, "Hash: {}\n", block.hash)
}

/// Runs the whole demo, writing the report to `out`.
pub fn run(config: &AppConfig, out: &mut impl Write) -> Result<BenchmarkReport, AppError> {
    for &algorithm in &config.algorithms {
        writeln!(out, "Testing {algorithm} blockchain:")?;
        let chain = build_chain(algorithm, &config.transactions)?;
        for block in &chain {
            write_block(out, block)?;
        }
    }

    writeln!(out, "Comparing hash performance:")?;
    let hash_functions: Vec<Arc<dyn HashFunction>> =
        config.algorithms.iter().map(|a| a.hasher()).collect();
    let report = Benchmark::new(config.benchmark_payload.as_str(), config.benchmark_iterations)
        .run(&hash_functions);
    write!(out, "{report}")?;
    out.flush()?;
    Ok(report)
}
