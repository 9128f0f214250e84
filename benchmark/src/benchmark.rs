use primitives::clock::{Clock, SystemClock};
use primitives::hash_function::HashFunction;

use serde::Serialize;
use std::fmt;
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Payload hashed on every iteration by default.
pub const DEFAULT_PAYLOAD: &str = "Performance testing for hashing algorithms in blockchain.";

/// Default number of `digest` calls per algorithm.
pub const DEFAULT_ITERATIONS: u64 = 10_000;

/// Time taken by one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timing {
    /// Name of the hash function.
    pub algorithm: String,
    /// Wall-clock time for all iterations.
    pub elapsed: Duration,
}

/// Result of a `[Benchmark::run]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkReport {
    /// `digest` calls per algorithm.
    pub iterations: u64,
    /// Length of the hashed payload in bytes.
    pub payload_len: usize,
    /// One entry per algorithm, in the order they were given.
    pub timings: Vec<Timing>,
}

impl BenchmarkReport {
    /// The quickest algorithm, `None` for an empty run.
    #[must_use]
    pub fn fastest(&self) -> Option<&Timing> {
        self.timings.iter().min_by_key(|t| t.elapsed)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for timing in &self.timings {
            writeln!(
                f,
                "{} time for {} iterations: {:.6} seconds",
                timing.algorithm,
                self.iterations,
                timing.elapsed.as_secs_f64()
            )?;
        }
        Ok(())
    }
}

/// Hashes one payload a fixed number of times with each hash function it is given.
#[derive(Debug, Clone)]
pub struct Benchmark {
    payload: String,
    iterations: u64,
    clock: Arc<dyn Clock>,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new(DEFAULT_PAYLOAD, DEFAULT_ITERATIONS)
    }
}

impl Benchmark {
    /// Creates a benchmark timed by the system clock.
    #[must_use]
    pub fn new(payload: impl Into<String>, iterations: u64) -> Self {
        Self::with_clock(payload, iterations, Arc::new(SystemClock::new()))
    }

    /// Creates a benchmark timed by `clock`.
    #[must_use]
    pub fn with_clock(payload: impl Into<String>, iterations: u64, clock: Arc<dyn Clock>) -> Self {
        Benchmark {
            payload: payload.into(),
            iterations,
            clock,
        }
    }

    /// The hashed payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// `digest` calls per algorithm.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Times `iterations` hex digests of the payload with one hash function. The hex
    /// encoding is part of the measured work, as it is for block hashes.
    #[must_use]
    pub fn time(&self, hash_function: &dyn HashFunction) -> Timing {
        let message = self.payload.as_bytes();
        let start = self.clock.monotonic();
        for _ in 0..self.iterations {
            black_box(hash_function.hexdigest(black_box(message)));
        }
        let elapsed = self.clock.monotonic().saturating_sub(start);
        info!(
            "{} time for {} iterations: {:?}",
            hash_function.name(),
            self.iterations,
            elapsed
        );
        Timing {
            algorithm: hash_function.name().to_owned(),
            elapsed,
        }
    }

    /// Times every hash function in `hash_functions`, in order.
    #[must_use]
    pub fn run(&self, hash_functions: &[Arc<dyn HashFunction>]) -> BenchmarkReport {
        debug!(
            "Benchmarking {} hash functions over {} bytes",
            hash_functions.len(),
            self.payload.len()
        );
        BenchmarkReport {
            iterations: self.iterations,
            payload_len: self.payload.len(),
            timings: hash_functions
                .iter()
                .map(|hash_function| self.time(hash_function.as_ref()))
                .collect(),
        }
    }
}
