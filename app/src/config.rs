use benchmark::benchmark::{DEFAULT_ITERATIONS, DEFAULT_PAYLOAD};
use primitives::hash_function::HashAlgorithm;

/// Transactions appended to every demo chain.
pub const EXAMPLE_TRANSACTIONS: [&str; 2] = [
    "Transaction 1: Alice pays Bob 10 BTC",
    "Transaction 2: Bob pays Charlie 5 BTC",
];

/// What the application runs. There are no flags or config files; `Default` is the
/// only source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// One demo chain is built per algorithm, and each is benchmarked.
    pub algorithms: Vec<HashAlgorithm>,
    /// Data appended to each chain, in order.
    pub transactions: Vec<String>,
    /// Payload hashed by the benchmark.
    pub benchmark_payload: String,
    /// `digest` calls per algorithm in the benchmark.
    pub benchmark_iterations: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            algorithms: vec![HashAlgorithm::Sha256, HashAlgorithm::Blake2b],
            transactions: EXAMPLE_TRANSACTIONS.iter().map(|&t| t.to_owned()).collect(),
            benchmark_payload: DEFAULT_PAYLOAD.to_owned(),
            benchmark_iterations: DEFAULT_ITERATIONS,
        }
    }
}
