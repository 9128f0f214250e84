use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use blake2::Blake2b512;
use sha2::{Digest, Sha256};
use static_assertions::assert_obj_safe;
use thiserror::Error;
use xxhash_rust::xxh3::xxh3_128;

/// A digest capability: turns an arbitrary message into an algorithm-specific,
/// fixed-length byte string.
///
/// Implementors must be deterministic. Callers treat the output length as opaque.
pub trait HashFunction: Send + Sync + fmt::Debug {
    /// Human readable name of the algorithm, e.g. `SHA256`.
    fn name(&self) -> &'static str;

    /// Hashes `message`.
    fn digest(&self, message: &[u8]) -> Vec<u8>;

    /// Hashes `message` and returns the digest as lowercase hex.
    fn hexdigest(&self, message: &[u8]) -> String {
        hex::encode(self.digest(message))
    }
}

assert_obj_safe!(HashFunction);

/// SHA-256 adapter. Produces 32 bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl HashFunction for Sha256Hasher {
    fn name(&self) -> &'static str {
        "SHA256"
    }

    fn digest(&self, message: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(message);
        hasher.finalize().to_vec()
    }
}

/// BLAKE2b adapter with the full 512-bit output. Produces 64 bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blake2bHasher;

impl HashFunction for Blake2bHasher {
    fn name(&self) -> &'static str {
        "BLAKE2"
    }

    fn digest(&self, message: &[u8]) -> Vec<u8> {
        Blake2b512::digest(message).to_vec()
    }
}

/// XXH3 (128-bit) adapter. Produces 16 bytes.
///
/// XXH3 is not a cryptographic hash. It is only a throughput baseline: a chain built
/// on it detects accidental corruption but offers nothing against a deliberate forger.
#[derive(Debug, Default, Clone, Copy)]
pub struct Xxh3Hasher;

impl HashFunction for Xxh3Hasher {
    fn name(&self) -> &'static str {
        "XXH3"
    }

    fn digest(&self, message: &[u8]) -> Vec<u8> {
        xxh3_128(message).to_be_bytes().to_vec()
    }
}

/// Returned when a hash algorithm name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported hash algorithm: {0}")]
pub struct UnsupportedAlgorithmError(pub String);

/// The hash algorithms a chain can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256, see `[Sha256Hasher]`.
    Sha256,
    /// BLAKE2b-512, see `[Blake2bHasher]`.
    Blake2b,
    /// XXH3-128, see `[Xxh3Hasher]`.
    Xxh3,
}

impl HashAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [HashAlgorithm; 3] = [Self::Sha256, Self::Blake2b, Self::Xxh3];

    /// Builds the adapter for this algorithm.
    #[must_use]
    pub fn hasher(self) -> Arc<dyn HashFunction> {
        match self {
            Self::Sha256 => Arc::new(Sha256Hasher),
            Self::Blake2b => Arc::new(Blake2bHasher),
            Self::Xxh3 => Arc::new(Xxh3Hasher),
        }
    }

    /// Whether the algorithm resists deliberate collisions.
    #[must_use]
    pub fn is_cryptographic(self) -> bool {
        !matches!(self, Self::Xxh3)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Sha256 => "SHA256",
            Self::Blake2b => "BLAKE2",
            Self::Xxh3 => "XXH3",
        };
        write!(f, "{name}")
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnsupportedAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "blake2" | "blake2b" => Ok(Self::Blake2b),
            "xxh3" => Ok(Self::Xxh3),
            _ => Err(UnsupportedAlgorithmError(s.to_owned())),
        }
    }
}
