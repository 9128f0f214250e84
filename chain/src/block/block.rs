use primitives::hash_function::HashFunction;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// `previous_hash` of the genesis block, which has no predecessor.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Payload of the genesis block.
pub const GENESIS_DATA: &str = "Genesis Block";

/// Errors raised when a `[Block]` is built from malformed inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    /// Every block must reference something, the genesis block references `"0"`.
    #[error("A block's previous hash can not be empty.")]
    EmptyPreviousHash,
}

/// One ledger entry.
///
/// The hash is computed once, in `[Block::new]`, and stored. The fields are public so
/// that a `[Chain]`'s contents can be audited, and so tampering can be simulated;
/// nothing in this crate mutates a block after construction.
///
/// [Chain]: crate::chain::Chain
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    /// Position in the chain, 0 for genesis.
    pub index: u64,
    /// Hex encoded hash of the preceding block.
    pub previous_hash: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Caller supplied payload.
    pub data: String,
    /// Hex encoded hash of this block.
    pub hash: String,
    #[serde(rename = "algorithm", serialize_with = "serialize_hash_function")]
    hash_function: Arc<dyn HashFunction>,
}

pub(crate) fn serialize_hash_function<S: Serializer>(
    hash_function: &Arc<dyn HashFunction>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(hash_function.name())
}

impl Block {
    /// Builds a block and computes its hash with `hash_function`.
    pub fn new(
        index: u64,
        previous_hash: String,
        timestamp: u64,
        data: String,
        hash_function: Arc<dyn HashFunction>,
    ) -> Result<Self, BlockError> {
        if previous_hash.is_empty() {
            return Err(BlockError::EmptyPreviousHash);
        }
        let mut block = Self {
            index,
            previous_hash,
            timestamp,
            data,
            hash: String::new(),
            hash_function,
        };
        block.hash = block.calculate_hash();
        Ok(block)
    }

    /// Recomputes the hash from the current field values.
    ///
    /// The hashed message is the plain concatenation of the decimal index, the previous
    /// hash, the decimal timestamp and the data, with no separators or length prefixes.
    /// Bytes shifted between adjacent fields can therefore yield the same message
    /// (e.g. index `1` + previous hash `"23"` and index `12` + previous hash `"3"`).
    /// Changing the encoding would change every hash, so it is kept as is.
    #[must_use]
    pub fn calculate_hash(&self) -> String {
        let content = format!(
            "{}{}{}{}",
            self.index, self.previous_hash, self.timestamp, self.data
        );
        self.hash_function.hexdigest(content.as_bytes())
    }

    /// Returns the hash stored at construction.
    #[must_use]
    pub fn get_hash(&self) -> &str {
        &self.hash
    }

    /// Returns the hash function this block was hashed with.
    #[must_use]
    pub fn hash_function(&self) -> &Arc<dyn HashFunction> {
        &self.hash_function
    }

    /// The timestamp as a UTC date, `None` if it is out of chrono's range.
    #[must_use]
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Block(index: {}, previous hash: {}, hash: {}, timestamp: {})",
            self.index, self.previous_hash, self.hash, self.timestamp
        )
    }
}
