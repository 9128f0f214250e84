use crate::block::block::{
    serialize_hash_function, Block, BlockError, GENESIS_DATA, GENESIS_PREVIOUS_HASH,
};

use primitives::clock::{Clock, SystemClock};
use primitives::hash_function::HashFunction;

use serde::Serialize;
use std::fmt;
use std::slice;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Errors raised while building or extending a `[Chain]`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// The hash function produced an empty digest and can not link blocks.
    #[error("Hash function {0} is unusable: it produced an empty digest.")]
    UnusableHashFunction(String),
    /// The latest block already has the largest representable index.
    #[error("The chain can not grow past index {}.", u64::MAX)]
    IndexOverflow,
    /// A block could not be built.
    #[error(transparent)]
    Block(#[from] BlockError),
}

/// Reasons a `[Chain]` fails validation. `index` is the position of the offending
/// block in the chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainValidationError {
    /// The block's stored hash differs from the one recomputed from its fields.
    #[error("Wrong hash at position {index}. Expected: {expected}, but got: {got}")]
    HashMismatch {
        /// Position of the block.
        index: usize,
        /// Recomputed hash.
        expected: String,
        /// Stored hash.
        got: String,
    },
    /// The block's previous hash is not the hash of the block before it.
    #[error("Broken link at position {index}. Expected previous hash: {expected}, but got: {got}")]
    BrokenLink {
        /// Position of the block.
        index: usize,
        /// Hash of the preceding block.
        expected: String,
        /// Stored previous hash.
        got: String,
    },
}

impl ChainValidationError {
    /// Position of the first block that failed validation.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::HashMismatch { index, .. } | Self::BrokenLink { index, .. } => *index,
        }
    }
}

/// An append-only sequence of hash-linked `[Block]`s, starting at a genesis block.
///
/// The hash function is fixed at construction; every block of the chain is hashed
/// with it.
#[derive(Clone, Serialize, Debug)]
pub struct Chain {
    id: Uuid,
    #[serde(rename = "algorithm", serialize_with = "serialize_hash_function")]
    hash_function: Arc<dyn HashFunction>,
    #[serde(skip)]
    clock: Arc<dyn Clock>,
    blocks: Vec<Block>,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str_blocks: String = self
            .blocks
            .iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<String>>()
            .join(" | ");
        write!(
            f,
            "Chain[len: {}, algorithm: {}, {}]",
            self.len(),
            self.hash_function.name(),
            str_blocks
        )
    }
}

impl Chain {
    /// Creates a new chain, stamped by the system clock, holding only its genesis block.
    pub fn new(hash_function: Arc<dyn HashFunction>) -> Result<Self, ChainError> {
        Self::with_clock(hash_function, Arc::new(SystemClock::new()))
    }

    /// Creates a new chain whose blocks are stamped by `clock`.
    ///
    /// # Errors
    /// `[ChainError::UnusableHashFunction]` when `hash_function` returns an empty digest.
    pub fn with_clock(
        hash_function: Arc<dyn HashFunction>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ChainError> {
        if hash_function.digest(&[]).is_empty() {
            return Err(ChainError::UnusableHashFunction(
                hash_function.name().to_owned(),
            ));
        }
        let genesis_block = Block::new(
            0,
            GENESIS_PREVIOUS_HASH.to_owned(),
            clock.now_millis(),
            GENESIS_DATA.to_owned(),
            Arc::clone(&hash_function),
        )?;
        let chain = Chain {
            id: Uuid::new_v4(),
            hash_function,
            clock,
            blocks: vec![genesis_block],
        };
        info!(
            "Chain {} created with {}: genesis {}",
            chain.id,
            chain.hash_function.name(),
            chain.get_latest_block().hash
        );
        Ok(chain)
    }

    /// Identifier assigned at construction, used to tell chains apart in logs.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The hash function every block of this chain is hashed with.
    #[must_use]
    pub fn hash_function(&self) -> &Arc<dyn HashFunction> {
        &self.hash_function
    }

    /// Number of blocks, genesis included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`: the genesis block is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Retrieves the last block in the chain.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn get_latest_block(&self) -> &Block {
        self.blocks
            .last()
            .expect("a chain always holds its genesis block")
    }

    /// Appends a block holding `data` after the latest block and returns it.
    pub fn append(&mut self, data: impl Into<String>) -> Result<&Block, ChainError> {
        let latest = self.get_latest_block();
        let index = latest
            .index
            .checked_add(1)
            .ok_or(ChainError::IndexOverflow)?;
        let block = Block::new(
            index,
            latest.hash.clone(),
            self.clock.now_millis(),
            data.into(),
            Arc::clone(&self.hash_function),
        )?;
        debug!("Chain {}: appending {}", self.id, block);
        self.blocks.push(block);
        Ok(self.get_latest_block())
    }

    /// Checks every block after genesis: its stored hash must match its recomputed hash,
    /// and its previous hash must match the hash of the block before it.
    ///
    /// The genesis block is not checked against its own hash.
    ///
    /// # Errors
    /// The first failing check, see `[ChainValidationError]`.
    pub fn validate(&self) -> Result<(), ChainValidationError> {
        for (position, pair) in self.blocks.windows(2).enumerate() {
            let [previous, current] = pair else {
                continue;
            };
            let index = position + 1;

            let recalculated = current.calculate_hash();
            if current.hash != recalculated {
                let err = ChainValidationError::HashMismatch {
                    index,
                    expected: recalculated,
                    got: current.hash.clone(),
                };
                warn!("Chain {} failed validation: {}", self.id, err);
                return Err(err);
            }

            if current.previous_hash != previous.hash {
                let err = ChainValidationError::BrokenLink {
                    index,
                    expected: previous.hash.clone(),
                    got: current.previous_hash.clone(),
                };
                warn!("Chain {} failed validation: {}", self.id, err);
                return Err(err);
            }
        }
        debug!("Chain {} successfully validated!", self.id);
        Ok(())
    }

    /// `true` when `[Chain::validate]` finds nothing wrong.
    #[must_use]
    pub fn is_chain_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Retrieves all the blocks in the chain.
    #[must_use]
    pub fn get_blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Mutable access to the stored blocks, for audits and tamper simulation. The
    /// chain's length can not change through it.
    pub fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    /// Iterates from genesis to the latest block.
    pub fn iter(&self) -> slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
