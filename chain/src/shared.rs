use crate::block::block::Block;
use crate::chain::{Chain, ChainError, ChainValidationError};

use static_assertions::assert_impl_all;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

assert_impl_all!(Chain: Send, Sync);
assert_impl_all!(SharedChain: Send, Sync, Clone);

/// A cloneable handle to one `[Chain]` shared between threads.
///
/// Appending holds the write lock for the whole "read latest block, push new block"
/// sequence, so concurrent writers can never fork the chain. Reads and validation hold
/// the read lock and always observe a whole number of appends.
#[derive(Clone, Debug)]
pub struct SharedChain {
    inner: Arc<RwLock<Chain>>,
}

impl SharedChain {
    /// Wraps `chain`.
    #[must_use]
    pub fn new(chain: Chain) -> Self {
        SharedChain {
            inner: Arc::new(RwLock::new(chain)),
        }
    }

    // A panic while a guard is held can not leave the chain half written: the push is
    // the last step of an append.
    fn read(&self) -> RwLockReadGuard<'_, Chain> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Chain> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a block holding `data` and returns a copy of it.
    pub fn append(&self, data: impl Into<String>) -> Result<Block, ChainError> {
        let mut chain = self.write();
        trace!("Chain {}: write lock acquired", chain.id());
        chain.append(data).cloned()
    }

    /// See `[Chain::validate]`.
    pub fn validate(&self) -> Result<(), ChainValidationError> {
        self.read().validate()
    }

    /// See `[Chain::is_chain_valid]`.
    #[must_use]
    pub fn is_chain_valid(&self) -> bool {
        self.read().is_chain_valid()
    }

    /// Number of blocks, genesis included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Always `false`, see `[Chain::is_empty]`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// A copy of the latest block.
    #[must_use]
    pub fn latest_block(&self) -> Block {
        self.read().get_latest_block().clone()
    }

    /// Runs `f` against a consistent view of the chain.
    pub fn with_chain<T>(&self, f: impl FnOnce(&Chain) -> T) -> T {
        f(&self.read())
    }

    /// Unwraps the chain when this is the last handle, otherwise gives the handle back.
    pub fn try_into_inner(self) -> Result<Chain, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(SharedChain { inner }),
        }
    }
}

impl From<Chain> for SharedChain {
    fn from(chain: Chain) -> Self {
        Self::new(chain)
    }
}
