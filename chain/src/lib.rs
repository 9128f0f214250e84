//! Chain
//!
//! This crate contains the core ledger functionality: the `[Block]` and `[Chain]`
//! modules, that constitute the hash-linked datastructures, and `[SharedChain]`,
//! a lock-guarded handle for sharing one `Chain` between threads.
//!
//! Every `Block` carries the hash of its predecessor, and its own hash is derived from
//! its fields with the `[HashFunction]` the owning `Chain` was built with. Tampering with
//! any appended block is caught by `[Chain::validate]`.
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::wildcard_imports)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_precision_loss)]
#![warn(clippy::too_many_arguments)]
#![warn(clippy::large_enum_variant)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

#[warn(missing_docs)]
/// Contains the `[Chain]` struct.
pub mod chain;

#[allow(clippy::module_inception)]
/// Contains the `[Block]` struct.
pub mod block {
    /// Contains the `[Block]` struct.
    pub mod block;
}

/// Contains the `[SharedChain]` struct.
pub mod shared;
