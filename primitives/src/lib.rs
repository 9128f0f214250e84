//! Primitives
//!
//! This crate holds the capabilities the ledger is built on top of: the `[HashFunction]`
//! trait with its algorithm adapters (`[Sha256Hasher]`, `[Blake2bHasher]` and
//! `[Xxh3Hasher]`), the `[HashAlgorithm]` registry used to pick one by name, and the
//! `[Clock]` trait that stamps blocks and times benchmark runs.
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

/// Contains the `[HashFunction]` trait, its adapters and the `[HashAlgorithm]` registry.
pub mod hash_function;

/// Contains the `[Clock]` trait, `[SystemClock]` and `[ManualClock]`.
pub mod clock;
