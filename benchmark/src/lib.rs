//! Benchmark
//!
//! Times repeated `[HashFunction::digest]` calls over a fixed payload, one run per
//! algorithm, and renders the elapsed times as a human readable `[BenchmarkReport]`.
//! Time is read through a `[Clock]` so runs can be made deterministic.
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

/// Contains the `[Benchmark]` runner and its `[BenchmarkReport]`.
pub mod benchmark;
