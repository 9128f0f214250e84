//! App
//!
//! Builds one `[Chain]` per configured hash algorithm, appends the example
//! transactions, prints every block and finishes with a hash throughput comparison.
//! `main.rs` only sets up tracing and maps the outcome to an exit status.
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

/// Contains `[AppConfig]`.
pub mod config;
/// Contains `[run]` and `[AppError]`.
pub mod run;
