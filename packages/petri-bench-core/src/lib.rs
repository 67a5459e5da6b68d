//! Workload for cross-language memory benchmarking.
//!
//! Allocates synthetic records, generates a Fibonacci sequence and runs a
//! Sieve of Eratosthenes, then summarises the collection sizes in a
//! [`Report`](report::Report).

pub mod config;
pub mod driver;
pub mod error;
pub mod fibonacci;
pub mod records;
pub mod report;
pub mod sieve;

pub use config::{BenchConfig, Variant};
pub use driver::run_workload;
pub use error::{BenchError, Result};
pub use report::Report;
