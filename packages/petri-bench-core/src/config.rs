//! Workload configuration.

use crate::error::{BenchError, Result};
use crate::fibonacci::MAX_FIBONACCI_COUNT;

/// Allocation shape used by the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// `Entry` records with an id, a string value and a small data vector
    #[default]
    Records,
    /// Flat string labels plus a block of nested integer lists
    Nested,
}

impl Variant {
    /// Returns all variants.
    pub fn all() -> &'static [Variant] {
        &[Variant::Records, Variant::Nested]
    }

    /// Returns a short name for logs and bench ids.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Records => "records",
            Variant::Nested => "nested",
        }
    }
}

/// Workload configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Allocation shape
    pub variant: Variant,
    /// Number of records (or labels in the nested variant)
    pub entry_count: usize,
    /// Length of each record's data vector
    pub entry_data_len: usize,
    /// Number of nested lists (nested variant only)
    pub nested_count: usize,
    /// Length of each nested list
    pub nested_width: usize,
    /// Requested Fibonacci sequence length
    pub fibonacci_count: usize,
    /// Upper bound (inclusive) for the prime sieve
    pub sieve_limit: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Records,
            entry_count: 1000,
            entry_data_len: 10,
            nested_count: 100,
            nested_width: 10,
            fibonacci_count: 50,
            sieve_limit: 1000,
        }
    }
}

impl BenchConfig {
    /// Default workload for the given variant.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Checks that the workload can run to completion.
    pub fn validate(&self) -> Result<()> {
        if self.sieve_limit == usize::MAX {
            return Err(BenchError::InvalidConfig(format!(
                "sieve_limit {} leaves no room for the sieve table",
                self.sieve_limit
            )));
        }
        if self.fibonacci_count > MAX_FIBONACCI_COUNT {
            return Err(BenchError::InvalidConfig(format!(
                "fibonacci_count {} exceeds {} (u64 range)",
                self.fibonacci_count, MAX_FIBONACCI_COUNT
            )));
        }
        Ok(())
    }
}
