//! Summary of a workload run and its console rendering.

use std::io::Write;

use crate::config::Variant;
use crate::error::{BenchError, Result};

/// Banner printed before the workload starts.
pub const TITLE: &str = "PetriBench Memory Benchmark";
/// Line printed after the total.
pub const COMPLETION_MESSAGE: &str = "Benchmark completed successfully";
const RULE_WIDTH: usize = 30;

/// Writes the banner and its rule line.
pub fn write_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Counts and boundary values from a workload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub variant: Variant,
    /// Records (or labels) allocated
    pub entry_count: usize,
    /// Nested lists allocated, if the variant builds them
    pub nested_count: Option<usize>,
    pub fibonacci_requested: usize,
    pub fibonacci_len: usize,
    pub fibonacci_last: u64,
    pub sieve_limit: usize,
    pub prime_count: usize,
    pub smallest_prime: usize,
    pub largest_prime: usize,
    /// Sum of all collection lengths
    pub total_operations: usize,
}

impl Report {
    /// Writes the result lines, the total and the completion message.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Generated {} data entries", self.entry_count)?;
        if let Some(nested) = self.nested_count {
            writeln!(out, "Created {} nested data structures", nested)?;
        }
        writeln!(
            out,
            "Fibonacci({}): {} numbers, last value: {}",
            self.fibonacci_requested, self.fibonacci_len, self.fibonacci_last
        )?;
        writeln!(
            out,
            "Primes up to {}: {} found",
            self.sieve_limit, self.prime_count
        )?;
        writeln!(out, "Largest prime: {}", self.largest_prime)?;
        writeln!(out, "Total operations: {}", self.total_operations)?;
        writeln!(out, "{}", COMPLETION_MESSAGE)?;
        Ok(())
    }

    /// Writes the banner followed by the summary.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        write_header(out)?;
        self.write_summary(out)
    }

    /// Returns the full text output as a string.
    pub fn to_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_text(&mut buf)?;
        String::from_utf8(buf).map_err(|e| BenchError::Encoding(e.to_string()))
    }
}
