//! Fibonacci sequence generator.

use crate::error::{BenchError, Result};

/// Longest sequence whose values all fit in u64 (F(0)..=F(93)).
pub const MAX_FIBONACCI_COUNT: usize = 94;

/// Generates the Fibonacci sequence starting `[0, 1]` until it holds at
/// least `n` values.
///
/// Requests of `n <= 2` return the seed pair.
///
/// # Errors
/// `BenchError::FibonacciOverflow` if a value would exceed `u64::MAX`.
pub fn fibonacci(n: usize) -> Result<Vec<u64>> {
    let mut sequence: Vec<u64> = Vec::with_capacity(n.clamp(2, MAX_FIBONACCI_COUNT));
    sequence.push(0);
    sequence.push(1);

    while sequence.len() < n {
        let len = sequence.len();
        let next = sequence[len - 1]
            .checked_add(sequence[len - 2])
            .ok_or(BenchError::FibonacciOverflow { index: len })?;
        sequence.push(next);
    }

    Ok(sequence)
}
