//! Workload driver: allocates, computes and summarises.

use std::hint::black_box;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::{BenchConfig, Variant};
use crate::error::{BenchError, Result};
use crate::fibonacci::fibonacci;
use crate::records::{build_entries, build_labels, build_nested};
use crate::report::Report;
use crate::sieve::prime_sieve;

/// Runs the full workload described by `config`.
///
/// The allocated collections stay alive until the summary is built, so
/// the process peak reflects all of them at once.
pub fn run_workload(config: &BenchConfig) -> Result<Report> {
    config.validate()?;
    let start = Instant::now();

    // Allocation phase
    let phase = Instant::now();
    let (entry_count, nested_count, entries, labels, nested) = match config.variant {
        Variant::Records => {
            let entries = build_entries(config.entry_count, config.entry_data_len);
            (entries.len(), None, entries, Vec::new(), Vec::new())
        }
        Variant::Nested => {
            let labels = build_labels(config.entry_count);
            let nested = build_nested(config.nested_count, config.nested_width);
            (
                labels.len(),
                Some(nested.len()),
                Vec::new(),
                labels,
                nested,
            )
        }
    };
    debug!(
        variant = config.variant.name(),
        entry_count,
        nested_count = nested_count.unwrap_or(0),
        elapsed_us = phase.elapsed().as_micros() as u64,
        "Allocated records"
    );

    let phase = Instant::now();
    let fib = fibonacci(config.fibonacci_count)?;
    debug!(
        requested = config.fibonacci_count,
        len = fib.len(),
        elapsed_us = phase.elapsed().as_micros() as u64,
        "Generated Fibonacci sequence"
    );

    let phase = Instant::now();
    let primes = prime_sieve(config.sieve_limit);
    debug!(
        limit = config.sieve_limit,
        count = primes.len(),
        elapsed_us = phase.elapsed().as_micros() as u64,
        "Ran prime sieve"
    );

    let fibonacci_last = *fib.last().ok_or(BenchError::EmptySequence {
        sequence: "fibonacci",
    })?;
    let (smallest_prime, largest_prime) = match (primes.first(), primes.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(BenchError::EmptySequence { sequence: "primes" }),
    };

    let total_operations = entry_count + nested_count.unwrap_or(0) + fib.len() + primes.len();

    black_box((&entries, &labels, &nested, &fib, &primes));

    let report = Report {
        variant: config.variant,
        entry_count,
        nested_count,
        fibonacci_requested: config.fibonacci_count,
        fibonacci_len: fib.len(),
        fibonacci_last,
        sieve_limit: config.sieve_limit,
        prime_count: primes.len(),
        smallest_prime,
        largest_prime,
        total_operations,
    };

    info!(
        variant = config.variant.name(),
        total_operations,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Workload completed"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_totals() {
        let report = run_workload(&BenchConfig::default()).unwrap();
        assert_eq!(report.entry_count, 1000);
        assert_eq!(report.nested_count, None);
        assert_eq!(report.total_operations, 1000 + 50 + 168);
    }

    #[test]
    fn test_nested_totals() {
        let report = run_workload(&BenchConfig::for_variant(Variant::Nested)).unwrap();
        assert_eq!(report.entry_count, 1000);
        assert_eq!(report.nested_count, Some(100));
        assert_eq!(report.total_operations, 1000 + 100 + 50 + 168);
    }

    #[test]
    fn test_empty_primes_rejected() {
        let config = BenchConfig {
            sieve_limit: 1,
            ..Default::default()
        };
        assert_eq!(
            run_workload(&config),
            Err(BenchError::EmptySequence { sequence: "primes" })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BenchConfig {
            sieve_limit: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            run_workload(&config),
            Err(BenchError::InvalidConfig(_))
        ));
    }
}
