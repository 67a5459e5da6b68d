//! PetriBench memory benchmark.
//!
//! Builds 1000 records, generates Fibonacci(50), sieves primes up to 1000
//! and prints the collection sizes.

use petri_bench_core::Variant;

fn main() -> anyhow::Result<()> {
    petri_bench_app::run(Variant::Records)
}
