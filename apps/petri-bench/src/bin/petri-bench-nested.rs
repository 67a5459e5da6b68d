//! PetriBench memory benchmark, nested variant.
//!
//! Builds 1000 string labels and 100 nested lists of ten integers, then
//! runs the same Fibonacci and sieve steps as `petri-bench`.

use petri_bench_core::Variant;

fn main() -> anyhow::Result<()> {
    petri_bench_app::run(Variant::Nested)
}
