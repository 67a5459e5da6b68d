//! Shared entry point for the PetriBench binaries.
//!
//! Each binary runs one allocation variant with the reference sizes and
//! prints the fixed-format summary. Meant to be run under an external
//! RSS/PSS measurement tool.

mod cli;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use petri_bench_core::report::write_header;
use petri_bench_core::{run_workload, BenchConfig, Variant};
use tracing_subscriber::EnvFilter;

pub use crate::cli::Cli;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Parses the (empty) command line, runs `variant` and prints the report.
pub fn run(variant: Variant) -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_header(&mut out).context("Failed to write header")?;
    out.flush().context("Failed to flush stdout")?;

    let config = BenchConfig::for_variant(variant);
    tracing::debug!(?config, "Starting workload");

    let report = run_workload(&config).context("Benchmark workload failed")?;

    report
        .write_summary(&mut out)
        .context("Failed to write report")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
