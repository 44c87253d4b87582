//! Buffered FizzBuzz CLI
//!
//! Streams the FizzBuzz sequence to stdout in size-bounded batches.

use anyhow::{Context, Result};
use buffered_fizzbuzz::{FizzBuzz, DEFAULT_LIMIT, DEFAULT_THRESHOLD};
use clap::Parser;
use std::io;
use std::time::Instant;

/// FizzBuzz with batched stdout writes
#[derive(Parser, Debug)]
#[command(name = "buffered-fizzbuzz")]
#[command(about = "Print fizz/buzz labels for 1..=LIMIT followed by OK", long_about = None)]
#[command(version)]
struct Args {
    /// Last value to print (inclusive)
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_LIMIT)]
    limit: u64,

    /// Buffered bytes that must be exceeded before a write is issued
    #[arg(short, long, value_name = "BYTES", default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger (stderr, so stdout stays byte-exact); RUST_LOG wins over the flag
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::info!("Buffered FizzBuzz v{}", env!("CARGO_PKG_VERSION"));

    let generator = FizzBuzz::builder()
        .limit(args.limit)
        .threshold(args.threshold)
        .build()?;

    log::info!("Generating {} lines...", generator.line_count());
    log::debug!("Flush threshold: {} bytes", generator.threshold());

    // The generator batches on its own, so no BufWriter in between
    let stdout = io::stdout();
    let started = Instant::now();
    let stats = generator
        .run(stdout.lock())
        .context("Failed to write FizzBuzz output to stdout")?;

    log::info!(
        "Generation complete: {} lines, {} bytes in {} writes ({:.2?})",
        stats.lines,
        stats.bytes_written,
        stats.flushes,
        started.elapsed()
    );

    Ok(())
}
