//! binborders: compute histogram bin borders for a sample file

mod io;

use anyhow::Context;
use binborders_core::{compute_borders, Strategy};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Compute histogram bin borders for a flattened sample
///
/// Reads whitespace-separated values from the sample file (lines starting
/// with `#` are skipped), computes `num_bins + 1` borders under the chosen
/// strategy, and writes them one per line to the output file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Text file holding the sample values
    sample_file: PathBuf,

    /// Binning strategy: occupancy, width, or expwidth
    strategy: Strategy,

    /// Number of bins to cover the sample with
    num_bins: usize,

    /// Output file for the border list
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sample = io::read_sample(&args.sample_file)
        .with_context(|| format!("reading sample from {}", args.sample_file.display()))?;
    debug!(
        "Read {} values from {}",
        sample.len(),
        args.sample_file.display()
    );

    let borders = compute_borders(&sample, args.strategy, args.num_bins)?;

    io::write_borders(&args.output, &borders)
        .with_context(|| format!("writing borders to {}", args.output.display()))?;

    println!(
        "Wrote {} bin borders to {}",
        borders.num_borders(),
        args.output.display()
    );
    Ok(())
}
