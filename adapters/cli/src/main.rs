#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that prints a snail matrix.

mod args;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use snail_core::Dimension;
use snail_matrix::generate;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

/// Entry point for the snail command-line interface.
fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

/// Logs go to stderr so stdout carries nothing but the matrix.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let dimension = Dimension::try_from(args.size).context("invalid matrix size")?;
    tracing::info!(
        side = dimension.side(),
        format = ?args.format,
        "rendering snail matrix"
    );

    let matrix = generate(dimension);
    let rendered = args.format.backend().render(&matrix)?;
    out.write_all(rendered.as_bytes())
        .context("failed to write matrix to stdout")?;
    out.flush().context("failed to flush stdout")
}
