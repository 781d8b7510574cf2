use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use generate::{LineEnding, write_measurements};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Write a synthetic <station>;<value> measurements file")]
struct Args {
    /// Output file
    out: PathBuf,

    #[arg(long, default_value_t = 1_000_000)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Terminate lines with \r\n
    #[arg(long)]
    crlf: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let line_ending = if args.crlf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    };

    let started = Instant::now();
    let file = File::create(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    write_measurements(file, args.rows, args.seed, line_ending)
        .with_context(|| format!("writing {}", args.out.display()))?;

    info!(
        rows = args.rows,
        path = %args.out.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generated measurements"
    );
    Ok(())
}
