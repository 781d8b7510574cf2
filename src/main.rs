use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use summary::{Config, NumberFormat, Rounding};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Per-key min/mean/max over a <key>;<value> file")]
struct Args {
    /// Input file, one `<key>;<value>` per line
    path: PathBuf,

    /// Number of chunks and workers [default: available parallelism]
    #[arg(long)]
    workers: Option<usize>,

    /// Values use ',' as the decimal point, in the input and the report
    #[arg(long)]
    decimal_comma: bool,

    /// Round means half to even instead of half away from zero
    #[arg(long)]
    half_even: bool,

    /// Write a CPU flamegraph of the run to this file
    #[arg(long)]
    cpuprofile: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::default().with_format(NumberFormat {
            decimal_point: if self.decimal_comma { b',' } else { b'.' },
            rounding: if self.half_even {
                Rounding::HalfToEven
            } else {
                Rounding::HalfAwayFromZero
            },
        });
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = args.config();
    info!(?args, ?config, "starting");

    let profiler = match &args.cpuprofile {
        Some(_) => Some(
            pprof::ProfilerGuardBuilder::default()
                .frequency(1000)
                .blocklist(&["libc", "libgcc", "pthread", "vdso"])
                .build()
                .context("starting cpu profiler")?,
        ),
        None => None,
    };

    let started = Instant::now();
    let report = summary::solve(&args.path, &config)
        .with_context(|| format!("summarizing {}", args.path.display()))?;
    let elapsed = started.elapsed();

    println!("{report}");
    eprintln!("Elapsed time: {} ms", elapsed.as_millis());

    if let (Some(guard), Some(out)) = (profiler, &args.cpuprofile) {
        let profile = guard.report().build().context("building cpu profile")?;
        let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
        profile.flamegraph(file).context("writing flamegraph")?;
        info!(path = %out.display(), "wrote cpu profile");
    }

    Ok(())
}
