//! Per-key min/mean/max over `<key>;<value>` lines.
//!
//! The input is mapped, cut into line-aligned chunks, scanned in parallel
//! into per-chunk tables keyed by raw key bytes, and merged into one sorted
//! report such as `{Amsterdam = -2.3/10.4/25.6, Zurich = -8.1/5.2/19.9}`.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info_span};

pub mod chunk;
pub mod config;
pub mod error;
pub mod format;
pub mod key;
pub mod merge;
pub mod number;
pub mod region;
pub mod scan;
pub mod stats;

pub use config::{Config, NumberFormat, Rounding};
pub use error::{Result, SummaryError};
pub use merge::FinalTable;
pub use region::MappedRegion;

/// Maps the file at `path` and returns its one-line report.
pub fn solve<P: AsRef<Path>>(path: P, config: &Config) -> Result<String> {
    let region = MappedRegion::open(path.as_ref())?;
    solve_bytes(region.bytes(), config)
}

/// Report for an in-memory input.
pub fn solve_bytes(data: &[u8], config: &Config) -> Result<String> {
    Ok(summarize(data, config)?.render())
}

/// Chunked, parallel aggregation of `data` with `config.workers` workers.
pub fn summarize(data: &[u8], config: &Config) -> Result<FinalTable> {
    config.validate()?;
    let _span = info_span!("summarize", workers = config.workers, bytes = data.len()).entered();

    let chunks = chunk::plan(data, config.workers);
    debug!(chunks = chunks.len(), "planned chunks");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()?;
    let tables = pool.install(|| {
        chunks
            .par_iter()
            .map(|c| scan::scan_chunk(data, *c, &config.format))
            .collect::<Result<Vec<_>>>()
    })?;

    merge::merge(tables, &config.format)
}

/// One sequential pass over the whole input, no chunking and no pool.
pub fn summarize_sequential(data: &[u8], format: &NumberFormat) -> Result<FinalTable> {
    let whole = chunk::Chunk {
        start: 0,
        len: data.len(),
    };
    let table = scan::scan_chunk(data, whole, format)?;
    merge::merge(vec![table], format)
}
