use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::NumberFormat;
use crate::error::{Result, SummaryError};
use crate::format::{render_report, render_stats};
use crate::scan::Table;

/// Decoded keys with their rendered `min/mean/max`, ordered by key bytes
/// (`B < Z < a < İzmir`), not by a culture-aware collation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FinalTable {
    rows: BTreeMap<String, String>,
}

impl FinalTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.rows.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The one-line `{k = v, ...}` report.
    pub fn render(&self) -> String {
        render_report(self.iter())
    }
}

/// Folds every table into the first one.
pub fn combine_tables(tables: Vec<Table<'_>>) -> Result<Table<'_>> {
    let mut tables = tables.into_iter();
    let mut acc = tables.next().unwrap_or_default();
    for table in tables {
        for (key, stats) in table {
            acc.entry(key)
                .or_default()
                .combine(&stats)
                .ok_or_else(|| SummaryError::SumOverflow { key: key.lossy() })?;
        }
    }
    Ok(acc)
}

/// Combines the per-chunk tables, then decodes and renders each key once.
pub fn merge(tables: Vec<Table<'_>>, format: &NumberFormat) -> Result<FinalTable> {
    let parts = tables.len();
    let combined = combine_tables(tables)?;
    debug!(parts, keys = combined.len(), "merged chunk tables");

    let mut rows = BTreeMap::new();
    for (key, stats) in combined {
        // Every key in a table was inserted together with a value.
        let Some(rendered) = render_stats(&stats, format) else {
            debug_assert!(false, "key {key:?} has no values");
            warn!(?key, "dropping key with no values");
            continue;
        };
        rows.insert(key.decode()?, rendered);
    }
    Ok(FinalTable { rows })
}
