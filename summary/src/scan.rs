use ahash::AHashMap;
use memchr::memchr;
use tracing::debug;

use crate::chunk::{Chunk, NEWLINE};
use crate::config::NumberFormat;
use crate::error::{Result, SummaryError};
use crate::key::RawKey;
use crate::number::parse_tenths;
use crate::stats::RunningStats;

pub const SEMICOLON: u8 = b';';
pub const CARRIAGE_RETURN: u8 = b'\r';
/// Unmapped tail padding; nothing after it is data.
pub const NUL: u8 = 0;

/// Distinct keys expected per chunk before the table has to grow.
const DEFAULT_CAPACITY: usize = 512;

/// Per-chunk aggregation table. Keys borrow from the mapped input.
pub type Table<'a> = AHashMap<RawKey<'a>, RunningStats>;

/// Aggregates every line of `chunk`. A line is `<key>;<value>` ended by `\n`,
/// `\r\n`, or the end of the chunk.
pub fn scan_chunk<'a>(data: &'a [u8], chunk: Chunk, format: &NumberFormat) -> Result<Table<'a>> {
    let bytes = &data[chunk.range()];
    let mut table = Table::with_capacity(DEFAULT_CAPACITY);
    let mut rows = 0u64;
    let mut pos = 0usize;

    while pos < bytes.len() && bytes[pos] != NUL {
        let rest = &bytes[pos..];
        let line_len = memchr(NEWLINE, rest).unwrap_or(rest.len());
        let line = &rest[..line_len];

        let semi = memchr(SEMICOLON, line).ok_or(SummaryError::MissingDelimiter {
            offset: chunk.start + pos,
        })?;
        let key = RawKey::new(&line[..semi]);
        let value = match &line[semi + 1..] {
            [head @ .., CARRIAGE_RETURN] => head,
            v => v,
        };

        let tenths = parse_tenths(value, format.decimal_point).ok_or_else(|| {
            SummaryError::InvalidNumber {
                offset: chunk.start + pos + semi + 1,
                text: String::from_utf8_lossy(value).into_owned(),
            }
        })?;

        table
            .entry(key)
            .or_default()
            .aggregate(tenths)
            .ok_or_else(|| SummaryError::SumOverflow { key: key.lossy() })?;
        rows += 1;
        pos += line_len + 1;
    }

    debug!(start = chunk.start, len = chunk.len, rows, keys = table.len(), "scanned chunk");
    Ok(table)
}
