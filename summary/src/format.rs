use std::fmt::Write as FmtWrite;

use crate::config::NumberFormat;
use crate::stats::RunningStats;

/// Writes a tenths value with exactly one fractional digit.
pub fn write_tenths(out: &mut String, tenths: i64, decimal_point: u8) {
    if tenths < 0 {
        out.push('-');
    }
    let abs = tenths.unsigned_abs();
    let _ = write!(out, "{}{}{}", abs / 10, decimal_point as char, abs % 10);
}

/// `min/mean/max`, or `None` for stats that never saw a value.
pub fn render_stats(stats: &RunningStats, format: &NumberFormat) -> Option<String> {
    let mean = stats.mean(format.rounding)?;
    let mut out = String::with_capacity(16);
    write_tenths(&mut out, stats.min, format.decimal_point);
    out.push('/');
    write_tenths(&mut out, mean, format.decimal_point);
    out.push('/');
    write_tenths(&mut out, stats.max, format.decimal_point);
    Some(out)
}

/// `{k1 = v1, k2 = v2}` in iteration order.
pub fn render_report<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let rows = rows.into_iter();
    let mut out = String::with_capacity(rows.size_hint().0.saturating_mul(32) + 2);
    out.push('{');
    for (idx, (key, value)) in rows.enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(value);
    }
    out.push('}');
    out
}
