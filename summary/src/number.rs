//! Value parsing. Values are carried as signed tenths so that every later
//! step (min, max, sum, merge) is exact integer arithmetic.

pub const MINUS: u8 = b'-';
const ZERO: u8 = b'0';

/// Largest magnitude the fallback accepts, in tenths. Sums can still
/// overflow on huge inputs; `RunningStats` checks for that.
const MAX_ABS_TENTHS: f64 = 1e9;

/// Relative slack when deciding whether a parsed value is a whole tenth.
const TENTH_TOLERANCE: f64 = 1e-12;

/// Parses one value into tenths, trying the fast path first and the general
/// parser for every other shape. `None` means neither could make sense of it.
#[inline]
pub fn parse_tenths(bytes: &[u8], decimal_point: u8) -> Option<i64> {
    fast_tenths(bytes, decimal_point).or_else(|| fallback_tenths(bytes, decimal_point))
}

#[inline]
fn digit(b: u8) -> Option<i64> {
    b.is_ascii_digit().then(|| (b - ZERO) as i64)
}

/// Handles `d`, `dd`, `d.d`, `dd.d` and their negative forms.
#[inline]
pub(crate) fn fast_tenths(bytes: &[u8], decimal_point: u8) -> Option<i64> {
    let (neg, body) = match bytes {
        [MINUS, rest @ ..] => (true, rest),
        _ => (false, bytes),
    };

    let abs = match body {
        [a] => digit(*a)? * 10,
        [a, b] => digit(*a)? * 100 + digit(*b)? * 10,
        [a, p, f] if *p == decimal_point => digit(*a)? * 10 + digit(*f)?,
        [a, b, p, f] if *p == decimal_point => digit(*a)? * 100 + digit(*b)? * 10 + digit(*f)?,
        _ => return None,
    };

    Some(if neg { -abs } else { abs })
}

/// General decimal parsing via `lexical-core`. Only values that are a whole
/// number of tenths are accepted (`123.4`, `0.10`, `1e1`); anything finer,
/// such as `0.14`, is rejected rather than rounded.
pub(crate) fn fallback_tenths(bytes: &[u8], decimal_point: u8) -> Option<i64> {
    let value: f64 = if decimal_point == b'.' {
        lexical_core::parse(bytes).ok()?
    } else {
        // A '.' is not a decimal point under this format.
        if bytes.contains(&b'.') {
            return None;
        }
        let normalized: Vec<u8> = bytes
            .iter()
            .map(|&b| if b == decimal_point { b'.' } else { b })
            .collect();
        lexical_core::parse(&normalized).ok()?
    };

    let scaled = value * 10.0;
    let tenths = scaled.round();
    if !tenths.is_finite() || tenths.abs() > MAX_ABS_TENTHS {
        return None;
    }
    if (scaled - tenths).abs() > TENTH_TOLERANCE * tenths.abs().max(1.0) {
        return None;
    }
    Some(tenths as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tenths: i64, with_fraction: bool) -> String {
        let sign = if tenths < 0 { "-" } else { "" };
        let abs = tenths.abs();
        if with_fraction {
            format!("{sign}{}.{}", abs / 10, abs % 10)
        } else {
            format!("{sign}{}", abs / 10)
        }
    }

    #[test]
    fn fast_path_shapes() {
        assert_eq!(fast_tenths(b"5", b'.'), Some(50));
        assert_eq!(fast_tenths(b"-5", b'.'), Some(-50));
        assert_eq!(fast_tenths(b"42", b'.'), Some(420));
        assert_eq!(fast_tenths(b"-42", b'.'), Some(-420));
        assert_eq!(fast_tenths(b"1.5", b'.'), Some(15));
        assert_eq!(fast_tenths(b"-1.5", b'.'), Some(-15));
        assert_eq!(fast_tenths(b"99.9", b'.'), Some(999));
        assert_eq!(fast_tenths(b"-99.9", b'.'), Some(-999));
        assert_eq!(fast_tenths(b"-0.0", b'.'), Some(0));
    }

    #[test]
    fn fast_path_declines_other_shapes() {
        for s in ["", "-", "123", "123.4", "1.25", ".5", "5.", "1x", "a.b", "--1", "1,5"] {
            assert_eq!(fast_tenths(s.as_bytes(), b'.'), None, "{s:?}");
        }
    }

    #[test]
    fn fast_path_agrees_with_fallback_over_the_whole_grammar() {
        for tenths in -999..=999 {
            let s = render(tenths, true);
            let fast = fast_tenths(s.as_bytes(), b'.');
            let slow = fallback_tenths(s.as_bytes(), b'.');
            assert_eq!(fast, Some(tenths), "{s}");
            assert_eq!(fast, slow, "{s}");
        }
        for whole in -99..=99 {
            let s = render(whole * 10, false);
            assert_eq!(fast_tenths(s.as_bytes(), b'.'), Some(whole * 10), "{s}");
            assert_eq!(fallback_tenths(s.as_bytes(), b'.'), Some(whole * 10), "{s}");
        }
    }

    #[test]
    fn three_integer_digits_take_the_fallback() {
        assert_eq!(fast_tenths(b"123.4", b'.'), None);
        assert_eq!(parse_tenths(b"123.4", b'.'), Some(1234));
        assert_eq!(parse_tenths(b"-100", b'.'), Some(-1000));
        assert_eq!(parse_tenths(b"-100.0", b'.'), Some(-1000));
    }

    #[test]
    fn fallback_accepts_whole_tenths() {
        assert_eq!(parse_tenths(b"0.10", b'.'), Some(1));
        assert_eq!(parse_tenths(b"-100.00", b'.'), Some(-1000));
        assert_eq!(parse_tenths(b"1e1", b'.'), Some(100));
        assert_eq!(parse_tenths(b"12345678.9", b'.'), Some(123456789));
    }

    #[test]
    fn fallback_rejects_finer_than_tenths() {
        for s in ["0.14", "0.17", "1.25", "-1.25", "0.04", "-0.05", "99.99", "1e-2"] {
            assert_eq!(parse_tenths(s.as_bytes(), b'.'), None, "{s:?}");
        }
    }

    #[test]
    fn fallback_rejects_garbage() {
        for s in ["", "-", "abc", "1.2.3", "1;2", "NaN", "inf", "1e300"] {
            assert_eq!(parse_tenths(s.as_bytes(), b'.'), None, "{s:?}");
        }
    }

    #[test]
    fn decimal_comma() {
        assert_eq!(parse_tenths(b"12,3", b','), Some(123));
        assert_eq!(parse_tenths(b"-1,5", b','), Some(-15));
        assert_eq!(parse_tenths(b"123,4", b','), Some(1234));
        assert_eq!(parse_tenths(b"12.3", b','), None);
    }
}
