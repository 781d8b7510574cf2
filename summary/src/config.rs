//! Explicit parsing/formatting conventions handed to the engine instead of
//! any process-wide locale.

use crate::error::{Result, SummaryError};

/// How the mean is rounded to one fractional digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    /// `0.25 -> 0.3`, `-0.25 -> -0.3`
    #[default]
    HalfAwayFromZero,
    /// `0.25 -> 0.2`, `0.35 -> 0.4`
    HalfToEven,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_point: u8,
    pub rounding: Rounding,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_point: b'.',
            rounding: Rounding::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of chunks, and of workers scanning them.
    pub workers: usize,
    pub format: NumberFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: rayon::current_num_threads().max(1),
            format: NumberFormat::default(),
        }
    }
}

impl Config {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(SummaryError::Config("workers must be at least 1".into()));
        }
        let dp = self.format.decimal_point;
        if dp.is_ascii_digit() || matches!(dp, b'-' | b';' | b'\n' | b'\r') || !dp.is_ascii() {
            return Err(SummaryError::Config(format!(
                "decimal point {:?} clashes with the line grammar",
                dp as char
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = Config::default();
        assert!(cfg.workers >= 1);
        assert_eq!(cfg.format.decimal_point, b'.');
        assert_eq!(cfg.format.rounding, Rounding::HalfAwayFromZero);
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_zero_workers() {
        let err = Config::default().with_workers(0).validate().unwrap_err();
        assert!(matches!(err, SummaryError::Config(_)));
    }

    #[test]
    fn rejects_ambiguous_decimal_point() {
        for dp in [b'5', b'-', b';', b'\n'] {
            let cfg = Config::default().with_format(NumberFormat {
                decimal_point: dp,
                rounding: Rounding::HalfAwayFromZero,
            });
            assert!(cfg.validate().is_err(), "accepted {:?}", dp as char);
        }
        let comma = Config::default().with_format(NumberFormat {
            decimal_point: b',',
            ..NumberFormat::default()
        });
        comma.validate().unwrap();
    }
}
