use crate::config::Rounding;

/// Running min/max/sum/count for one key, in tenths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunningStats {
    pub min: i64,
    pub max: i64,
    pub sum: i64,
    pub count: u64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self {
            min: i64::MAX,
            max: i64::MIN,
            sum: 0,
            count: 0,
        }
    }
}

impl RunningStats {
    /// Adds one value. `None` if the sum would overflow; `self` is then
    /// left untouched.
    #[inline]
    #[must_use]
    pub fn aggregate(&mut self, value: i64) -> Option<()> {
        self.sum = self.sum.checked_add(value)?;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.count += 1;
        Some(())
    }

    /// Folds `other` in. `None` if the sum would overflow.
    #[inline]
    #[must_use]
    pub fn combine(&mut self, other: &RunningStats) -> Option<()> {
        self.sum = self.sum.checked_add(other.sum)?;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.count += other.count;
        Some(())
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean in tenths, rounded to a whole tenth. `None` before the first value.
    pub fn mean(&self, rounding: Rounding) -> Option<i64> {
        if self.count == 0 {
            return None;
        }
        Some(mean_tenths(self.sum, self.count, rounding))
    }
}

#[inline]
fn mean_tenths(sum: i64, count: u64, rounding: Rounding) -> i64 {
    let n = sum.unsigned_abs();
    let q = n / count;
    let twice_r = (n % count) * 2;
    let round_up = match rounding {
        Rounding::HalfAwayFromZero => twice_r >= count,
        Rounding::HalfToEven => twice_r > count || (twice_r == count && q % 2 == 1),
    };
    let abs = (q + round_up as u64) as i64;
    if sum < 0 { -abs } else { abs }
}
