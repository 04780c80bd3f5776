pub const RATIO_END: f64 = 10.0;
pub const RATIO_STEP: f64 = 0.01;
pub const TIME_END: f64 = 100.0;
pub const TIME_STEP: f64 = 0.01;

/// Samples `start, start + step, ...` while the running value stays below `end`.
///
/// The step is accumulated rather than multiplied out, so the sampled values
/// carry the rounding drift of repeated `+= step` (0.01 is not exact in
/// binary). Search results depend on those exact values.
#[derive(Clone, Copy, Debug)]
pub struct AccumulatingRange {
    next: f64,
    end: f64,
    step: f64,
}

impl AccumulatingRange {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self {
            next: start,
            end,
            step,
        }
    }
}

impl Iterator for AccumulatingRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if !(self.next < self.end) {
            return None;
        }
        let value = self.next;
        self.next += self.step;
        Some(value)
    }
}

pub fn ratio_grid() -> AccumulatingRange {
    AccumulatingRange::new(0.0, RATIO_END, RATIO_STEP)
}

pub fn time_grid() -> AccumulatingRange {
    AccumulatingRange::new(0.0, TIME_END, TIME_STEP)
}

#[cfg(test)]
mod tests {
    use super::{AccumulatingRange, ratio_grid, time_grid};
    use approx::assert_abs_diff_eq;

    #[test]
    fn ratio_grid_has_drifted_extra_sample() {
        let ratios: Vec<f64> = ratio_grid().collect();
        assert_eq!(ratios.len(), 1001);
        assert_eq!(ratios[0], 0.0);
        let last = *ratios.last().expect("grid is non-empty");
        assert!(last < 10.0);
        assert_abs_diff_eq!(last, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn time_grid_covers_hundred_seconds() {
        let times: Vec<f64> = time_grid().collect();
        assert_eq!(times.len(), 10000);
        assert_abs_diff_eq!(times[9999], 99.99, epsilon = 1e-9);
    }

    #[test]
    fn empty_when_start_is_not_below_end() {
        assert_eq!(AccumulatingRange::new(1.0, 1.0, 0.5).count(), 0);
        assert_eq!(AccumulatingRange::new(f64::NAN, 1.0, 0.5).count(), 0);
    }
}
