const PADDING_RATIO: f64 = 0.10;
const MIN_SPAN: f64 = 1.0;

/// Value range for a chart axis: covers every finite value and zero, widened
/// by a margin on both ends.
pub fn padded_axis_window<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let (raw_min, raw_max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let span = (raw_max - raw_min).max(MIN_SPAN);
    let pad = span * PADDING_RATIO;
    (raw_min - pad, raw_max + pad)
}

#[cfg(test)]
mod tests {
    use super::padded_axis_window;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pads_both_ends_and_keeps_zero() {
        let (lo, hi) = padded_axis_window([2.0, 12.0]);
        assert_abs_diff_eq!(lo, -1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 13.2, epsilon = 1e-12);
    }

    #[test]
    fn covers_negative_values() {
        let (lo, hi) = padded_axis_window([-20.0, 5.0]);
        assert_abs_diff_eq!(lo, -22.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn ignores_non_finite_and_empty_input() {
        let (lo, hi) = padded_axis_window([f64::NAN, f64::INFINITY]);
        assert_abs_diff_eq!(lo, -0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 0.1, epsilon = 1e-12);
        assert_eq!(padded_axis_window(Vec::new()), (lo, hi));
    }
}
