//! Area under the Precision-Recall-Gain curve
//!
//! Only the part of the curve with recall gain in `[0, 1]` is integrated. Precision gain below
//! zero inside that range counts as negative area.
use crate::curve::PrgCurve;
use crate::Float;

/// Integration using the trapezoidal rule, restricted to `x` in `[0, 1]`
///
/// Segments straddling a boundary are cut at the boundary by linear interpolation. Segments
/// with a non-finite end are skipped.
pub(crate) fn trapezoidal<F: Float>(vals: &[(F, F)]) -> F {
    let (lower, upper) = (F::zero(), F::one());
    let half = F::cast(0.5);
    let mut integral = F::zero();

    for w in vals.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            continue;
        }

        let (lo, hi) = (x0.max(lower), x1.min(upper));
        if hi <= lo {
            continue;
        }

        let at = |x: F| y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        integral += (hi - lo) * (at(lo) + at(hi)) * half;
    }

    integral
}

impl<F: Float> PrgCurve<F> {
    /// Return the area under the curve (AUPRG)
    pub fn area_under_curve(&self) -> F {
        trapezoidal(&self.get_curve())
    }
}

#[cfg(test)]
mod tests {
    use super::trapezoidal;
    use crate::curve::PrgCurve;
    use approx::assert_abs_diff_eq;

    #[test]
    fn diagonal() {
        let curve = PrgCurve::from_gains(vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_abs_diff_eq!(curve.area_under_curve(), 0.5);
    }

    #[test]
    fn unit_square() {
        let curve = PrgCurve::from_gains(vec![(0.0f32, 1.0), (1.0, 1.0)]).unwrap();
        assert_abs_diff_eq!(curve.area_under_curve(), 1.0);
    }

    #[test]
    fn clipped_to_recall_gain_range() {
        // the part left of zero is dropped
        let vals = [(-1.0, 1.0), (1.0, 1.0)];
        assert_abs_diff_eq!(trapezoidal(&vals), 1.0);

        // the segment is cut at zero, y = 0.5 there
        let vals = [(-1.0, 0.0), (1.0, 1.0)];
        assert_abs_diff_eq!(trapezoidal(&vals), 0.75);

        let vals = [(f64::NEG_INFINITY, f64::NEG_INFINITY), (0.0, 1.0), (1.0, 0.0)];
        assert_abs_diff_eq!(trapezoidal(&vals), 0.5);
    }

    #[test]
    fn negative_precision_gain() {
        let vals = [(0.0, -1.0), (1.0, -1.0)];
        assert_abs_diff_eq!(trapezoidal(&vals), -1.0);
    }

    #[test]
    fn vertical_segments_add_nothing() {
        let vals = [(0.0, 1.0), (0.5, 1.0), (0.5, 0.0), (1.0, 0.0)];
        assert_abs_diff_eq!(trapezoidal(&vals), 0.5);
    }

    #[test]
    fn degenerate() {
        assert_eq!(trapezoidal::<f64>(&[]), 0.0);
        assert_eq!(trapezoidal(&[(0.5, 1.0)]), 0.0);
    }
}
