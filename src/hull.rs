//! Upper convex hull of a Precision-Recall-Gain curve
//!
//! Any point on the hull can be reached by interpolating between two classifiers of the curve, so
//! the hull bounds what a ranking can achieve for every trade-off between the two gains.
use std::cmp::Ordering;

use crate::curve::{PrgCurve, PrgPoint};
use crate::Float;

/// Cross product of `oa` and `ob`, positive for a counter-clockwise turn
fn cross<F: Float>(o: &PrgPoint<F>, a: &PrgPoint<F>, b: &PrgPoint<F>) -> F {
    (a.recall_gain - o.recall_gain) * (b.precision_gain - o.precision_gain)
        - (a.precision_gain - o.precision_gain) * (b.recall_gain - o.recall_gain)
}

impl<F: Float> PrgCurve<F> {
    /// Return the upper convex hull of all points inside the unit square
    ///
    /// The hull is ordered by increasing recall gain and starts and ends at the highest point of
    /// the smallest and largest recall gain.
    pub fn convex_hull(&self) -> Vec<PrgPoint<F>> {
        let mut points = self
            .points
            .iter()
            .filter(|p| p.in_unit_square())
            .copied()
            .collect::<Vec<_>>();

        points.sort_by(|a, b| {
            a.recall_gain
                .partial_cmp(&b.recall_gain)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.precision_gain
                        .partial_cmp(&a.precision_gain)
                        .unwrap_or(Ordering::Equal)
                })
        });

        let mut hull: Vec<PrgPoint<F>> = Vec::with_capacity(points.len());
        for p in points {
            // only the highest point of every recall gain can be on the upper hull
            if hull.last().map_or(false, |l| l.recall_gain == p.recall_gain) {
                continue;
            }

            while let [.., o, a] = hull.as_slice() {
                if cross(o, a, &p) < F::zero() {
                    break;
                }
                hull.pop();
            }
            hull.push(p);
        }

        hull
    }
}
