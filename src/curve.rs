//! Precision-Recall-Gain curve
//!
//! The curve is built by sweeping a threshold over the scores from the highest to the lowest
//! value. Every distinct score yields one operating point, tied scores are treated as a single
//! step. Between operating points the contingency table is interpolated linearly, which is used
//! to place additional points where the curve crosses the axes of the unit square.
use std::cmp::Ordering;

use approx::AbsDiffEq;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::contingency::Contingency;
use crate::dataset::LabeledScores;
use crate::error::{InputError, NumericWarning, Result};
use crate::hyperparams::PrgValidParams;
use crate::traits::BuildCurve;
use crate::Float;

/// A single point on the curve
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrgPoint<F> {
    pub recall_gain: F,
    pub precision_gain: F,
}

impl<F: Float> PrgPoint<F> {
    pub fn new(recall_gain: F, precision_gain: F) -> Self {
        PrgPoint {
            recall_gain,
            precision_gain,
        }
    }

    /// `true` if both gains are non-negative
    pub fn in_unit_square(&self) -> bool {
        self.recall_gain >= F::zero() && self.precision_gain >= F::zero()
    }

    fn is_finite(&self) -> bool {
        self.recall_gain.is_finite() && self.precision_gain.is_finite()
    }
}

impl<F: Float> AbsDiffEq for PrgPoint<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.recall_gain.abs_diff_eq(&other.recall_gain, epsilon)
            && self.precision_gain.abs_diff_eq(&other.precision_gain, epsilon)
    }
}

/// The classifier state belonging to a point on the curve
///
/// Crossing points are interpolated between two thresholds. They carry the threshold of the
/// following point and a fractional contingency table.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint<F> {
    pub threshold: F,
    pub contingency: Contingency<F>,
    pub is_crossing: bool,
}

impl<F: Float> OperatingPoint<F> {
    pub fn precision(&self) -> F {
        self.contingency.precision()
    }

    pub fn recall(&self) -> F {
        self.contingency.recall()
    }
}

/// Precision-Recall-Gain curve
///
/// Points are ordered by non-decreasing recall gain. Curves built from scores carry one operating
/// point per curve point, curves assembled from raw gains carry none.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PrgCurve<F> {
    pub(crate) points: Vec<PrgPoint<F>>,
    pub(crate) operating_points: Vec<OperatingPoint<F>>,
    pub(crate) warnings: Vec<NumericWarning>,
}

impl<F: Float> PrgCurve<F> {
    /// Assemble a curve from `(recall_gain, precision_gain)` pairs
    ///
    /// # Errors
    ///
    /// Fails if a gain is NaN or recall gain decreases.
    pub fn from_gains<I: IntoIterator<Item = (F, F)>>(gains: I) -> Result<Self> {
        let points = gains
            .into_iter()
            .map(|(rg, pg)| PrgPoint::new(rg, pg))
            .collect::<Vec<_>>();

        for (i, p) in points.iter().enumerate() {
            if p.recall_gain.is_nan() || p.precision_gain.is_nan() {
                return Err(InputError::NanGain(i).into());
            }

            if i > 0 && p.recall_gain < points[i - 1].recall_gain {
                return Err(InputError::UnorderedCurve(i).into());
            }
        }

        Ok(PrgCurve {
            points,
            operating_points: Vec::new(),
            warnings: Vec::new(),
        })
    }

    pub fn points(&self) -> &[PrgPoint<F>] {
        &self.points
    }

    /// Contingency tables and thresholds, empty for curves assembled from gains
    pub fn operating_points(&self) -> &[OperatingPoint<F>] {
        &self.operating_points
    }

    pub fn warnings(&self) -> &[NumericWarning] {
        &self.warnings
    }

    /// Return the curve as `(recall_gain, precision_gain)` pairs
    pub fn get_curve(&self) -> Vec<(F, F)> {
        self.points
            .iter()
            .map(|p| (p.recall_gain, p.precision_gain))
            .collect()
    }

    pub fn get_thresholds(&self) -> Vec<F> {
        self.operating_points.iter().map(|p| p.threshold).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Return the index and F-beta gain of the best point inside the unit square
    ///
    /// The index refers to `points` and, for curves built from scores, to `operating_points`.
    /// Ties keep the point with the lowest recall gain.
    pub fn best_f_gain(&self, beta: F) -> Option<(usize, F)> {
        let sb = beta * beta;

        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.in_unit_square())
            .map(|(i, p)| (i, (p.precision_gain + sb * p.recall_gain) / (F::one() + sb)))
            .fold(None, |best, (i, gain)| match best {
                Some((_, b)) if b >= gain => best,
                _ => Some((i, gain)),
            })
    }
}

/// Samples sharing one score
struct Segment<F> {
    score: F,
    positives: usize,
    negatives: usize,
}

/// Group samples by score, ordered from the highest to the lowest score
fn segments<F: Float>(data: &LabeledScores<F>) -> Vec<Segment<F>> {
    let scores = data.scores();
    let labels = data.labels();

    let mut indices = (0..data.len()).collect::<Vec<_>>();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut segments: Vec<Segment<F>> = Vec::new();
    for idx in indices {
        let score = scores[idx];
        if segments.last().map_or(true, |s| s.score != score) {
            segments.push(Segment {
                score,
                positives: 0,
                negatives: 0,
            });
        }

        let last = segments.len() - 1;
        if labels[idx] {
            segments[last].positives += 1;
        } else {
            segments[last].negatives += 1;
        }
    }

    segments
}

#[derive(Debug, Clone, Copy)]
struct Row<F> {
    threshold: F,
    counts: Contingency<F>,
    is_crossing: bool,
    recall_gain: F,
    precision_gain: F,
}

impl<F: Float> Row<F> {
    fn new(threshold: F, counts: Contingency<F>) -> Self {
        Row {
            threshold,
            counts,
            is_crossing: false,
            recall_gain: counts.recall_gain(),
            precision_gain: counts.precision_gain(),
        }
    }
}

fn clamp_unit<F: Float>(alpha: F) -> F {
    alpha.max(F::zero()).min(F::one())
}

/// One row per threshold, preceded by the row predicting nothing positive
fn threshold_rows<F: Float>(segments: &[Segment<F>], pos: F, neg: F) -> Vec<Row<F>> {
    let mut rows = Vec::with_capacity(segments.len() + 2);
    let (mut tp, mut fp) = (F::zero(), F::zero());

    rows.push(Row::new(
        F::infinity(),
        Contingency::new(tp, fp, pos, neg),
    ));

    for s in segments {
        tp += F::cast(s.positives);
        fp += F::cast(s.negatives);

        rows.push(Row::new(
            s.score,
            Contingency::new(tp, fp, pos - tp, neg - fp),
        ));
    }

    rows
}

/// Insert the point at which recall gain becomes zero
///
/// Recall gain only depends on the true positives, the point is where the true positives reach
/// `pos^2 / n`.
fn insert_recall_crossing<F: Float>(rows: &mut Vec<Row<F>>, pos: F, neg: F) {
    let j = match rows.iter().position(|r| r.recall_gain >= F::zero()) {
        Some(j) if j > 0 && rows[j].recall_gain > F::zero() => j,
        _ => return,
    };

    let (prev, next) = (&rows[j - 1], &rows[j]);
    let delta_tp = next.counts.true_positives - prev.counts.true_positives;
    let alpha = if delta_tp > F::zero() {
        (pos * pos / (pos + neg) - prev.counts.true_positives) / delta_tp
    } else {
        F::cast(0.5)
    };

    let counts = prev.counts.lerp(&next.counts, clamp_unit(alpha));
    let crossing = Row {
        threshold: next.threshold,
        counts,
        is_crossing: true,
        recall_gain: F::zero(),
        precision_gain: counts.precision_gain(),
    };

    rows.insert(j, crossing);
}

/// Interpolate the point between `prev` and `next` where precision gain is zero
fn precision_crossing<F: Float>(prev: &Row<F>, next: &Row<F>, pos: F, neg: F) -> Row<F> {
    // crossing of the linear segment in gain space
    let x = prev.recall_gain
        + (-prev.precision_gain) / (next.precision_gain - prev.precision_gain)
            * (next.recall_gain - prev.recall_gain);

    let delta_tp = next.counts.true_positives - prev.counts.true_positives;
    let delta_fp = next.counts.false_positives - prev.counts.false_positives;
    let alpha = if delta_tp > F::zero() {
        (pos * pos / (pos + neg - neg * x) - prev.counts.true_positives) / delta_tp
    } else {
        (neg / pos * prev.counts.true_positives - prev.counts.false_positives) / delta_fp
    };

    let counts = prev.counts.lerp(&next.counts, clamp_unit(alpha));
    let recall_gain = counts
        .recall_gain()
        .max(prev.recall_gain)
        .min(next.recall_gain);

    Row {
        threshold: next.threshold,
        counts,
        is_crossing: true,
        recall_gain,
        precision_gain: F::zero(),
    }
}

/// Insert a point wherever precision gain changes sign at non-negative recall gain
fn insert_precision_crossings<F: Float>(rows: Vec<Row<F>>, pos: F, neg: F) -> Vec<Row<F>> {
    let mut out = Vec::with_capacity(rows.len() + 2);
    let mut rows = rows.into_iter();

    let mut prev = match rows.next() {
        Some(row) => row,
        None => return out,
    };

    for row in rows {
        out.push(prev);
        if prev.recall_gain >= F::zero() && prev.precision_gain * row.precision_gain < F::zero() {
            out.push(precision_crossing(&prev, &row, pos, neg));
        }
        prev = row;
    }
    out.push(prev);

    out
}

impl<F: Float> PrgValidParams<F> {
    /// Flag extreme gains and clip points left of the recall gain origin
    fn screen(&self, index: usize, point: &mut PrgPoint<F>) -> Option<NumericWarning> {
        let lowest = point.recall_gain.min(point.precision_gain);
        let finite = point.is_finite();
        let extreme = !finite || lowest < self.extreme_gain();

        let clipped = match self.gain_floor() {
            Some(floor) if point.recall_gain < F::zero() && lowest < floor => {
                point.recall_gain = point.recall_gain.max(floor);
                point.precision_gain = point.precision_gain.max(floor);
                true
            }
            _ => false,
        };

        let gain = lowest.to_f64().unwrap_or(f64::NEG_INFINITY);
        if !finite {
            Some(NumericWarning::NonFiniteGain { index, clipped })
        } else if extreme {
            Some(NumericWarning::ExtremeGain {
                index,
                gain,
                clipped,
            })
        } else if clipped {
            Some(NumericWarning::ClippedGain { index, gain })
        } else {
            None
        }
    }
}

impl<F: Float> BuildCurve<F> for PrgValidParams<F> {
    fn build(&self, data: &LabeledScores<F>) -> Result<PrgCurve<F>> {
        let (n_pos, n_neg) = data.class_counts()?;
        let (pos, neg) = (F::cast(n_pos), F::cast(n_neg));

        let segments = segments(data);
        let mut rows = threshold_rows(&segments, pos, neg);
        insert_recall_crossing(&mut rows, pos, neg);
        let rows = insert_precision_crossings(rows, pos, neg);

        let mut points = Vec::with_capacity(rows.len());
        let mut operating_points = Vec::with_capacity(rows.len());
        let mut warnings = Vec::new();

        // the first row predicts nothing positive and has no defined gains
        for (index, row) in rows.into_iter().skip(1).enumerate() {
            let mut point = PrgPoint::new(row.recall_gain, row.precision_gain);

            if let Some(warning) = self.screen(index, &mut point) {
                tracing::warn!(
                    index,
                    threshold = %row.threshold,
                    recall_gain = %row.recall_gain,
                    precision_gain = %row.precision_gain,
                    clipped = warning.is_clipped(),
                    "extreme gain on precision-recall-gain curve"
                );
                warnings.push(warning);
            }

            points.push(point);
            operating_points.push(OperatingPoint {
                threshold: row.threshold,
                contingency: row.counts,
                is_crossing: row.is_crossing,
            });
        }

        tracing::debug!(
            samples = data.len(),
            positives = n_pos,
            negatives = n_neg,
            thresholds = segments.len(),
            points = points.len(),
            warnings = warnings.len(),
            "built precision-recall-gain curve"
        );

        Ok(PrgCurve {
            points,
            operating_points,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PrgCurve, PrgPoint};
    use crate::dataset::LabeledScores;
    use crate::error::{Error, InputError, NumericWarning};
    use crate::{BuildCurve, ParamGuard, PrgParams};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn build(scores: ndarray::Array1<f64>, labels: &[bool]) -> PrgCurve<f64> {
        let data = LabeledScores::new(scores, labels.to_vec()).unwrap();
        PrgParams::<f64>::new().build(&data).unwrap()
    }

    #[test]
    fn perfect_ranking() {
        let curve = build(array![0.9, 0.8, 0.3, 0.1], &[true, true, false, false]);

        // pos = neg = 2: TP = 1 gives recall gain 0, TP = 2 perfect
        assert_abs_diff_eq!(
            curve.points(),
            &[
                PrgPoint::new(0.0, 1.0),
                PrgPoint::new(1.0, 1.0),
                PrgPoint::new(1.0, 0.5),
                PrgPoint::new(1.0, 0.0),
            ][..],
            epsilon = 1e-12
        );
        assert_eq!(curve.get_thresholds(), vec![0.9, 0.8, 0.3, 0.1]);
        assert!(curve.warnings().is_empty());
    }

    #[test]
    fn recall_crossing_is_interpolated() {
        // pos = 2, neg = 2, so recall gain is zero at TP = 1
        let curve = build(array![0.9, 0.5, 0.5, 0.1], &[false, true, true, false]);

        // the first threshold only contains a negative
        assert_eq!(curve.points()[0].recall_gain, f64::NEG_INFINITY);
        assert_eq!(
            curve.warnings()[0],
            NumericWarning::NonFiniteGain {
                index: 0,
                clipped: false
            }
        );

        // the tie at 0.5 moves TP from 0 to 2, the crossing sits halfway
        let crossing = &curve.operating_points()[1];
        assert!(crossing.is_crossing);
        assert_eq!(crossing.threshold, 0.5);
        assert_abs_diff_eq!(crossing.contingency.true_positives, 1.0);
        assert_abs_diff_eq!(crossing.contingency.false_positives, 1.0);
        assert_eq!(curve.points()[1].recall_gain, 0.0);
        assert_abs_diff_eq!(curve.points()[1].precision_gain, 0.0);
    }

    #[test]
    fn precision_crossing_is_inserted() {
        // pos = 3, neg = 4
        let curve = build(
            array![0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3],
            &[true, true, false, false, false, true, false],
        );

        let gains = curve.get_curve();
        let crossings = curve
            .operating_points()
            .iter()
            .zip(gains.iter())
            .filter(|(op, _)| op.is_crossing)
            .map(|(_, g)| *g)
            .collect::<Vec<_>>();

        // precision gain drops below zero at 0.5 and recovers at 0.4
        assert_eq!(crossings.len(), 3);
        assert_eq!(crossings[0].0, 0.0);
        assert_abs_diff_eq!(crossings[1].0, 0.625, epsilon = 1e-12);
        assert_eq!(crossings[1].1, 0.0);
        assert_abs_diff_eq!(crossings[2].0, 0.75, epsilon = 1e-12);
        assert_eq!(crossings[2].1, 0.0);
    }

    #[test]
    fn recall_gain_is_monotone() {
        let curve = build(
            array![0.3, 0.1, 0.8, 0.5, 0.5, 0.9, 0.2, 0.7, 0.4, 0.6],
            &[false, true, true, false, true, false, false, true, false, true],
        );

        for w in curve.points().windows(2) {
            assert!(w[0].recall_gain <= w[1].recall_gain);
        }
        assert!(curve
            .points()
            .iter()
            .all(|p| !p.recall_gain.is_nan() && !p.precision_gain.is_nan()));
    }

    #[test]
    fn ties_collapse() {
        let curve = build(
            array![0.5, 0.5, 0.5, 0.2, 0.2, 0.9],
            &[true, false, true, false, true, false],
        );

        let thresholds = curve
            .operating_points()
            .iter()
            .filter(|op| !op.is_crossing)
            .map(|op| op.threshold)
            .collect::<Vec<_>>();

        assert_eq!(thresholds, vec![0.9, 0.5, 0.2]);
    }

    #[test]
    fn single_class_is_rejected() {
        let data = LabeledScores::new(array![0.1, 0.2], vec![true, true]).unwrap();
        assert_eq!(
            PrgParams::<f64>::new().build(&data).unwrap_err(),
            Error::Input(InputError::NoNegatives)
        );
    }

    #[test]
    fn clipping() {
        let data = LabeledScores::new(
            array![0.9, 0.8, 0.5, 0.1],
            vec![false, false, true, true],
        )
        .unwrap();

        let params = PrgParams::<f64>::new().gain_floor(-5.0).check().unwrap();
        let curve = params.build(&data).unwrap();

        assert_eq!(curve.points()[0], PrgPoint::new(-5.0, -5.0));
        assert!(curve.warnings().iter().all(|w| w.is_clipped()));
        assert!(curve.points().iter().all(|p| p.recall_gain.is_finite()));
    }

    #[test]
    fn finite_gains_are_clipped_left_of_origin() {
        // sorted: negative, positive, positive; pos = 2, neg = 1
        let data =
            LabeledScores::new(array![0.9, 0.1, 0.5], vec![false, true, true]).unwrap();

        let unclipped = PrgParams::<f64>::new().build(&data).unwrap();
        let params = PrgParams::new().gain_floor(-0.25).check().unwrap();
        let curve = params.build(&data).unwrap();

        assert_eq!(
            curve.warnings(),
            &[
                NumericWarning::NonFiniteGain {
                    index: 0,
                    clipped: true
                },
                NumericWarning::ClippedGain {
                    index: 1,
                    gain: -1.0
                },
            ][..]
        );
        assert_eq!(curve.points()[1], PrgPoint::new(-0.25, -0.25));

        // the recall crossing lies below the floor but on the origin, it is kept
        assert_eq!(curve.points()[2].recall_gain, 0.0);
        assert_abs_diff_eq!(curve.points()[2].precision_gain, -0.5, epsilon = 1e-12);

        assert_abs_diff_eq!(curve.area_under_curve(), -0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(
            curve.area_under_curve(),
            unclipped.area_under_curve(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn from_gains() {
        let curve = PrgCurve::from_gains(vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(curve.len(), 2);
        assert!(curve.operating_points().is_empty());

        assert_eq!(
            PrgCurve::from_gains(vec![(0.5, 0.0), (0.2, 1.0)]).unwrap_err(),
            Error::Input(InputError::UnorderedCurve(1))
        );
        assert_eq!(
            PrgCurve::from_gains(vec![(0.0, f64::NAN)]).unwrap_err(),
            Error::Input(InputError::NanGain(0))
        );
    }

    #[test]
    fn best_f_gain() {
        let curve = build(array![0.9, 0.8, 0.3, 0.1], &[true, true, false, false]);

        let (i, gain) = curve.best_f_gain(1.0).unwrap();
        assert_abs_diff_eq!(gain, 1.0);
        assert_eq!(curve.operating_points()[i].threshold, 0.8);
    }

    #[test]
    fn best_f_gain_from_gains() {
        let curve = PrgCurve::from_gains(vec![(-0.5, 2.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();

        assert_eq!(curve.best_f_gain(1.0), Some((2, 1.0)));
        // only precision gain counts for beta zero, the tie keeps the first point
        assert_eq!(curve.best_f_gain(0.0), Some((1, 1.0)));

        let outside = PrgCurve::from_gains(vec![(-1.0, 0.5), (0.5, -0.5)]).unwrap();
        assert_eq!(outside.best_f_gain(1.0), None);
    }
}
