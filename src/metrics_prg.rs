//! Precision-Recall-Gain metrics for binary classifiers
//!
//! Entry points taking raw scores, either as `ndarray` arrays through `BinaryClassification` or
//! as plain slices through `prg_curve` and `auprg`.
use ndarray::prelude::*;
use ndarray::Data;

use crate::curve::PrgCurve;
use crate::dataset::LabeledScores;
use crate::error::Result;
use crate::hyperparams::{PrgParams, PrgValidParams};
use crate::traits::BuildCurve;
use crate::Float;

pub trait BinaryClassification<F> {
    /// Build the precision-recall-gain curve of scores against ground truth
    fn prg(&self, y: &[bool]) -> Result<PrgCurve<F>>;

    /// Build the curve with explicit numeric warning parameters
    fn prg_with(&self, y: &[bool], params: &PrgValidParams<F>) -> Result<PrgCurve<F>>;
}

/// Higher scores are taken to indicate the positive class. Each distinct score becomes one point
/// of the curve.
impl<F: Float, D: Data<Elem = F>> BinaryClassification<F> for ArrayBase<D, Ix1> {
    fn prg(&self, y: &[bool]) -> Result<PrgCurve<F>> {
        PrgParams::<F>::new().build(&LabeledScores::from_view(self, y)?)
    }

    fn prg_with(&self, y: &[bool], params: &PrgValidParams<F>) -> Result<PrgCurve<F>> {
        params.build(&LabeledScores::from_view(self, y)?)
    }
}

/// Return the precision-recall-gain curve of `scores` against `labels`
pub fn prg_curve<F: Float>(scores: &[F], labels: &[bool]) -> Result<PrgCurve<F>> {
    ArrayView1::from(scores).prg(labels)
}

/// Return the area under the precision-recall-gain curve
///
/// Shorthand for `prg_curve(scores, labels)?.area_under_curve()`.
pub fn auprg<F: Float>(scores: &[F], labels: &[bool]) -> Result<F> {
    Ok(prg_curve(scores, labels)?.area_under_curve())
}
