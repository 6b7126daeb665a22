use crate::curve::PrgCurve;
use crate::dataset::LabeledScores;
use crate::error::Result;

/// Build a precision-recall-gain curve from labeled scores
///
/// Implemented by the checked parameters and, through `ParamGuard`, by the unchecked parameters
/// which are validated first.
pub trait BuildCurve<F> {
    fn build(&self, data: &LabeledScores<F>) -> Result<PrgCurve<F>>;
}
