//! `prg` computes Precision-Recall-Gain curves and the area under them for evaluating binary
//! classifiers.
//!
//! Precision-Recall analysis suffers from a baseline that depends on the class distribution: a
//! classifier predicting everything positive has precision equal to the proportion of positives,
//! and averaging or interpolating in precision-recall space is not meaningful. Precision-Recall-Gain
//! rescales precision and recall harmonically against this baseline, see Kull and Flach,
//! [Precision-Recall-Gain Curves: PR Analysis Done Right](https://papers.nips.cc/paper/5867-precision-recall-gain-curves-pr-analysis-done-right)
//! (NIPS 2015). The resulting curve lives in the unit square, its linear interpolation is
//! achievable and the area under it relates to the expected F1 score.
//!
//! ## Usage
//!
//! ```
//! use ndarray::array;
//! use prg::prelude::*;
//!
//! let scores = array![0.9, 0.8, 0.7, 0.5, 0.3, 0.1];
//! let labels = [true, true, false, true, false, false];
//!
//! let curve = scores.prg(&labels)?;
//! for p in curve.points() {
//!     println!("{:.3} {:.3}", p.recall_gain, p.precision_gain);
//! }
//!
//! let area = curve.area_under_curve();
//! assert!(area > 0.0 && area <= 1.0);
//! # Ok::<(), prg::Error>(())
//! ```
//!
//! Gains of operating points without true positives are minus infinity. They are kept on the
//! curve, reported in `PrgCurve::warnings` and logged through `tracing`. `PrgParams::gain_floor`
//! clips them to a finite value instead.

mod area;
pub mod contingency;
pub mod curve;
pub mod dataset;
pub mod error;
mod hull;
mod hyperparams;
mod metrics_prg;
pub mod param_guard;
pub mod prelude;
pub mod traits;

#[cfg(feature = "benchmarks")]
pub mod benchmarks;

pub use contingency::Contingency;
pub use curve::{OperatingPoint, PrgCurve, PrgPoint};
pub use dataset::{Float, LabeledScore, LabeledScores};
pub use error::{Error, InputError, NumericWarning, Result};
pub use hyperparams::{PrgParams, PrgValidParams};
pub use param_guard::ParamGuard;
pub use traits::BuildCurve;

/// Precision-Recall-Gain metrics for scores given as arrays or slices
pub mod metrics {
    pub use crate::metrics_prg::{auprg, prg_curve, BinaryClassification};
}
