//! Contingency tables and the gain transform
//!
//! Precision and recall are rescaled against the always-positive classifier: a gain of one is
//! perfect, a gain of zero matches the baseline that predicts every sample positive and negative
//! gains are worse than that baseline. Both gains only depend on the entries of the contingency
//! table of a single operating point.
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{InputError, Result};
use crate::Float;

/// Binary contingency table of a single operating point
///
/// The entries are kept as floating point numbers, because operating points interpolated between
/// two thresholds have fractional counts.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contingency<F> {
    pub true_positives: F,
    pub false_positives: F,
    pub false_negatives: F,
    pub true_negatives: F,
}

impl<F: Float> Contingency<F> {
    pub fn new(
        true_positives: F,
        false_positives: F,
        false_negatives: F,
        true_negatives: F,
    ) -> Self {
        Contingency {
            true_positives,
            false_positives,
            false_negatives,
            true_negatives,
        }
    }

    /// Count a hard prediction against the ground truth
    ///
    /// # Errors
    ///
    /// Fails on a length mismatch and if the ground truth lacks one of the classes, as gains are
    /// undefined then.
    pub fn from_predictions(predicted: &[bool], ground_truth: &[bool]) -> Result<Self> {
        if predicted.len() != ground_truth.len() {
            return Err(InputError::LengthMismatch {
                scores: predicted.len(),
                labels: ground_truth.len(),
            }
            .into());
        }

        let mut table = Contingency::new(F::zero(), F::zero(), F::zero(), F::zero());
        for (p, t) in predicted.iter().zip(ground_truth.iter()) {
            match (p, t) {
                (true, true) => table.true_positives += F::one(),
                (true, false) => table.false_positives += F::one(),
                (false, true) => table.false_negatives += F::one(),
                (false, false) => table.true_negatives += F::one(),
            }
        }

        if table.positives().is_zero() {
            Err(InputError::NoPositives.into())
        } else if table.negatives().is_zero() {
            Err(InputError::NoNegatives.into())
        } else {
            Ok(table)
        }
    }

    /// Number of samples in the positive class
    pub fn positives(&self) -> F {
        self.true_positives + self.false_negatives
    }

    /// Number of samples in the negative class
    pub fn negatives(&self) -> F {
        self.false_positives + self.true_negatives
    }

    /// Precision, one if nothing is predicted positive
    pub fn precision(&self) -> F {
        let predicted = self.true_positives + self.false_positives;
        if predicted.is_zero() {
            F::one()
        } else {
            self.true_positives / predicted
        }
    }

    pub fn recall(&self) -> F {
        self.true_positives / self.positives()
    }

    /// `true` if every sample is predicted positive
    fn is_all_positive(&self) -> bool {
        (self.true_negatives + self.false_negatives).is_zero()
    }

    /// Precision gain `1 - pos/neg * FP/TP`
    ///
    /// Zero for the all-positive classifier and minus infinity without true positives. Without
    /// negatives precision never leaves its baseline of one and the gain is zero.
    pub fn precision_gain(&self) -> F {
        if self.is_all_positive() {
            F::zero()
        } else if self.true_positives.is_zero() {
            F::neg_infinity()
        } else if self.negatives().is_zero() {
            F::zero()
        } else {
            F::one()
                - (self.positives() / self.negatives())
                    * (self.false_positives / self.true_positives)
        }
    }

    /// Recall gain `1 - pos/neg * FN/TP`
    ///
    /// One for the all-positive classifier and minus infinity without true positives.
    pub fn recall_gain(&self) -> F {
        if self.is_all_positive() {
            F::one()
        } else if self.true_positives.is_zero() {
            F::neg_infinity()
        } else {
            F::one()
                - (self.positives() / self.negatives())
                    * (self.false_negatives / self.true_positives)
        }
    }

    /// F-beta gain, the weighted arithmetic mean of precision and recall gain
    pub fn f_gain(&self, beta: F) -> F {
        let sb = beta * beta;

        (self.precision_gain() + sb * self.recall_gain()) / (F::one() + sb)
    }

    /// F1 gain
    pub fn f1_gain(&self) -> F {
        self.f_gain(F::one())
    }

    /// Linear interpolation `self + alpha * (other - self)` of all entries
    pub(crate) fn lerp(&self, other: &Self, alpha: F) -> Self {
        let mix = |a: F, b: F| a + alpha * (b - a);

        Contingency {
            true_positives: mix(self.true_positives, other.true_positives),
            false_positives: mix(self.false_positives, other.false_positives),
            false_negatives: mix(self.false_negatives, other.false_negatives),
            true_negatives: mix(self.true_negatives, other.true_negatives),
        }
    }
}
