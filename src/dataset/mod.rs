//! Labeled scores
//!
//! This module implements the input container of the curve builder: classifier scores paired
//! with binary ground truth, together with the floating point bound used throughout the crate.
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast, Signed};

use std::fmt;
use std::iter::Sum;

use crate::error::{InputError, Result};

mod iter;
pub use iter::Iter;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Scores, contingency counts and gains are
/// all expressed in this type.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// A single classifier score with its ground truth
///
/// `label` is `true` for the positive class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledScore<F> {
    pub score: F,
    pub label: bool,
}

impl<F> LabeledScore<F> {
    pub fn new(score: F, label: bool) -> Self {
        LabeledScore { score, label }
    }
}

/// Scores and labels of a binary classification task
///
/// The two sequences are stored in parallel and always have the same, non-zero length and no
/// score is NaN. The order of samples carries no meaning, the curve builder sorts internally.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledScores<F> {
    scores: Array1<F>,
    labels: Vec<bool>,
}

impl<F: Float> LabeledScores<F> {
    /// Create labeled scores from parallel sequences
    ///
    /// # Errors
    ///
    /// Fails if the sequences are empty, differ in length or a score is NaN.
    pub fn new(scores: Array1<F>, labels: Vec<bool>) -> Result<Self> {
        if scores.len() != labels.len() {
            return Err(InputError::LengthMismatch {
                scores: scores.len(),
                labels: labels.len(),
            }
            .into());
        }

        if scores.is_empty() {
            return Err(InputError::EmptyInput.into());
        }

        if let Some(idx) = scores.iter().position(|s| s.is_nan()) {
            return Err(InputError::NanScore(idx).into());
        }

        Ok(LabeledScores { scores, labels })
    }

    /// Copy scores from any one-dimensional array and pair them with labels
    pub fn from_view<D: Data<Elem = F>>(
        scores: &ArrayBase<D, Ix1>,
        labels: &[bool],
    ) -> Result<Self> {
        Self::new(scores.to_owned(), labels.to_vec())
    }

    /// Collect labeled scores from pairs
    pub fn from_pairs<I: IntoIterator<Item = LabeledScore<F>>>(pairs: I) -> Result<Self> {
        let (scores, labels): (Vec<F>, Vec<bool>) =
            pairs.into_iter().map(|x| (x.score, x.label)).unzip();

        Self::new(Array1::from(scores), labels)
    }

    pub fn scores(&self) -> ArrayView1<'_, F> {
        self.scores.view()
    }

    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false, empty inputs are rejected on construction
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn n_positives(&self) -> usize {
        self.labels.iter().filter(|x| **x).count()
    }

    pub fn n_negatives(&self) -> usize {
        self.len() - self.n_positives()
    }

    /// Return the class counts `(positives, negatives)`
    ///
    /// # Errors
    ///
    /// Gains are defined relative to the class ratio, a single-class input is rejected.
    pub fn class_counts(&self) -> Result<(usize, usize)> {
        let pos = self.n_positives();
        let neg = self.len() - pos;

        if pos == 0 {
            Err(InputError::NoPositives.into())
        } else if neg == 0 {
            Err(InputError::NoNegatives.into())
        } else {
            Ok((pos, neg))
        }
    }

    pub fn iter(&self) -> Iter<'_, F> {
        Iter::new(self)
    }
}

impl<'a, F: Float> IntoIterator for &'a LabeledScores<F> {
    type Item = LabeledScore<F>;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
