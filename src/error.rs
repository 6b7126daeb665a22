//! Error types in prg
//!
use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Malformed or degenerate input to the curve builder
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("scores and labels differ in length: {scores} != {labels}")]
    LengthMismatch { scores: usize, labels: usize },
    #[error("no samples given")]
    EmptyInput,
    #[error("no positive samples, gains are undefined")]
    NoPositives,
    #[error("no negative samples, gains are undefined")]
    NoNegatives,
    #[error("score at index {0} is not a number")]
    NanScore(usize),
    #[error("recall gain decreases at point {0}")]
    UnorderedCurve(usize),
    #[error("gain at point {0} is not a number")]
    NanGain(usize),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("gain floor has to be negative and finite, got {0}")]
    InvalidGainFloor(f64),
    #[error("extreme gain threshold has to be negative, got {0}")]
    InvalidExtremeGain(f64),
}

/// Non-fatal numeric condition raised while building a curve
///
/// `index` refers to the position of the affected point on the curve. `clipped` is set if the
/// gains of the point were raised to the configured floor, which only happens left of the
/// recall gain origin.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum NumericWarning {
    NonFiniteGain {
        index: usize,
        clipped: bool,
    },
    ExtremeGain {
        index: usize,
        gain: f64,
        clipped: bool,
    },
    ClippedGain {
        index: usize,
        gain: f64,
    },
}

impl NumericWarning {
    /// Position of the affected point on the curve
    pub fn index(&self) -> usize {
        match self {
            NumericWarning::NonFiniteGain { index, .. }
            | NumericWarning::ExtremeGain { index, .. }
            | NumericWarning::ClippedGain { index, .. } => *index,
        }
    }

    pub fn is_clipped(&self) -> bool {
        match self {
            NumericWarning::NonFiniteGain { clipped, .. }
            | NumericWarning::ExtremeGain { clipped, .. } => *clipped,
            NumericWarning::ClippedGain { .. } => true,
        }
    }
}

impl fmt::Display for NumericWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericWarning::NonFiniteGain { index, .. } => {
                write!(f, "infinite gain at point {}", index)?
            }
            NumericWarning::ExtremeGain { index, gain, .. } => {
                write!(f, "extreme gain {} at point {}", gain, index)?
            }
            NumericWarning::ClippedGain { index, gain } => {
                write!(f, "gain {} at point {} below floor", gain, index)?
            }
        }

        if self.is_clipped() && !matches!(self, NumericWarning::ClippedGain { .. }) {
            write!(f, ", clipped")?;
        }

        Ok(())
    }
}
