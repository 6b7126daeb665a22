//! prg prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, InputError, NumericWarning, Result};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;

#[doc(no_inline)]
pub use crate::dataset::{Float, LabeledScore, LabeledScores};

#[doc(no_inline)]
pub use crate::curve::{OperatingPoint, PrgCurve, PrgPoint};

#[doc(no_inline)]
pub use crate::hyperparams::{PrgParams, PrgValidParams};

#[doc(no_inline)]
pub use crate::metrics_prg::{auprg, prg_curve, BinaryClassification};
