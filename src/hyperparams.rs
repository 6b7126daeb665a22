use crate::error::{Error, Result};
use crate::param_guard::ParamGuard;
use crate::Float;

/// Default magnitude below which a gain is reported as extreme
const DEFAULT_EXTREME_GAIN: f64 = -1e6;

/// A verified parameter set ready for building curves
///
/// Gains of operating points without true positives are minus infinity and heavily imbalanced
/// classes push gains towards it as well. These parameters decide when such a point is reported as
/// a numeric warning and whether its gains are clipped to a finite floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrgValidParams<F> {
    gain_floor: Option<F>,
    extreme_gain: F,
}

impl<F: Float> PrgValidParams<F> {
    /// Lower bound gains are clipped to, if any
    pub fn gain_floor(&self) -> Option<F> {
        self.gain_floor
    }

    /// Gains below this value are reported as numeric warnings
    pub fn extreme_gain(&self) -> F {
        self.extreme_gain
    }
}

/// Parameters of the curve builder
///
/// # Defaults to:
///  * `gain_floor`: none, gains are never clipped
///  * `extreme_gain`: -1e6
///
/// # Example
///
/// ```
/// use prg::{ParamGuard, PrgParams};
///
/// let params = PrgParams::<f64>::new().gain_floor(-10.0).check().unwrap();
/// assert_eq!(params.gain_floor(), Some(-10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrgParams<F>(PrgValidParams<F>);

impl<F: Float> Default for PrgParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> PrgParams<F> {
    pub fn new() -> Self {
        PrgParams(PrgValidParams {
            gain_floor: None,
            extreme_gain: F::cast(DEFAULT_EXTREME_GAIN),
        })
    }

    /// Clip gains below `floor` to `floor`
    ///
    /// Only points with negative recall gain are clipped. The floor has to be finite and negative,
    /// so a clipped point stays outside the unit square and the area, the convex hull and the best
    /// F-gain are unaffected.
    pub fn gain_floor(mut self, floor: F) -> Self {
        self.0.gain_floor = Some(floor);

        self
    }

    /// Report gains below `threshold` as numeric warnings
    ///
    /// Non-finite gains are always reported.
    pub fn extreme_gain(mut self, threshold: F) -> Self {
        self.0.extreme_gain = threshold;

        self
    }
}

impl<F: Float> ParamGuard for PrgParams<F> {
    type Checked = PrgValidParams<F>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if let Some(floor) = self.0.gain_floor {
            if !floor.is_finite() || floor >= F::zero() {
                return Err(Error::InvalidGainFloor(floor.to_f64().unwrap_or(f64::NAN)));
            }
        }

        if self.0.extreme_gain.is_nan() || self.0.extreme_gain >= F::zero() {
            Err(Error::InvalidExtremeGain(
                self.0.extreme_gain.to_f64().unwrap_or(f64::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::PrgParams;
    use crate::error::Error;
    use crate::ParamGuard;

    #[test]
    fn defaults_are_valid() {
        let params = PrgParams::<f32>::default().check().unwrap();
        assert_eq!(params.gain_floor(), None);
        assert_eq!(params.extreme_gain(), -1e6);
    }

    #[test]
    fn invalid_floor() {
        assert_eq!(
            PrgParams::new().gain_floor(0.5).check_ref().unwrap_err(),
            Error::InvalidGainFloor(0.5)
        );
        assert!(PrgParams::new().gain_floor(f64::NEG_INFINITY).check().is_err());
        assert!(PrgParams::new().gain_floor(f64::NAN).check().is_err());
        assert_eq!(
            PrgParams::new().gain_floor(0.0f64).check().unwrap_err(),
            Error::InvalidGainFloor(0.0)
        );
        assert!(PrgParams::new().gain_floor(-0.0f64).check().is_err());
        assert!(PrgParams::new().gain_floor(-1e-3f64).check().is_ok());
    }

    #[test]
    fn invalid_extreme_gain() {
        assert_eq!(
            PrgParams::new().extreme_gain(1.0f64).check().unwrap_err(),
            Error::InvalidExtremeGain(1.0)
        );
        assert!(PrgParams::new().extreme_gain(f64::NAN).check().is_err());
        assert!(PrgParams::new()
            .extreme_gain(f64::NEG_INFINITY)
            .check()
            .is_ok());
    }
}
