use std::error::Error;

use crate::curve::PrgCurve;
use crate::dataset::LabeledScores;
use crate::traits::BuildCurve;

/// A set of parameters whose values have not been checked for validity. A reference to the
/// checked parameters can only be obtained after checking has completed. If `BuildCurve` has been
/// implemented on the checked parameters, it is also implemented on the unchecked parameters with
/// the checking step done automatically.
///
/// The validation done in `check_ref()` and `check()` should be identical.
pub trait ParamGuard {
    /// The checked parameters
    type Checked;
    /// Error type resulting from failed checking
    type Error: Error;

    /// Checks the parameters and returns a reference to the checked parameters if successful
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the parameters and returns the checked parameters if successful
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Performs the checking step and calls `build` on the checked parameters. If checking failed,
/// the checking error is converted into the crate error and returned.
impl<F, P> BuildCurve<F> for P
where
    P: ParamGuard,
    P::Checked: BuildCurve<F>,
    crate::error::Error: From<P::Error>,
{
    fn build(&self, data: &LabeledScores<F>) -> crate::error::Result<PrgCurve<F>> {
        let checked = self.check_ref()?;
        checked.build(data)
    }
}
