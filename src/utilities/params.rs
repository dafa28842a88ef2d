//! Privacy parameters shared by all mechanisms.
use crate::error::{MechanismError, Result};

/// The `(epsilon, delta)` privacy budget of a mechanism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrivacyParams {
    epsilon: f64,
    delta: f64,
}

impl PrivacyParams {
    /// Create and check a new set of privacy parameters.
    /// ## Arguments
    ///   * `epsilon`: the privacy parameter, in `[0, inf]`
    ///   * `delta`: the failure probability, in `[0, 1]`
    /// ## Errors
    /// Returns an error if either parameter is out of range or if both are zero.
    pub fn new(epsilon: f64, delta: f64) -> Result<PrivacyParams> {
        let params = PrivacyParams { epsilon, delta };
        params.check()?;
        Ok(params)
    }

    /// Pure differential privacy, i.e. `delta = 0`.
    pub fn pure(epsilon: f64) -> Result<PrivacyParams> {
        PrivacyParams::new(epsilon, 0.0)
    }

    /// Check that the parameters are valid.
    pub fn check(&self) -> Result<()> {
        // NaN fails both comparisons
        if !(self.epsilon >= 0.0) {
            return Err(MechanismError::InvalidEpsilon(self.epsilon));
        }
        if !(0.0..=1.0).contains(&self.delta) {
            return Err(MechanismError::InvalidDelta(self.delta));
        }
        if self.epsilon + self.delta == 0.0 {
            return Err(MechanismError::ZeroBudget);
        }
        Ok(())
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn is_pure(&self) -> bool {
        self.delta == 0.0
    }
}
