//! Behaviour shared by differentially private mechanisms.
use rug::rand::ThreadRandGen;

use crate::error::Result;
use crate::utilities::params::PrivacyParams;

/// A mechanism releasing a value of a categorical domain.
pub trait DPMechanism {
    /// The privacy budget the mechanism was built with.
    fn params(&self) -> &PrivacyParams;

    /// Randomise `value`, drawing randomness from `rng`.
    fn randomise<'a, R: ThreadRandGen + ?Sized>(&'a self, value: &str, rng: &mut R) -> Result<&'a str>;

    /// The bias of the mechanism at `value`.
    fn bias(&self, value: &str) -> Result<f64>;

    /// The variance of the mechanism at `value`.
    fn variance(&self, value: &str) -> Result<f64>;
}
