//! Implements the exponential mechanism over a finite domain of strings.

use std::collections::HashMap;

use rug::rand::ThreadRandGen;

use super::base::DPMechanism;
use super::normalising::NormalisingConstants;
use super::utility::{UtilityMatrix, UtilityModel};
use crate::error::{MechanismError, Result};
use crate::utilities::arithmetic::weight_float;
use crate::utilities::params::PrivacyParams;
use crate::utilities::randomness::sample_uniform;

/// The exponential mechanism on categorical values.
///
/// An input value is released as a value of the domain chosen with probability
/// proportional to `exp(-epsilon * utility / (2 * sensitivity))`, where utility
/// is the distance between the input and the output. When every value of the
/// domain has the same normalising constant the factor of 2 is dropped.
///
/// All tables are computed at construction and never modified, so a mechanism
/// may be shared between threads. Randomness is supplied per call.
#[derive(Debug, Clone)]
pub struct Exponential {
    params: PrivacyParams,
    model: UtilityModel,
    utilities: UtilityMatrix,
    /// Position of each value in `model.domain()`
    index: HashMap<String, usize>,
    constants: NormalisingConstants,
}

// Constructors
impl Exponential {
    /// Create a new exponential mechanism satisfying pure `epsilon`-DP.
    /// ## Arguments
    ///   * `epsilon`: the privacy parameter, in `(0, inf]`
    ///   * `utility_list`: `(value1, value2, utility)` triples, with a non-negative
    ///     utility for every pair of distinct values appearing in the list
    /// ## Returns
    /// An `Exponential` over the values of `utility_list` or an error.
    /// ## Errors
    /// Returns an error if `epsilon` is out of range, if a utility is negative
    /// or not finite, or if any pair of values is missing a utility.
    /// ## Example
    /// ```
    /// use expmech::{DPMechanism, Exponential, GeneratorOpenSSL};
    ///
    /// let utility_list = vec![("A", "B", 1.0), ("A", "C", 2.0), ("B", "C", 2.0)];
    /// let mech = Exponential::new(1.0, utility_list).unwrap();
    /// let mut rng = GeneratorOpenSSL {};
    /// let release = mech.randomise("A", &mut rng).unwrap();
    /// assert!(["A", "B", "C"].contains(&release));
    /// ```
    pub fn new<I, A, B>(epsilon: f64, utility_list: I) -> Result<Exponential>
    where
        I: IntoIterator<Item = (A, B, f64)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        Exponential::with_privacy(epsilon, 0.0, utility_list)
    }

    /// Create a new exponential mechanism from an `(epsilon, delta)` pair.
    /// Only `delta = 0` is supported.
    /// ## Errors
    /// As [`Exponential::new`], and additionally if `delta` is not zero.
    pub fn with_privacy<I, A, B>(epsilon: f64, delta: f64, utility_list: I) -> Result<Exponential>
    where
        I: IntoIterator<Item = (A, B, f64)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        if delta != 0.0 {
            return Err(MechanismError::InvalidDelta(delta));
        }
        let params = PrivacyParams::new(epsilon, delta)?;

        let model = UtilityModel::build(utility_list)?;
        let utilities = model.check_complete()?;
        let constants = NormalisingConstants::build(&utilities, params.epsilon(), model.sensitivity());

        let index = model
            .domain()
            .iter()
            .enumerate()
            .map(|(i, value)| (value.clone(), i))
            .collect();

        log::debug!(
            "exponential mechanism over {} values (epsilon {}, sensitivity {}, balanced {})",
            model.domain().len(),
            params.epsilon(),
            model.sensitivity(),
            constants.is_balanced()
        );

        Ok(Exponential {
            params,
            model,
            utilities,
            index,
            constants,
        })
    }
}

impl Exponential {
    fn index_of(&self, value: &str) -> Result<usize> {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| MechanismError::NotInDomain(value.to_string()))
    }

    /// The domain, in the order values first appeared in the utility list.
    pub fn domain(&self) -> &[String] {
        self.model.domain()
    }

    /// The largest utility of the mechanism.
    pub fn sensitivity(&self) -> f64 {
        self.model.sensitivity()
    }

    /// Whether every value has the same normalising constant.
    pub fn is_balanced(&self) -> bool {
        self.constants.is_balanced()
    }

    /// The utility list, each pair in lexicographic order.
    pub fn utility_list(&self) -> Vec<(String, String, f64)> {
        self.model.utility_list()
    }

    /// The utility between two domain values.
    pub fn utility(&self, value1: &str, value2: &str) -> Result<f64> {
        Ok(self.utilities.get(self.index_of(value1)?, self.index_of(value2)?))
    }

    /// The unnormalised probability of releasing `value2` for input `value1`.
    pub fn probability(&self, value1: &str, value2: &str) -> Result<f64> {
        let utility = self.utility(value1, value2)?;
        Ok(self.constants.weight_fn().weight(utility).to_f64())
    }

    /// The sum of [`Exponential::probability`] over the domain for input `value`.
    pub fn normalising_constant(&self, value: &str) -> Result<f64> {
        Ok(self.constants.get(self.index_of(value)?).to_f64())
    }
}

impl DPMechanism for Exponential {
    fn params(&self) -> &PrivacyParams {
        &self.params
    }

    /// Sample a domain value for `value` by inverting the cumulative weights,
    /// walking the domain in the same order the normalising constants were
    /// summed in. Outputs of zero weight are never returned.
    /// ## Errors
    /// Returns an error if `value` is not in the domain.
    fn randomise<'a, R: ThreadRandGen + ?Sized>(&'a self, value: &str, rng: &mut R) -> Result<&'a str> {
        let input = self.index_of(value)?;
        let weight_fn = self.constants.weight_fn();

        let mut target = weight_float(sample_uniform(rng));
        target *= self.constants.get(input);

        let mut cumulative = weight_float(0.0);
        let mut last = input;
        for candidate in 0..self.utilities.size() {
            let weight = weight_fn.weight(self.utilities.get(input, candidate));
            if weight.is_zero() {
                continue;
            }
            cumulative += &weight;
            last = candidate;
            if cumulative >= target {
                return Ok(self.domain()[candidate].as_str());
            }
        }

        // Unreachable while the draw is below the constant
        Ok(self.domain()[last].as_str())
    }

    fn bias(&self, _value: &str) -> Result<f64> {
        Err(MechanismError::Unsupported("bias"))
    }

    fn variance(&self, _value: &str) -> Result<f64> {
        Err(MechanismError::Unsupported("variance"))
    }
}
