//! The exponential mechanism with utilities inferred from a hierarchy.

use rug::rand::ThreadRandGen;

use super::base::DPMechanism;
use super::exponential::Exponential;
use super::hierarchy::{build_locators, derive_utility_list, Node};
use crate::error::Result;
use crate::utilities::params::PrivacyParams;

/// The exponential mechanism on the leaves of a hierarchy.
///
/// Every leaf must lie at the same depth. Two leaves are at utility `h - k`
/// where `h` is the height of the hierarchy and `k` the depth of their lowest
/// common ancestor, e.g. for `[["A"], ["B"], ["C"], ["D", "E"]]` the utility
/// between `D` and `E` is 1 and between `A` and `D` is 2.
#[derive(Debug, Clone)]
pub struct ExponentialHierarchical {
    hierarchy: Vec<Node>,
    mechanism: Exponential,
}

impl ExponentialHierarchical {
    /// Create a hierarchical mechanism satisfying pure `epsilon`-DP.
    /// ## Errors
    /// Returns an error if `epsilon` is out of range, if leaves are at different
    /// depths or if a leaf appears more than once.
    /// ## Example
    /// ```
    /// use expmech::{DPMechanism, ExponentialHierarchical, GeneratorOpenSSL, Node};
    ///
    /// let hierarchy = vec![
    ///     Node::group(vec!["A".into()]),
    ///     Node::group(vec!["D".into(), "E".into()]),
    /// ];
    /// let mech = ExponentialHierarchical::new(1.0, hierarchy).unwrap();
    /// assert_eq!(mech.utility("D", "E").unwrap(), 1.0);
    /// let release = mech.randomise("D", &mut GeneratorOpenSSL {}).unwrap();
    /// ```
    pub fn new(epsilon: f64, hierarchy: Vec<Node>) -> Result<ExponentialHierarchical> {
        ExponentialHierarchical::with_privacy(epsilon, 0.0, hierarchy)
    }

    /// Create a hierarchical mechanism from an `(epsilon, delta)` pair.
    /// Only `delta = 0` is supported.
    pub fn with_privacy(epsilon: f64, delta: f64, hierarchy: Vec<Node>) -> Result<ExponentialHierarchical> {
        let utility_list = derive_utility_list(&build_locators(&hierarchy)?);
        let mechanism = Exponential::with_privacy(epsilon, delta, utility_list)?;
        Ok(ExponentialHierarchical { hierarchy, mechanism })
    }

    pub fn hierarchy(&self) -> &[Node] {
        &self.hierarchy
    }

    /// The underlying mechanism over the leaves.
    pub fn mechanism(&self) -> &Exponential {
        &self.mechanism
    }

    pub fn utility_list(&self) -> Vec<(String, String, f64)> {
        self.mechanism.utility_list()
    }

    pub fn utility(&self, value1: &str, value2: &str) -> Result<f64> {
        self.mechanism.utility(value1, value2)
    }
}

impl DPMechanism for ExponentialHierarchical {
    fn params(&self) -> &PrivacyParams {
        self.mechanism.params()
    }

    fn randomise<'a, R: ThreadRandGen + ?Sized>(&'a self, value: &str, rng: &mut R) -> Result<&'a str> {
        self.mechanism.randomise(value, rng)
    }

    fn bias(&self, value: &str) -> Result<f64> {
        self.mechanism.bias(value)
    }

    fn variance(&self, value: &str) -> Result<f64> {
        self.mechanism.variance(value)
    }
}
