//! Mechanism configuration read from JSON.
//!
//! ```json
//! { "epsilon": 1.0, "utility_list": [["A", "B", 1], ["A", "C", 2], ["B", "C", 2]] }
//! { "epsilon": "inf", "hierarchy": [["A"], ["B"], ["C"], ["D", "E"]] }
//! ```
use rug::rand::ThreadRandGen;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{MechanismError, Result};
use crate::mechanisms::base::DPMechanism;
use crate::mechanisms::exponential::Exponential;
use crate::mechanisms::hierarchical::ExponentialHierarchical;
use crate::mechanisms::hierarchy::Node;
use crate::utilities::params::PrivacyParams;

/// Epsilon as a number, or as `"inf"`/`"infinity"` since JSON has no infinity.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EpsilonRepr {
    Number(f64),
    Text(String),
}

impl EpsilonRepr {
    fn value(&self) -> Result<f64> {
        match self {
            EpsilonRepr::Number(epsilon) => Ok(*epsilon),
            EpsilonRepr::Text(text) => match text.to_ascii_lowercase().as_str() {
                "inf" | "infinity" => Ok(f64::INFINITY),
                _ => Err(MechanismError::Type(format!(
                    "Epsilon must be a number or \"inf\", got {:?}",
                    text
                ))),
            },
        }
    }
}

/// The serialised form of a mechanism.
#[derive(Debug, Clone, Deserialize)]
pub struct MechanismConfig {
    epsilon: EpsilonRepr,
    #[serde(default)]
    delta: f64,
    #[serde(default)]
    utility_list: Option<Value>,
    #[serde(default)]
    hierarchy: Option<Value>,
}

impl MechanismConfig {
    pub fn from_json(json: &str) -> Result<MechanismConfig> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the mechanism the configuration describes.
    /// ## Errors
    /// Returns a config error unless exactly one of `utility_list` and
    /// `hierarchy` is given, a type error for malformed entries, and any error
    /// of the mechanism constructors.
    pub fn build(&self) -> Result<ConfiguredMechanism> {
        let epsilon = self.epsilon.value()?;
        match (&self.utility_list, &self.hierarchy) {
            (Some(list), None) => {
                let utility_list = utility_list_from_json(list)?;
                Ok(ConfiguredMechanism::Exponential(Exponential::with_privacy(
                    epsilon,
                    self.delta,
                    utility_list,
                )?))
            }
            (None, Some(hierarchy)) => {
                let hierarchy = hierarchy_from_json(hierarchy)?;
                Ok(ConfiguredMechanism::Hierarchical(ExponentialHierarchical::with_privacy(
                    epsilon,
                    self.delta,
                    hierarchy,
                )?))
            }
            (Some(_), Some(_)) => Err(MechanismError::Config(
                "Only one of utility_list and hierarchy may be given".to_string(),
            )),
            (None, None) => Err(MechanismError::Config(
                "One of utility_list or hierarchy must be given".to_string(),
            )),
        }
    }
}

/// Read `[value1, value2, utility]` triples.
pub fn utility_list_from_json(list: &Value) -> Result<Vec<(String, String, f64)>> {
    let entries = list
        .as_array()
        .ok_or_else(|| MechanismError::Type("Utility must be given in a list".to_string()))?;

    entries
        .iter()
        .map(|entry| -> Result<(String, String, f64)> {
            match entry.as_array().map(Vec::as_slice) {
                Some([value1, value2, utility]) => {
                    let (value1, value2) = match (value1.as_str(), value2.as_str()) {
                        (Some(value1), Some(value2)) => (value1, value2),
                        _ => return Err(MechanismError::Type("Utility keys must be strings".to_string())),
                    };
                    let utility = utility
                        .as_f64()
                        .ok_or_else(|| MechanismError::Type("Utility value must be a number".to_string()))?;
                    Ok((value1.to_string(), value2.to_string(), utility))
                }
                _ => Err(MechanismError::Type(format!(
                    "Utility entries must be [value1, value2, utility], got {}",
                    entry
                ))),
            }
        })
        .collect()
}

/// Read a hierarchy of nested arrays of strings.
pub fn hierarchy_from_json(hierarchy: &Value) -> Result<Vec<Node>> {
    match hierarchy {
        Value::Array(children) => nodes_from_json(children, &mut Vec::new()),
        _ => Err(MechanismError::Type("Hierarchy must be a list".to_string())),
    }
}

fn nodes_from_json(children: &[Value], path: &mut Vec<usize>) -> Result<Vec<Node>> {
    let mut nodes = Vec::with_capacity(children.len());
    for (i, child) in children.iter().enumerate() {
        path.push(i);
        let node = match child {
            Value::String(value) => Node::Leaf(value.clone()),
            Value::Array(grandchildren) => Node::Group(nodes_from_json(grandchildren, path)?),
            _ => {
                return Err(MechanismError::Type(format!(
                    "All leaves of the hierarchy must be a string (see node {:?})",
                    path
                )))
            }
        };
        path.pop();
        nodes.push(node);
    }
    Ok(nodes)
}

/// A mechanism built from a [`MechanismConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredMechanism {
    Exponential(Exponential),
    Hierarchical(ExponentialHierarchical),
}

impl ConfiguredMechanism {
    /// The mechanism over the domain, whichever way it was specified.
    pub fn exponential(&self) -> &Exponential {
        match self {
            ConfiguredMechanism::Exponential(mechanism) => mechanism,
            ConfiguredMechanism::Hierarchical(mechanism) => mechanism.mechanism(),
        }
    }

    /// Randomise a JSON value, which must be a string of the domain.
    pub fn randomise_value<R: ThreadRandGen + ?Sized>(&self, value: &Value, rng: &mut R) -> Result<&str> {
        let value = value
            .as_str()
            .ok_or_else(|| MechanismError::Type("Value to be randomised must be a string".to_string()))?;
        self.randomise(value, rng)
    }
}

impl DPMechanism for ConfiguredMechanism {
    fn params(&self) -> &PrivacyParams {
        self.exponential().params()
    }

    fn randomise<'a, R: ThreadRandGen + ?Sized>(&'a self, value: &str, rng: &mut R) -> Result<&'a str> {
        match self {
            ConfiguredMechanism::Exponential(mechanism) => mechanism.randomise(value, rng),
            ConfiguredMechanism::Hierarchical(mechanism) => mechanism.randomise(value, rng),
        }
    }

    fn bias(&self, value: &str) -> Result<f64> {
        self.exponential().bias(value)
    }

    fn variance(&self, value: &str) -> Result<f64> {
        self.exponential().variance(value)
    }
}
