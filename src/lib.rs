//! # Categorical Exponential Mechanism
//! Implements the exponential mechanism of [McSherry and Talwar '07](https://doi.org/10.1109/FOCS.2007.66)
//! for releasing a categorical value under pure differential privacy, together
//! with a hierarchical variant that infers utilities from a grouping of values.
//!
//! **Status:** active development, reference implementation only. Not intended for uses other than research.
//! ## Background
//! Given a finite domain of values and a non-negative utility (a distance) for
//! every pair of distinct values, the mechanism releases an input `x` as `y`
//! with probability proportional to `exp(-epsilon * u(x, y) / (2 * sensitivity))`,
//! where the sensitivity is the largest utility. When every value has the same
//! normalising constant the factor of 2 can be dropped, and the mechanism does so.
//!
//! Weights, normalising constants and the cumulative sums used for sampling are
//! all computed with `rug::Float` at a fixed precision and in the order of the
//! domain, so the sampling walk always agrees with the constants it inverts.
//! ## Details
//! ### Example Usage
//! **Running the exponential mechanism**
//!
//! Release `"A"` with utilities given for every pair of values.
//! ```
//! use expmech::{DPMechanism, Exponential, GeneratorOpenSSL};
//!
//! let utility_list = vec![("A", "B", 1.0), ("A", "C", 2.0), ("B", "C", 2.0)];
//! let epsilon = 1.0;
//! let mech = Exponential::new(epsilon, utility_list).unwrap();
//! let mut rng = GeneratorOpenSSL {};
//! let sample = mech.randomise("A", &mut rng).unwrap();
//! ```
//! **Running the hierarchical mechanism**
//!
//! Values sharing a group are closer than values that only share the root.
//! ```
//! use expmech::{DPMechanism, ExponentialHierarchical, GeneratorOpenSSL, Node};
//!
//! let hierarchy = vec![
//!     Node::group(vec!["A".into()]),
//!     Node::group(vec!["B".into()]),
//!     Node::group(vec!["C".into()]),
//!     Node::group(vec!["D".into(), "E".into()]),
//! ];
//! let mech = ExponentialHierarchical::new(1.0, hierarchy).unwrap();
//! let sample = mech.randomise("E", &mut GeneratorOpenSSL {}).unwrap();
//! ```
//! **Reading a mechanism from JSON**
//! ```
//! use expmech::{DPMechanism, GeneratorOpenSSL, MechanismConfig};
//!
//! let config = MechanismConfig::from_json(r#"{"epsilon": 0.5, "hierarchy": ["A", "B", "C"]}"#).unwrap();
//! let mech = config.build().unwrap();
//! let sample = mech.randomise("B", &mut GeneratorOpenSSL {}).unwrap();
//! ```

/// Errors
pub mod error;
/// Differential Privacy Utilities
pub mod utilities;
/// Differential Privacy Mechanisms
pub mod mechanisms;
/// JSON configuration
pub mod config;

pub use config::{ConfiguredMechanism, MechanismConfig};
pub use error::{ErrorKind, MechanismError, Result};
pub use mechanisms::base::DPMechanism;
pub use mechanisms::exponential::Exponential;
pub use mechanisms::hierarchical::ExponentialHierarchical;
pub use mechanisms::hierarchy::Node;
pub use utilities::params::PrivacyParams;
pub use utilities::randomness::GeneratorOpenSSL;
