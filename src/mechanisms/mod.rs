/// The mechanism trait
pub mod base;
/// Utility tables
pub mod utility;
/// Hierarchy to utility translation
pub mod hierarchy;
/// Weights and normalising constants
pub mod normalising;
/// The exponential mechanism over categorical values
pub mod exponential;
/// The exponential mechanism over a hierarchy of values
pub mod hierarchical;
