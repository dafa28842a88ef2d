/// Privacy parameters and their validation
pub mod params;
/// Sources of randomness
pub mod randomness;
/// Precision settings and floating point comparisons
pub mod arithmetic;
