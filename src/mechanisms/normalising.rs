//! Weights and partition functions of the exponential mechanism.
use rug::Float;

use super::utility::UtilityMatrix;
use crate::utilities::arithmetic::{is_close, weight_float};

/// Balancing factor used when the per-value constants differ.
pub const UNBALANCED_FACTOR: f64 = 2.0;
/// Balancing factor used once every value has the same constant.
pub const BALANCED_FACTOR: f64 = 1.0;

/// Maps a utility to its unnormalised weight
/// `exp(-epsilon * utility / balancing_factor / sensitivity)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightFn {
    pub epsilon: f64,
    pub sensitivity: f64,
    pub balancing_factor: f64,
}

impl WeightFn {
    /// A zero utility always has weight 1, so an infinite epsilon or a zero
    /// sensitivity never produces `0 * inf` or `0 / 0`.
    pub fn weight(&self, utility: f64) -> Float {
        if utility == 0.0 || self.sensitivity == 0.0 {
            return weight_float(1.0);
        }
        let mut exponent = weight_float(utility);
        exponent *= self.epsilon;
        exponent /= self.balancing_factor;
        exponent /= self.sensitivity;
        (-exponent).exp()
    }
}

/// The partition function of every domain value, aligned with domain order.
#[derive(Debug, Clone)]
pub struct NormalisingConstants {
    values: Vec<Float>,
    weight_fn: WeightFn,
    balanced: bool,
}

impl NormalisingConstants {
    /// Compute the constants with balancing factor 2. If they all agree the
    /// domain is balanced and they are computed once more with factor 1.
    pub fn build(utilities: &UtilityMatrix, epsilon: f64, sensitivity: f64) -> NormalisingConstants {
        let unbalanced = WeightFn {
            epsilon,
            sensitivity,
            balancing_factor: UNBALANCED_FACTOR,
        };
        let values = Self::sums(utilities, &unbalanced);

        let balanced = match values.first() {
            Some(first) => {
                let first = first.to_f64();
                values.iter().all(|v| is_close(v.to_f64(), first))
            }
            None => true,
        };
        if !balanced {
            return NormalisingConstants {
                values,
                weight_fn: unbalanced,
                balanced,
            };
        }

        let weight_fn = WeightFn {
            balancing_factor: BALANCED_FACTOR,
            ..unbalanced
        };
        NormalisingConstants {
            values: Self::sums(utilities, &weight_fn),
            weight_fn,
            balanced,
        }
    }

    fn sums(utilities: &UtilityMatrix, weight_fn: &WeightFn) -> Vec<Float> {
        (0..utilities.size())
            .map(|i| {
                let mut sum = weight_float(0.0);
                for j in 0..utilities.size() {
                    sum += &weight_fn.weight(utilities.get(i, j));
                }
                sum
            })
            .collect()
    }

    /// The constant of the value at domain position `index`.
    pub fn get(&self, index: usize) -> &Float {
        &self.values[index]
    }

    /// The weight function the constants were computed with.
    pub fn weight_fn(&self) -> &WeightFn {
        &self.weight_fn
    }

    pub fn is_balanced(&self) -> bool {
        self.balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanisms::utility::UtilityModel;

    fn matrix(list: Vec<(&str, &str, f64)>) -> (UtilityMatrix, f64) {
        let model = UtilityModel::build(list).unwrap();
        (model.check_complete().unwrap(), model.sensitivity())
    }

    #[test]
    fn test_weight() {
        let weight_fn = WeightFn {
            epsilon: 1.0,
            sensitivity: 2.0,
            balancing_factor: 2.0,
        };
        assert_eq!(weight_fn.weight(0.0).to_f64(), 1.0);
        let w = weight_fn.weight(2.0).to_f64();
        assert!((w - (-0.5f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_weight_infinite_epsilon() {
        let weight_fn = WeightFn {
            epsilon: f64::INFINITY,
            sensitivity: 1.0,
            balancing_factor: 1.0,
        };
        assert_eq!(weight_fn.weight(1.0).to_f64(), 0.0);
        assert_eq!(weight_fn.weight(0.0).to_f64(), 1.0);
    }

    #[test]
    fn test_weight_zero_sensitivity() {
        let weight_fn = WeightFn {
            epsilon: 1.0,
            sensitivity: 0.0,
            balancing_factor: 2.0,
        };
        assert_eq!(weight_fn.weight(0.0).to_f64(), 1.0);
    }

    #[test]
    fn test_balanced() {
        let (utilities, sensitivity) = matrix(vec![("A", "B", 1.0), ("A", "C", 1.0), ("B", "C", 1.0)]);
        let constants = NormalisingConstants::build(&utilities, 1.0, sensitivity);
        assert!(constants.is_balanced());
        assert_eq!(constants.weight_fn().balancing_factor, BALANCED_FACTOR);
        let expected = 1.0 + 2.0 * (-1.0f64).exp();
        for i in 0..3 {
            assert!((constants.get(i).to_f64() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unbalanced() {
        let (utilities, sensitivity) = matrix(vec![("A", "B", 1.0), ("A", "C", 2.0), ("B", "C", 2.0)]);
        let constants = NormalisingConstants::build(&utilities, 1.0, sensitivity);
        assert!(!constants.is_balanced());
        assert_eq!(constants.weight_fn().balancing_factor, UNBALANCED_FACTOR);
        // A: 1 + e^{-1/4} + e^{-1/2}
        let expected = 1.0 + (-0.25f64).exp() + (-0.5f64).exp();
        assert!((constants.get(0).to_f64() - expected).abs() < 1e-12);
        // C: 1 + 2 e^{-1/2}
        let expected = 1.0 + 2.0 * (-0.5f64).exp();
        assert!((constants.get(2).to_f64() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_sensitivity_is_uniform() {
        let (utilities, sensitivity) = matrix(vec![("A", "B", 0.0), ("A", "C", 0.0), ("B", "C", 0.0)]);
        assert_eq!(sensitivity, 0.0);
        let constants = NormalisingConstants::build(&utilities, 1.0, sensitivity);
        assert!(constants.is_balanced());
        assert_eq!(constants.get(1).to_f64(), 3.0);
    }
}
