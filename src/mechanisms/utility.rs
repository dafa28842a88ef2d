//! Pairwise utility tables over a finite domain of strings.
use std::collections::HashMap;

use crate::error::{MechanismError, Result};

/// Canonical key of an unordered pair: members in lexicographic order.
fn pair_key(value1: &str, value2: &str) -> (String, String) {
    if value1 <= value2 {
        (value1.to_string(), value2.to_string())
    } else {
        (value2.to_string(), value1.to_string())
    }
}

/// Validated utility values, keyed by unordered pair.
///
/// The domain is every value seen in the utility list, in first-seen order.
/// Utilities between a value and itself are zero and never stored.
#[derive(Debug, Clone, Default)]
pub struct UtilityModel {
    values: HashMap<(String, String), f64>,
    /// Insertion order of `values`
    keys: Vec<(String, String)>,
    domain: Vec<String>,
    sensitivity: f64,
}

impl UtilityModel {
    /// Build a utility model from `(value1, value2, utility)` triples.
    /// ## Errors
    /// Returns an error if a utility is negative or not a finite number.
    pub fn build<I, A, B>(utility_list: I) -> Result<UtilityModel>
    where
        I: IntoIterator<Item = (A, B, f64)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut model = UtilityModel::default();
        for (value1, value2, utility) in utility_list {
            model.insert(value1.as_ref(), value2.as_ref(), utility)?;
        }
        Ok(model)
    }

    fn insert(&mut self, value1: &str, value2: &str, utility: f64) -> Result<()> {
        if !utility.is_finite() {
            return Err(MechanismError::NonFiniteUtility {
                value1: value1.to_string(),
                value2: value2.to_string(),
                utility,
            });
        }
        if utility < 0.0 {
            return Err(MechanismError::NegativeUtility {
                value1: value1.to_string(),
                value2: value2.to_string(),
                utility,
            });
        }

        self.sensitivity = self.sensitivity.max(utility);
        for &value in [value1, value2].iter() {
            if !self.domain.iter().any(|v| v.as_str() == value) {
                self.domain.push(value.to_string());
            }
        }

        if value1 == value2 {
            return Ok(());
        }
        let key = pair_key(value1, value2);
        if self.values.insert(key.clone(), utility).is_none() {
            self.keys.push(key);
        }
        Ok(())
    }

    /// Check that every pair of distinct domain values has a utility and
    /// produce the dense table.
    /// ## Errors
    /// Returns [`MechanismError::MissingUtilities`] listing every missing pair.
    pub fn check_complete(&self) -> Result<UtilityMatrix> {
        let n = self.domain.len();
        let mut matrix = UtilityMatrix {
            size: n,
            values: vec![0.0; n * n],
        };
        let mut missing = Vec::new();

        for (i, value1) in self.domain.iter().enumerate() {
            for (j, value2) in self.domain.iter().enumerate() {
                if value1 >= value2 {
                    continue;
                }
                match self.values.get(&(value1.clone(), value2.clone())) {
                    Some(&utility) => matrix.set(i, j, utility),
                    None => missing.push((value1.clone(), value2.clone())),
                }
            }
        }

        if !missing.is_empty() {
            return Err(MechanismError::MissingUtilities(missing));
        }
        Ok(matrix)
    }

    /// The stored utility between two values, `Some(0.0)` if they are equal.
    pub fn get(&self, value1: &str, value2: &str) -> Option<f64> {
        if value1 == value2 {
            return Some(0.0);
        }
        self.values.get(&pair_key(value1, value2)).copied()
    }

    /// The utility list as `(value1, value2, utility)` with each pair in
    /// canonical order.
    pub fn utility_list(&self) -> Vec<(String, String, f64)> {
        self.keys
            .iter()
            .map(|key| (key.0.clone(), key.1.clone(), self.values[key]))
            .collect()
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// The largest utility in the list.
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }
}

/// A complete, symmetric utility table indexed by domain position.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl UtilityMatrix {
    fn set(&mut self, i: usize, j: usize, utility: f64) {
        self.values[i * self.size + j] = utility;
        self.values[j * self.size + i] = utility;
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_domain_order() {
        let model = UtilityModel::build(vec![("C", "A", 1.0), ("B", "C", 2.0), ("A", "B", 3.0)]).unwrap();
        assert_eq!(model.domain(), &["C", "A", "B"]);
        assert_eq!(model.sensitivity(), 3.0);
        assert_eq!(model.get("A", "C"), Some(1.0));
        assert_eq!(model.get("C", "A"), Some(1.0));
        assert_eq!(model.get("B", "B"), Some(0.0));
        assert_eq!(model.get("A", "Z"), None);
    }

    #[test]
    fn test_utility_list_canonical() {
        let model = UtilityModel::build(vec![("C", "A", 1.0), ("B", "C", 2.0), ("A", "A", 5.0)]).unwrap();
        assert_eq!(
            model.utility_list(),
            vec![
                ("A".to_string(), "C".to_string(), 1.0),
                ("B".to_string(), "C".to_string(), 2.0),
            ]
        );
        // self pairs are not stored but still count toward sensitivity
        assert_eq!(model.sensitivity(), 5.0);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let model = UtilityModel::build(vec![("A", "B", 1.0), ("A", "C", 2.0), ("B", "A", 4.0)]).unwrap();
        let list = model.utility_list();
        assert_eq!(list[0], ("A".to_string(), "B".to_string(), 4.0));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_negative_utility() {
        match UtilityModel::build(vec![("A", "B", -1.0)]) {
            Err(MechanismError::NegativeUtility { utility, .. }) => assert_eq!(utility, -1.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_utility() {
        assert!(UtilityModel::build(vec![("A", "B", f64::NAN)]).is_err());
        assert!(UtilityModel::build(vec![("A", "B", f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_check_complete_lists_all_missing() {
        let model = UtilityModel::build(vec![("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)]).unwrap();
        match model.check_complete() {
            Err(MechanismError::MissingUtilities(missing)) => assert_eq!(
                missing,
                vec![
                    ("A".to_string(), "C".to_string()),
                    ("A".to_string(), "D".to_string()),
                    ("B".to_string(), "D".to_string()),
                ]
            ),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_matrix_symmetric() {
        let model = UtilityModel::build(vec![("B", "A", 1.0), ("A", "C", 2.0), ("C", "B", 3.0)]).unwrap();
        let matrix = model.check_complete().unwrap();
        assert_eq!(matrix.size(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        // domain is B, A, C
        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.get(1, 2), 2.0);
        assert_eq!(matrix.get(2, 0), 3.0);
    }

    #[test]
    fn test_empty() {
        let model = UtilityModel::build(Vec::<(&str, &str, f64)>::new()).unwrap();
        assert!(model.domain().is_empty());
        assert_eq!(model.check_complete().unwrap().size(), 0);
    }
}
