//! Translation of a hierarchy of values into utilities.
//!
//! Every leaf is located by the indices leading to it from the root. The utility
//! between two leaves is the height of the hierarchy less the length of the
//! common prefix of their locators, so siblings are at distance 1 and leaves
//! that only share the root are at distance equal to the height.
use std::collections::HashSet;

use crate::error::{MechanismError, Result};

/// A node of a hierarchy: a value, or a group of further nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(String),
    Group(Vec<Node>),
}

impl Node {
    pub fn leaf<S: Into<String>>(value: S) -> Node {
        Node::Leaf(value.into())
    }

    pub fn group(children: Vec<Node>) -> Node {
        Node::Group(children)
    }

    /// A single level of leaves.
    pub fn flat<I, S>(values: I) -> Vec<Node>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values.into_iter().map(Node::leaf).collect()
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Node {
        Node::leaf(value)
    }
}

/// Leaves paired with their locators, in walk order.
pub type Locators = Vec<(String, Vec<usize>)>;

/// Locate every leaf of `root`.
/// ## Errors
/// Returns an error if leaves are at different depths or a leaf appears twice.
pub fn build_locators(root: &[Node]) -> Result<Locators> {
    let mut locators = Vec::new();
    let mut path = Vec::new();
    walk(root, &mut path, &mut locators);

    let mut seen = HashSet::new();
    for (value, _) in locators.iter() {
        if !seen.insert(value.as_str()) {
            return Err(MechanismError::DuplicateLeaf(value.clone()));
        }
    }

    check_height(&locators)?;
    Ok(locators)
}

fn walk(nodes: &[Node], path: &mut Vec<usize>, locators: &mut Locators) {
    for (i, node) in nodes.iter().enumerate() {
        path.push(i);
        match node {
            Node::Leaf(value) => locators.push((value.clone(), path.clone())),
            Node::Group(children) => walk(children, path, locators),
        }
        path.pop();
    }
}

/// All locators must have the length of the first one.
fn check_height(locators: &[(String, Vec<usize>)]) -> Result<()> {
    let height = match locators.first() {
        Some((_, locator)) => locator.len(),
        None => return Ok(()),
    };
    for (_, locator) in locators.iter() {
        if locator.len() != height {
            return Err(MechanismError::UnevenHierarchy {
                locator: locator.clone(),
                depth: locator.len(),
                height,
            });
        }
    }
    Ok(())
}

/// The utility list implied by the locators. Complete over the leaves.
pub fn derive_utility_list(locators: &[(String, Vec<usize>)]) -> Vec<(String, String, f64)> {
    let height = locators.first().map(|(_, locator)| locator.len()).unwrap_or(0);
    let mut utility_list = Vec::new();

    for (root_value, root_locator) in locators.iter() {
        for (target_value, target_locator) in locators.iter() {
            if root_value >= target_value {
                continue;
            }
            let common = root_locator
                .iter()
                .zip(target_locator.iter())
                .take_while(|(a, b)| a == b)
                .count();
            utility_list.push((root_value.clone(), target_value.clone(), (height - common) as f64));
        }
    }
    log::trace!("hierarchy of height {} over {} leaves", height, locators.len());
    utility_list
}
