//! Random-forest regressor: the mean of independent regression trees.
//!
//! Trees are stored as flat node arrays with node 0 as the root. A sample
//! goes left when `x[feature] <= threshold`, matching how scikit-learn
//! exports its thresholds.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{check_width, ModelError, Regressor};

#[derive(Debug, Error, PartialEq)]
pub enum ForestError {
    #[error("forest has no trees")]
    NoTrees,
    #[error("tree {tree} has no nodes")]
    EmptyTree { tree: usize },
    #[error("tree {tree} node {node}: child {child} is out of range or not after its parent")]
    BadChild {
        tree: usize,
        node: usize,
        child: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: u32,
        threshold: f64,
        left: u32,
        right: u32,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Walks from the root to a leaf. Assumes `validate` has passed.
    fn predict(&self, features: &[f64]) -> f64 {
        let mut idx = 0usize;
        loop {
            match self.nodes[idx] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[feature as usize] <= threshold {
                        left as usize
                    } else {
                        right as usize
                    };
                }
            }
        }
    }

    fn max_feature(&self) -> Option<u32> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Split { feature, .. } => Some(*feature),
                Node::Leaf { .. } => None,
            })
            .max()
    }

    fn validate(&self, tree: usize) -> Result<(), ForestError> {
        if self.nodes.is_empty() {
            return Err(ForestError::EmptyTree { tree });
        }
        for (node, n) in self.nodes.iter().enumerate() {
            if let Node::Split { left, right, .. } = *n {
                for child in [left, right] {
                    // children strictly after the parent keeps every walk finite
                    let c = child as usize;
                    if c <= node || c >= self.nodes.len() {
                        return Err(ForestError::BadChild { tree, node, child });
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawForest")]
pub struct RandomForest {
    trees: Vec<Tree>,
    n_features: usize,
}

/// Forest as written to disk, before validation.
#[derive(Deserialize)]
pub struct RawForest {
    pub trees: Vec<Tree>,
}

impl RandomForest {
    pub fn new(trees: Vec<Tree>) -> Result<Self, ForestError> {
        if trees.is_empty() {
            return Err(ForestError::NoTrees);
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate(i)?;
        }
        let n_features = trees
            .iter()
            .filter_map(Tree::max_feature)
            .max()
            .map_or(0, |f| f as usize + 1);

        Ok(Self { trees, n_features })
    }
}

impl TryFrom<RawForest> for RandomForest {
    type Error = ForestError;

    fn try_from(raw: RawForest) -> Result<Self, Self::Error> {
        Self::new(raw.trees)
    }
}

impl Regressor for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        check_width(self.n_features, features)?;
        let sum: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        Ok(sum / self.trees.len() as f64)
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}
