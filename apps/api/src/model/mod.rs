//! Model adapter: a pre-trained regressor restored from disk.
//!
//! `AppState` holds the loaded model behind `Arc`; handlers only ever read it.

pub mod artifacts;
pub mod forest;
pub mod linear;

use serde::Deserialize;
use thiserror::Error;

pub use artifacts::{load_salary_model, ArtifactError, SalaryModel};
pub use forest::RandomForest;
pub use linear::LinearModel;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("model expects {expected} features, got {actual}")]
    FeatureWidth { expected: usize, actual: usize },
}

/// A fitted regressor. Implement this to add a new model family without
/// touching the pipeline or handlers.
pub trait Regressor: Send + Sync {
    /// Minimum input width this model reads.
    fn n_features(&self) -> usize;

    /// Whether `predict` accepts vectors of exactly `width` values.
    fn accepts_width(&self, width: usize) -> bool {
        width >= self.n_features()
    }

    /// Point prediction for one aligned feature vector.
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError>;

    /// Short family name for logs ("random_forest", "linear").
    fn kind(&self) -> &'static str;
}

pub(crate) fn check_width(expected: usize, features: &[f64]) -> Result<(), ModelError> {
    if features.len() < expected {
        return Err(ModelError::FeatureWidth {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

/// On-disk regressor artifact, tagged by model family.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressorArtifact {
    RandomForest(RandomForest),
    Linear(LinearModel),
}

impl RegressorArtifact {
    pub fn into_regressor(self) -> Box<dyn Regressor> {
        match self {
            RegressorArtifact::RandomForest(forest) => Box::new(forest),
            RegressorArtifact::Linear(linear) => Box::new(linear),
        }
    }
}
