//! Linear regressor: `intercept + Σ coefficient × feature`.

use serde::Deserialize;

use crate::model::{ModelError, Regressor};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Regressor for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn accepts_width(&self, width: usize) -> bool {
        // one coefficient per schema column
        width == self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if !self.accepts_width(features.len()) {
            return Err(ModelError::FeatureWidth {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}
