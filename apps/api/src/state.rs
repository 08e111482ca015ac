use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::model::{load_salary_model, SalaryModel};

/// Shown in place of the form when the artifacts could not be loaded.
pub const NOT_READY_GUIDANCE: &str = "Model not found! Please run the training notebook \
    (notebooks/salary_prediction_analysis.ipynb) first to train the model and export \
    saved_models/salary_model.json and saved_models/model_columns.json.";

/// Outcome of the one-time artifact load. Never changes after startup.
#[derive(Debug)]
pub enum ModelStatus {
    Ready(SalaryModel),
    Unready { cause: String },
}

impl ModelStatus {
    /// Loads both artifacts named in `config`. Failure is logged, not propagated.
    pub fn load(config: &Config) -> Self {
        info!(
            "Loading model from {} and columns from {}",
            config.model_path.display(),
            config.columns_path.display()
        );
        match load_salary_model(&config.model_path, &config.columns_path) {
            Ok(model) => ModelStatus::Ready(model),
            Err(e) => {
                warn!("Model unavailable, serving guidance only: {e}");
                ModelStatus::Unready {
                    cause: e.to_string(),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelStatus::Ready(_))
    }

    /// Why loading failed, if it did.
    pub fn unready_cause(&self) -> Option<&str> {
        match self {
            ModelStatus::Ready(_) => None,
            ModelStatus::Unready { cause } => Some(cause),
        }
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once in `main`; read-only for the life of the process.
    pub model: Arc<ModelStatus>,
}

impl AppState {
    pub fn new(config: Config, model: ModelStatus) -> Self {
        Self {
            config,
            model: Arc::new(model),
        }
    }

    /// The loaded model, or `NotReady` carrying the user guidance.
    pub fn ready_model(&self) -> Result<&SalaryModel, AppError> {
        match self.model.as_ref() {
            ModelStatus::Ready(model) => Ok(model),
            ModelStatus::Unready { .. } => Err(AppError::NotReady(NOT_READY_GUIDANCE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_artifacts_leave_state_unready() {
        let config = Config {
            model_path: PathBuf::from("/nonexistent/salary_model.json"),
            columns_path: PathBuf::from("/nonexistent/model_columns.json"),
            ..Config::default()
        };

        let status = ModelStatus::load(&config);
        assert!(!status.is_ready());
        assert!(status.unready_cause().unwrap().contains("salary_model.json"));

        let state = AppState::new(config, status);
        let err = state.ready_model().unwrap_err();
        assert!(matches!(err, AppError::NotReady(ref m) if m.contains("notebook")));
    }
}
