//! Loading of the persisted model and schema artifacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use crate::features::ModelSchema;
use crate::model::{ModelError, Regressor, RegressorArtifact};

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The trained regressor paired with the column order it was trained on.
pub struct SalaryModel {
    regressor: Box<dyn Regressor>,
    schema: ModelSchema,
}

impl SalaryModel {
    pub fn new(regressor: Box<dyn Regressor>, schema: ModelSchema) -> Self {
        Self { regressor, schema }
    }

    pub fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    pub fn kind(&self) -> &'static str {
        self.regressor.kind()
    }

    /// False when every prediction would fail with a width mismatch.
    pub fn schema_compatible(&self) -> bool {
        self.regressor.accepts_width(self.schema.len())
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        self.regressor.predict(features)
    }
}

impl std::fmt::Debug for SalaryModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalaryModel")
            .field("kind", &self.regressor.kind())
            .field("n_features", &self.regressor.n_features())
            .field("schema", &self.schema)
            .finish()
    }
}

/// Reads both artifacts. Either failing leaves the service without a model.
pub fn load_salary_model(
    model_path: &Path,
    columns_path: &Path,
) -> Result<SalaryModel, ArtifactError> {
    let artifact: RegressorArtifact = read_json(model_path)?;
    let schema: ModelSchema = read_json(columns_path)?;
    let regressor = artifact.into_regressor();

    info!(
        "Loaded {} model ({} features) with {} schema columns",
        regressor.kind(),
        regressor.n_features(),
        schema.len()
    );
    let model = SalaryModel::new(regressor, schema);
    if !model.schema_compatible() {
        // Predictions will fail with a schema mismatch; keep serving the UI.
        warn!(
            "{} model ({} features) cannot score the {} schema columns",
            model.kind(),
            model.regressor.n_features(),
            model.schema.len()
        );
    }

    Ok(model)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ArtifactError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
