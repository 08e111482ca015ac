use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MODEL_PATH: &str = "saved_models/salary_model.json";
const DEFAULT_COLUMNS_PATH: &str = "saved_models/model_columns.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only an unparsable `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Persisted regressor exported by the training notebook.
    pub model_path: PathBuf,
    /// Persisted training-time column list (the model schema).
    pub columns_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process env.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            model_path: path_or(var("MODEL_PATH"), DEFAULT_MODEL_PATH),
            columns_path: path_or(var("COLUMNS_PATH"), DEFAULT_COLUMNS_PATH),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            columns_path: PathBuf::from(DEFAULT_COLUMNS_PATH),
        }
    }
}

fn path_or(value: Option<String>, default: &str) -> PathBuf {
    value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}
