use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A single salary estimate. Returned to the caller, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub request_id: Uuid,
    pub salary: f64,
    /// `$85,123.46`
    pub formatted: String,
    pub job_level: u8,
    pub experience_x_level: u32,
    pub predicted_at: DateTime<Utc>,
}
