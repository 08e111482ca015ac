//! JSON prediction API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::employee::{
    Education, EmployeeRecord, Gender, AGE_RANGE, DEFAULT_AGE, DEFAULT_EXPERIENCE,
    EXPERIENCE_RANGE, JOB_TITLE_OPTIONS,
};
use crate::models::prediction::Prediction;
use crate::prediction::predict_salary;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub job_titles: Vec<&'static str>,
    pub education_levels: Vec<Education>,
    pub genders: Vec<Gender>,
    pub age: Bounds,
    pub experience: Bounds,
}

/// POST /api/v1/predict
///
/// Any job title is accepted here; the level classifier handles free text.
pub async fn handle_predict(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> Result<Json<Prediction>, AppError> {
    let model = state.ready_model()?;
    let Json(record) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    record.validate()?;

    let prediction = predict_salary(&record, model)?;
    Ok(Json(prediction))
}

/// GET /api/v1/options
///
/// The enumerated input domain the form offers.
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        job_titles: JOB_TITLE_OPTIONS.to_vec(),
        education_levels: Education::ALL.to_vec(),
        genders: Gender::ALL.to_vec(),
        age: Bounds {
            min: *AGE_RANGE.start(),
            max: *AGE_RANGE.end(),
            default: DEFAULT_AGE,
        },
        experience: Bounds {
            min: *EXPERIENCE_RANGE.start(),
            max: *EXPERIENCE_RANGE.end(),
            default: DEFAULT_EXPERIENCE,
        },
    })
}
