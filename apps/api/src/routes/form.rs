//! HTML form handlers: the page itself and its submission.

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::employee::{is_listed_job_title, Education, EmployeeRecord, Gender};
use crate::prediction::predict_salary;
use crate::state::{AppState, NOT_READY_GUIDANCE};
use crate::ui::{render_form_page, render_unready_page, FormValues, Outcome};

/// Urlencoded form body. Missing fields arrive as empty strings; these and
/// undecodable bodies are reported through the page rather than as a bare 422.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PredictForm {
    pub age: String,
    pub education: String,
    pub job_title: String,
    pub experience: String,
    pub gender: String,
}

impl PredictForm {
    pub fn to_record(&self) -> Result<EmployeeRecord, AppError> {
        let age = parse_whole_number("Age", &self.age)?;
        let experience = parse_whole_number("Years of Experience", &self.experience)?;
        let education = Education::from_label(&self.education).ok_or_else(|| {
            AppError::Validation(format!("Unknown education level '{}'", self.education))
        })?;
        let gender = Gender::from_label(&self.gender)
            .ok_or_else(|| AppError::Validation(format!("Unknown gender '{}'", self.gender)))?;
        if !is_listed_job_title(&self.job_title) {
            return Err(AppError::Validation(format!(
                "Job title '{}' is not one of the listed options",
                self.job_title
            )));
        }

        let record = EmployeeRecord {
            age,
            gender,
            education,
            job_title: self.job_title.clone(),
            experience,
        };
        record.validate()?;
        Ok(record)
    }

    fn values(&self) -> FormValues {
        FormValues {
            age: self.age.clone(),
            education: self.education.clone(),
            job_title: self.job_title.clone(),
            experience: self.experience.clone(),
            gender: self.gender.clone(),
        }
    }
}

fn parse_whole_number(field: &str, raw: &str) -> Result<u32, AppError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AppError::Validation(format!("{field} must be a whole number, got '{raw}'")))
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    if !state.model.is_ready() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Html(render_unready_page(NOT_READY_GUIDANCE)),
        );
    }
    (
        StatusCode::OK,
        Html(render_form_page(&FormValues::default(), Outcome::Empty)),
    )
}

/// POST /predict
pub async fn handle_form_predict(
    State(state): State<AppState>,
    payload: Result<Form<PredictForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let model = match state.ready_model() {
        Ok(model) => model,
        Err(e) => return (e.status(), Html(render_unready_page(&e.public_message()))),
    };

    let form = match payload {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let e = AppError::Validation(rejection.body_text());
            let message = e.public_message();
            return (
                e.status(),
                Html(render_form_page(
                    &FormValues::default(),
                    Outcome::Invalid { message: &message },
                )),
            );
        }
    };

    let values = form.values();
    let outcome = form
        .to_record()
        .and_then(|record| predict_salary(&record, model));

    match outcome {
        Ok(prediction) => (
            StatusCode::OK,
            Html(render_form_page(
                &values,
                Outcome::Predicted {
                    formatted: &prediction.formatted,
                },
            )),
        ),
        Err(e) => {
            if !matches!(e, AppError::Validation(_)) {
                tracing::error!("Form prediction failed: {e}");
            }
            let message = e.public_message();
            (
                e.status(),
                Html(render_form_page(&values, Outcome::Invalid { message: &message })),
            )
        }
    }
}
