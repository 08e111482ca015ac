// Prediction pipeline: engineer → align → regress, plus result formatting.
// Runs synchronously on the calling task; the model is shared read-only.

pub mod currency;

use chrono::Utc;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::features::engineer::indicator_columns;
use crate::features::{align_to_schema, engineer_features, EngineeredFeatures};
use crate::model::SalaryModel;
use crate::models::employee::EmployeeRecord;
use crate::models::prediction::Prediction;

pub use currency::format_currency;

/// Runs the full pipeline for one record. The record must already be validated.
pub fn predict_salary(
    record: &EmployeeRecord,
    model: &SalaryModel,
) -> Result<Prediction, AppError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("predict", %request_id);
    let _guard = span.enter();

    let EngineeredFeatures {
        job_level,
        experience_x_level,
        columns,
    } = engineer_features(record);

    let aligned = align_to_schema(&columns, model.schema());
    if !aligned.filled.is_empty() {
        debug!("Zero-filled schema columns: {:?}", aligned.filled);
    }
    let indicators = indicator_columns();
    for col in &aligned.dropped {
        if indicators.contains(col) {
            // Category unseen at training time: the model will treat it as the baseline.
            warn!("Encoded column '{col}' is not in the model schema and was dropped");
        } else {
            debug!("Dropped column not in schema: {col}");
        }
    }

    let salary = model.predict(&aligned.values)?;
    let formatted = format_currency(salary);
    info!(
        job_level,
        experience_x_level,
        "Predicted {formatted} with {} model",
        model.kind()
    );

    Ok(Prediction {
        request_id,
        salary,
        formatted,
        job_level,
        experience_x_level,
        predicted_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ModelSchema;
    use crate::model::{LinearModel, ModelError, Regressor};
    use crate::models::employee::{Education, Gender};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const TRAINED_COLUMNS: [&str; 7] = [
        "Age",
        "Experience",
        "Job_Level",
        "Experience_x_Level",
        "Gender_Male",
        "Education Level_Master's",
        "Education Level_PhD",
    ];

    fn schema() -> ModelSchema {
        ModelSchema::new(TRAINED_COLUMNS.iter().map(|c| c.to_string()).collect()).unwrap()
    }

    fn engineer_record() -> EmployeeRecord {
        EmployeeRecord {
            age: 30,
            gender: Gender::Male,
            education: Education::Bachelors,
            job_title: "Software Engineer".to_string(),
            experience: 5,
        }
    }

    /// Records every vector it is asked to score.
    struct RecordingRegressor {
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<Vec<f64>>>>,
        output: f64,
    }

    impl Regressor for RecordingRegressor {
        fn n_features(&self) -> usize {
            TRAINED_COLUMNS.len()
        }

        fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(features.to_vec());
            Ok(self.output)
        }

        fn kind(&self) -> &'static str {
            "recording"
        }
    }

    #[test]
    fn test_software_engineer_end_to_end() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let model = SalaryModel::new(
            Box::new(RecordingRegressor {
                calls: calls.clone(),
                seen: seen.clone(),
                output: 85_123.456,
            }),
            schema(),
        );

        let prediction = predict_salary(&engineer_record(), &model).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            seen.lock().unwrap()[0],
            vec![30.0, 5.0, 2.0, 10.0, 1.0, 0.0, 0.0]
        );
        assert_eq!(prediction.job_level, 2);
        assert_eq!(prediction.experience_x_level, 10);
        assert_eq!(prediction.formatted, "$85,123.46");
    }

    #[test]
    fn test_identical_input_gives_identical_output() {
        let model = SalaryModel::new(
            Box::new(LinearModel {
                intercept: 25_000.0,
                coefficients: vec![500.0, 1_200.0, 3_000.0, 250.0, 1_500.0, 6_000.0, 12_000.0],
            }),
            schema(),
        );

        let first = predict_salary(&engineer_record(), &model).unwrap();
        let second = predict_salary(&engineer_record(), &model).unwrap();
        assert_eq!(first.salary, second.salary);
        assert_eq!(first.formatted, second.formatted);
        assert_ne!(first.request_id, second.request_id);
        // 25000 + 15000 + 6000 + 6000 + 2500 + 1500
        assert_eq!(first.salary, 56_000.0);
    }

    #[test]
    fn test_schema_without_indicator_columns_still_predicts() {
        let narrow = ModelSchema::new(vec!["Age".into(), "Experience".into()]).unwrap();
        let model = SalaryModel::new(
            Box::new(LinearModel {
                intercept: 0.0,
                coefficients: vec![1_000.0, 2_000.0],
            }),
            narrow,
        );

        let prediction = predict_salary(&engineer_record(), &model).unwrap();
        assert_eq!(prediction.salary, 40_000.0);
    }

    #[test]
    fn test_model_wider_than_schema_is_schema_mismatch() {
        let narrow = ModelSchema::new(vec!["Age".into()]).unwrap();
        let model = SalaryModel::new(
            Box::new(LinearModel {
                intercept: 0.0,
                coefficients: vec![1.0, 1.0, 1.0],
            }),
            narrow,
        );

        let err = predict_salary(&engineer_record(), &model).unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch(_)));
    }
}
