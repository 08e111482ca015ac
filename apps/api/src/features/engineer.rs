//! Feature engineering for a single employee record.
//!
//! Produces the same named columns as the training notebook. Categorical
//! fields are one-hot encoded against an explicit baseline per field
//! (`Female`, `Bachelor's`); the baseline gets no column and is absorbed
//! into the model's intercept.

use std::collections::BTreeMap;

use crate::features::job_level::assign_job_level;
use crate::models::employee::{Education, EmployeeRecord, Gender};

pub const COL_AGE: &str = "Age";
pub const COL_EXPERIENCE: &str = "Experience";
pub const COL_JOB_LEVEL: &str = "Job_Level";
pub const COL_EXPERIENCE_X_LEVEL: &str = "Experience_x_Level";

const GENDER_PREFIX: &str = "Gender";
const EDUCATION_PREFIX: &str = "Education Level";

pub const GENDER_BASELINE: Gender = Gender::Female;
pub const EDUCATION_BASELINE: Education = Education::Bachelors;

/// Column name → value for one engineered row. Only the indicator of the
/// category actually present is emitted; the aligner fills the rest.
pub type FeatureRow = BTreeMap<String, f64>;

/// Indicator column for a gender value, or `None` for the baseline.
pub fn gender_column(gender: Gender) -> Option<String> {
    (gender != GENDER_BASELINE).then(|| one_hot_name(GENDER_PREFIX, gender.as_str()))
}

/// Indicator column for an education value, or `None` for the baseline.
pub fn education_column(education: Education) -> Option<String> {
    (education != EDUCATION_BASELINE).then(|| one_hot_name(EDUCATION_PREFIX, education.as_str()))
}

/// Every indicator column the encoder can emit, in encoding order.
pub fn indicator_columns() -> Vec<String> {
    let genders = Gender::ALL.into_iter().filter_map(gender_column);
    let educations = Education::ALL.into_iter().filter_map(education_column);
    genders.chain(educations).collect()
}

fn one_hot_name(prefix: &str, category: &str) -> String {
    format!("{prefix}_{category}")
}

/// Engineered row plus the derived values, kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineeredFeatures {
    pub job_level: u8,
    pub experience_x_level: u32,
    pub columns: FeatureRow,
}

/// Runs the engineering steps in order: job level, the experience × level
/// interaction, dropping the title, then one-hot encoding.
pub fn engineer_features(record: &EmployeeRecord) -> EngineeredFeatures {
    let job_level = assign_job_level(&record.job_title);
    let experience_x_level = record.experience.saturating_mul(u32::from(job_level));

    let mut row = FeatureRow::new();
    row.insert(COL_AGE.to_string(), f64::from(record.age));
    row.insert(COL_EXPERIENCE.to_string(), f64::from(record.experience));
    row.insert(COL_JOB_LEVEL.to_string(), f64::from(job_level));
    row.insert(
        COL_EXPERIENCE_X_LEVEL.to_string(),
        f64::from(experience_x_level),
    );

    if let Some(col) = gender_column(record.gender) {
        row.insert(col, 1.0);
    }
    if let Some(col) = education_column(record.education) {
        row.insert(col, 1.0);
    }

    EngineeredFeatures {
        job_level,
        experience_x_level,
        columns: row,
    }
}
