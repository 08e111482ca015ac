use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const AGE_RANGE: RangeInclusive<u32> = 18..=70;
pub const EXPERIENCE_RANGE: RangeInclusive<u32> = 0..=40;

pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_EXPERIENCE: u32 = 5;

/// Example titles offered by the input form.
pub const JOB_TITLE_OPTIONS: [&str; 15] = [
    "Software Engineer",
    "Data Analyst",
    "Senior Manager",
    "Sales Associate",
    "Director",
    "Marketing Analyst",
    "Product Manager",
    "Financial Analyst",
    "Human Resources Manager",
    "Operations Manager",
    "Accountant",
    "Data Scientist",
    "Marketing Manager",
    "Junior Developer",
    "Senior Consultant",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Form order: first entry is the form default.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
}

impl Education {
    pub const ALL: [Education; 3] = [Education::Bachelors, Education::Masters, Education::Phd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Education::Bachelors => "Bachelor's",
            Education::Masters => "Master's",
            Education::Phd => "PhD",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == label)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One employee as entered by the user. Built per request, dropped after use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub age: u32,
    pub gender: Gender,
    pub education: Education,
    pub job_title: String,
    pub experience: u32,
}

impl EmployeeRecord {
    /// Checks the numeric bounds enforced by the input form.
    pub fn validate(&self) -> Result<(), AppError> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(AppError::Validation(format!(
                "age must be between {} and {}, got {}",
                AGE_RANGE.start(),
                AGE_RANGE.end(),
                self.age
            )));
        }
        if !EXPERIENCE_RANGE.contains(&self.experience) {
            return Err(AppError::Validation(format!(
                "experience must be between {} and {} years, got {}",
                EXPERIENCE_RANGE.start(),
                EXPERIENCE_RANGE.end(),
                self.experience
            )));
        }
        Ok(())
    }
}

/// True when `title` is one of the listed form options.
pub fn is_listed_job_title(title: &str) -> bool {
    JOB_TITLE_OPTIONS.contains(&title)
}
