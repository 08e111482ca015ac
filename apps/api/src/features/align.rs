//! Schema alignment: reindexes an engineered row to the training-time
//! column order, filling absent columns with zero and dropping unknown ones.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::features::engineer::FeatureRow;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("model schema has no columns")]
    Empty,
    #[error("model schema lists column '{0}' more than once")]
    DuplicateColumn(String),
}

/// Ordered feature-column names the model was trained on. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct ModelSchema {
    columns: Vec<String>,
}

impl ModelSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut seen = HashSet::with_capacity(columns.len());
        for col in &columns {
            if !seen.insert(col.as_str()) {
                return Err(SchemaError::DuplicateColumn(col.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

impl TryFrom<Vec<String>> for ModelSchema {
    type Error = SchemaError;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

/// Output of alignment: the model-ready vector plus what had to be patched.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedFeatures {
    /// One value per schema column, in schema order.
    pub values: Vec<f64>,
    /// Schema columns absent from the row, filled with 0.
    pub filled: Vec<String>,
    /// Row columns unknown to the schema, discarded.
    pub dropped: Vec<String>,
}

pub fn align_to_schema(row: &FeatureRow, schema: &ModelSchema) -> AlignedFeatures {
    let mut filled = Vec::new();
    let values = schema
        .columns()
        .iter()
        .map(|col| match row.get(col) {
            Some(&v) => v,
            None => {
                filled.push(col.clone());
                0.0
            }
        })
        .collect();

    let dropped = row
        .keys()
        .filter(|k| !schema.contains(k))
        .cloned()
        .collect();

    AlignedFeatures {
        values,
        filled,
        dropped,
    }
}
