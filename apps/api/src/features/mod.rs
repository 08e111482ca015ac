// Feature pipeline: title → job level, derived columns, one-hot encoding,
// then alignment to the training-time column order.
// Must stay byte-for-byte compatible with the column names the training
// notebook produced; the model sees nothing else.

pub mod align;
pub mod engineer;
pub mod job_level;

pub use align::{align_to_schema, AlignedFeatures, ModelSchema};
pub use engineer::{engineer_features, EngineeredFeatures, FeatureRow};
pub use job_level::assign_job_level;
