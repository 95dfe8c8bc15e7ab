//! Pure, serde-serializable input data model for report requests.

pub mod task;
