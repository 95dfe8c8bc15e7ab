//! Submission aggregation into per-criterion statistics.

pub mod aggregate;
