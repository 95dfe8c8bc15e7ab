//! Report orchestration: aggregation, chart rendering and layout emission.

pub mod builder;
