//! Rubric is a criterion analysis report engine.
//!
//! Given one evaluation task and its ordered criteria, Rubric turns raw
//! submission data into a paginated PDF report via a fixed pipeline:
//!
//! 1. **Aggregate**: `ReportRequest -> Vec<CriterionStats>` (correctness
//!    bucket counts plus first-seen option distributions)
//! 2. **Render**: `CriterionStats -> RgbImage` categorical bar charts under a
//!    fixed visual contract (palettes, bar geometry, gridlines)
//! 3. **Lay out**: stats and charts -> per-page `PageSketch` op lists, driven
//!    by a strictly decreasing vertical cursor with explicit pagination
//! 4. **Encode**: op lists -> PDF bytes ([`ReportDocument`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: aggregation, chart geometry and layout are
//!   pure functions of the request; identical inputs produce identical stats
//!   and identical chart rasters.
//! - **No IO in the engine**: the result is an in-memory byte vector;
//!   persistence, storage paths and HTTP response shaping belong to callers.
//! - **Synchronous**: one report request runs to completion with no
//!   suspension points; chart rasterization may fan out across criteria, but
//!   document placement always serializes in criterion order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chart;
mod foundation;
mod layout;
mod model;
mod pdf;
mod report;
mod stats;

pub use chart::palette::{BACKGROUND, GRID_LINE, OPTION_PALETTE, bucket_color, option_color};
pub use chart::render::{
    CHART_HEIGHT, CHART_WIDTH, chart_to_png, render_correctness_chart, render_option_chart,
};
pub use foundation::core::Rgb8;
pub use foundation::error::{RubricError, RubricResult};
pub use layout::metrics::{FontFace, text_width};
pub use layout::page::{
    DIVIDER_COLOR, IMAGE_GAP, LayoutEngine, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, PageOp, PageSketch,
    wrap_words,
};
pub use model::task::{AnswerKey, Criterion, CriterionMeta, ReportRequest, Submission, Task};
pub use pdf::emit::emit_document;
pub use report::builder::{ReportDocument, ReportOptions, build_report, build_report_with};
pub use stats::aggregate::{Bucket, CriterionStats, OptionCounts, aggregate};
