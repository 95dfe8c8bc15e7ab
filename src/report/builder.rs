use image::RgbImage;
use rayon::prelude::*;

use crate::{
    chart::render::{CHART_HEIGHT, CHART_WIDTH, render_correctness_chart, render_option_chart},
    foundation::error::RubricResult,
    layout::metrics::FontFace,
    layout::page::{LayoutEngine, MARGIN, PAGE_WIDTH},
    model::task::ReportRequest,
    pdf::emit::emit_document,
    stats::aggregate::{Bucket, CriterionStats, aggregate},
};

/// Finished report artifact.
#[derive(Clone, Debug)]
pub struct ReportDocument {
    /// Document byte stream, suitable for inline rendering.
    pub bytes: Vec<u8>,
}

impl ReportDocument {
    /// MIME type of the emitted artifact.
    pub const CONTENT_TYPE: &'static str = "application/pdf";

    /// Size of the document in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` when the document holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Tunables for report generation.
#[derive(Clone, Copy, Debug)]
pub struct ReportOptions {
    /// Device scale multiplier applied to the logical 360x160 chart size.
    ///
    /// Charts are placed at their logical size in points; a higher scale only
    /// raises raster density for print quality.
    pub device_scale: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { device_scale: 2 }
    }
}

const TITLE_SIZE: f64 = 20.0;
const TITLE_ADVANCE: f64 = 26.0;
const SUBTITLE_SIZE: f64 = 14.0;
const SUBTITLE_ADVANCE: f64 = 20.0;
const BODY_SIZE: f64 = 12.0;
const BODY_LINE: f64 = 16.0;
const CAPTION_SIZE: f64 = 10.0;
const CAPTION_ADVANCE: f64 = 14.0;
const DIVIDER_ADVANCE: f64 = 10.0;
const BLOCK_GAP: f64 = 8.0;
const SECTION_GAP: f64 = 24.0;

/// Placeholder shown for blank or missing metadata and answers.
const PLACEHOLDER: &str = "\u{2014}";
/// Type tag synthesized for criteria without metadata.
const UNKNOWN_KIND: &str = "UNKNOWN";
const BULLET: char = '\u{2022}';

/// Build the criterion analysis report with default options.
#[tracing::instrument(skip(request), fields(task = %request.task.id))]
pub fn build_report(request: &ReportRequest) -> RubricResult<ReportDocument> {
    build_report_with(request, &ReportOptions::default())
}

/// Build the criterion analysis report with explicit options.
///
/// Pipeline: validate, aggregate, rasterize both charts per criterion (chart
/// rendering fans out across criteria; placement below stays serial in
/// criterion order), lay out, encode. Any stage failure aborts the whole
/// report; no partial document is returned.
pub fn build_report_with(
    request: &ReportRequest,
    options: &ReportOptions,
) -> RubricResult<ReportDocument> {
    request.validate()?;
    let stats = aggregate(request)?;

    let charts: Vec<(RgbImage, RgbImage)> = stats
        .par_iter()
        .map(|stat| {
            Ok((
                render_correctness_chart(stat, options.device_scale)?,
                render_option_chart(stat, options.device_scale)?,
            ))
        })
        .collect::<RubricResult<Vec<_>>>()?;

    let mut layout = LayoutEngine::new();
    let total = stats.len();
    for (position, (stat, (correctness, distribution))) in
        stats.iter().zip(charts).enumerate()
    {
        emit_section(
            &mut layout,
            request,
            stat,
            position,
            total,
            correctness,
            distribution,
        );
    }

    let (pages, images) = layout.into_parts();
    let bytes = emit_document(&pages, &images)?;
    tracing::debug!(
        criteria = total,
        pages = pages.len(),
        bytes = bytes.len(),
        "report document built"
    );
    Ok(ReportDocument { bytes })
}

/// Emit one criterion section in the fixed order: header band (task id,
/// criterion counter, question text), metadata block, correctness chart with
/// caption, option-distribution chart, summary bullets.
fn emit_section(
    layout: &mut LayoutEngine,
    request: &ReportRequest,
    stat: &CriterionStats,
    position: usize,
    total: usize,
    correctness: RgbImage,
    distribution: RgbImage,
) {
    let column = PAGE_WIDTH - 2.0 * MARGIN;

    // keep the header band on one page
    layout.reserve(TITLE_ADVANCE + SUBTITLE_ADVANCE + BODY_LINE + DIVIDER_ADVANCE);
    layout.heading(&format!("Task {}", request.task.id), TITLE_SIZE, TITLE_ADVANCE);
    layout.heading_right(
        &format!("Criterion {} of {}", position + 1, total),
        SUBTITLE_SIZE,
        SUBTITLE_ADVANCE,
    );
    layout.paragraph(
        &request.task.question,
        FontFace::SerifRegular,
        BODY_SIZE,
        BODY_LINE,
        column,
    );
    layout.divider(DIVIDER_ADVANCE);

    let meta = request.meta_for(&stat.criterion_id);
    let kind = meta
        .map(|m| m.kind.trim())
        .filter(|k| !k.is_empty())
        .unwrap_or(UNKNOWN_KIND);
    let description = meta
        .map(|m| m.description.trim())
        .filter(|d| !d.is_empty())
        .unwrap_or(PLACEHOLDER);
    let answer = request
        .answer_key
        .value_for(&stat.criterion_id)
        .unwrap_or(PLACEHOLDER);

    for line in [
        format!("Question: {}", request.task.question),
        format!("Description: {description}"),
        format!("Type: {kind}"),
        format!("Correct answer: {answer}"),
    ] {
        layout.paragraph(&line, FontFace::SerifRegular, BODY_SIZE, BODY_LINE, column);
    }
    layout.spacer(BLOCK_GAP);

    layout.image(correctness, f64::from(CHART_WIDTH), f64::from(CHART_HEIGHT), true);
    layout.paragraph(
        "Answer correctness across participants",
        FontFace::SerifRegular,
        CAPTION_SIZE,
        CAPTION_ADVANCE,
        column,
    );
    layout.image(distribution, f64::from(CHART_WIDTH), f64::from(CHART_HEIGHT), true);

    for line in summary_lines(stat, answer) {
        layout.paragraph(&line, FontFace::SerifRegular, BODY_SIZE, BODY_LINE, column);
    }
    layout.spacer(SECTION_GAP);
}

/// The six fixed summary lines: one per bucket, total analyzed, and the
/// correct-answer value.
fn summary_lines(stat: &CriterionStats, answer: &str) -> Vec<String> {
    let mut lines: Vec<String> = Bucket::ORDER
        .iter()
        .map(|&bucket| format!("{BULLET} {}: {}", bucket.label(), stat.bucket_count(bucket)))
        .collect();
    lines.push(format!("{BULLET} Analyzed: {}", stat.analyzed()));
    lines.push(format!("{BULLET} Correct answer: {answer}"));
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/report/builder.rs"]
mod tests;
