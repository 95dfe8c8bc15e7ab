use image::RgbImage;
use plotters::prelude::*;

use crate::{
    chart::palette,
    foundation::core::Rgb8,
    foundation::error::{RubricError, RubricResult},
    stats::aggregate::{Bucket, CriterionStats},
};

/// Logical chart width in chart units.
pub const CHART_WIDTH: u32 = 360;
/// Logical chart height in chart units.
pub const CHART_HEIGHT: u32 = 160;

/// Padding between the image edge and the plot area, in logical units.
const PLOT_PADDING: u32 = 10;
/// Number of horizontal gridline divisions.
const GRID_DIVISIONS: u32 = 4;
/// Bar width as a fraction of its category slot.
const BAR_WIDTH_FRACTION: f64 = 0.10;

/// Render the fixed four-bucket correctness chart for `stats`.
///
/// Categories appear in [`Bucket::ORDER`] with their fixed palette colors; a
/// zero count keeps its slot and renders a zero-height bar. The raster is
/// `360x160` logical units multiplied by `device_scale`.
#[tracing::instrument(skip(stats))]
pub fn render_correctness_chart(stats: &CriterionStats, device_scale: u32) -> RubricResult<RgbImage> {
    let series: Vec<(Rgb8, u64)> = Bucket::ORDER
        .iter()
        .map(|&bucket| {
            (
                palette::bucket_color(bucket),
                u64::from(stats.bucket_count(bucket)),
            )
        })
        .collect();
    render_bars(&series, device_scale)
}

/// Render one bar per observed option value, in first-seen order.
///
/// Bar colors cycle through the fixed 6-color palette by position. An empty
/// distribution renders the background and gridlines only.
#[tracing::instrument(skip(stats))]
pub fn render_option_chart(stats: &CriterionStats, device_scale: u32) -> RubricResult<RgbImage> {
    let series: Vec<(Rgb8, u64)> = stats
        .options
        .iter()
        .enumerate()
        .map(|(position, (_, count))| (palette::option_color(position), count))
        .collect();
    render_bars(&series, device_scale)
}

/// Encode a chart raster as PNG bytes, for preview/debug sinks.
pub fn chart_to_png(image: &RgbImage) -> RubricResult<Vec<u8>> {
    let mut out = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| RubricError::render(format!("encode chart png: {e}")))?;
    Ok(out.into_inner())
}

fn to_rgb(color: Rgb8) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn draw_err(stage: &str, err: impl std::fmt::Display) -> RubricError {
    RubricError::render(format!("{stage}: {err}"))
}

/// Shared bar renderer: white background, light-gray horizontal gridlines,
/// thin centered bars, no legend, no axis outline.
fn render_bars(series: &[(Rgb8, u64)], device_scale: u32) -> RubricResult<RgbImage> {
    let scale = device_scale.max(1);
    let width = CHART_WIDTH * scale;
    let height = CHART_HEIGHT * scale;
    let mut buf = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&to_rgb(palette::BACKGROUND))
            .map_err(|e| draw_err("fill chart background", e))?;

        let pad = (PLOT_PADDING * scale) as i32;
        let plot_left = pad;
        let plot_right = width as i32 - pad;
        let plot_bottom = height as i32 - pad;
        let plot_width = f64::from(plot_right - plot_left);
        let plot_height = f64::from(plot_bottom - pad);

        let grid = to_rgb(palette::GRID_LINE);
        for division in 1..=GRID_DIVISIONS {
            let y = plot_bottom
                - (plot_height * f64::from(division) / f64::from(GRID_DIVISIONS)).round() as i32;
            root.draw(&PathElement::new(vec![(plot_left, y), (plot_right, y)], &grid))
                .map_err(|e| draw_err("draw gridline", e))?;
        }

        if !series.is_empty() {
            let max = series.iter().map(|&(_, count)| count).max().unwrap_or(0).max(1);
            let slot = plot_width / series.len() as f64;
            let bar_width = (slot * BAR_WIDTH_FRACTION).max(1.0);

            for (position, &(color, count)) in series.iter().enumerate() {
                if count == 0 {
                    // zero-height bar: the slot stays reserved, nothing to fill
                    continue;
                }
                let center = f64::from(plot_left) + slot * (position as f64 + 0.5);
                let x0 = (center - bar_width / 2.0).round() as i32;
                let x1 = (center + bar_width / 2.0).round() as i32;
                let bar_height = (plot_height * count as f64 / max as f64).round() as i32;
                root.draw(&Rectangle::new(
                    [(x0, plot_bottom - bar_height), (x1, plot_bottom)],
                    to_rgb(color).filled(),
                ))
                .map_err(|e| draw_err("draw bar", e))?;
            }
        }

        root.present().map_err(|e| draw_err("present chart raster", e))?;
    }

    RgbImage::from_raw(width, height, buf)
        .ok_or_else(|| RubricError::render("chart raster buffer has unexpected size"))
}

#[cfg(test)]
#[path = "../../tests/unit/chart/render.rs"]
mod tests;
