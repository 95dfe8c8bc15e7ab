use super::*;
use crate::stats::aggregate::OptionCounts;

fn stats_with(correct: u32, wrong: u32, unknown: u32, pending: u32) -> CriterionStats {
    CriterionStats {
        criterion_id: "c1".to_string(),
        label: "c1".to_string(),
        correct,
        wrong,
        unknown,
        pending,
        options: OptionCounts::new(),
    }
}

fn pixel(image: &image::RgbImage, x: u32, y: u32) -> Rgb8 {
    let p = image.get_pixel(x, y);
    Rgb8::new(p[0], p[1], p[2])
}

#[test]
fn raster_has_logical_size_times_device_scale() {
    let stats = stats_with(1, 0, 0, 0);
    let chart = render_correctness_chart(&stats, 1).unwrap();
    assert_eq!(chart.dimensions(), (CHART_WIDTH, CHART_HEIGHT));
    let chart = render_correctness_chart(&stats, 3).unwrap();
    assert_eq!(chart.dimensions(), (CHART_WIDTH * 3, CHART_HEIGHT * 3));
}

#[test]
fn identical_stats_produce_identical_pixels() {
    let stats = stats_with(3, 1, 0, 1);
    let a = render_correctness_chart(&stats, 2).unwrap();
    let b = render_correctness_chart(&stats, 2).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn correct_bucket_bar_uses_its_fixed_color() {
    // at scale 1 the plot area is x 10..350, y 10..150; four slots of 85
    // put the first bar around x = 52 and a count equal to the max fills
    // the full plot height
    let stats = stats_with(3, 0, 0, 0);
    let chart = render_correctness_chart(&stats, 1).unwrap();
    assert_eq!(pixel(&chart, 52, 100), palette::bucket_color(Bucket::Correct));
    // empty slots stay background
    assert_eq!(pixel(&chart, 200, 100), palette::BACKGROUND);
}

#[test]
fn gridlines_are_light_gray_on_white() {
    let stats = stats_with(0, 0, 0, 0);
    let chart = render_correctness_chart(&stats, 1).unwrap();
    // first gridline from the bottom sits at y = 115
    assert_eq!(pixel(&chart, 100, 115), palette::GRID_LINE);
    assert_eq!(pixel(&chart, 100, 100), palette::BACKGROUND);
}

#[test]
fn zero_counts_render_no_bar_pixels() {
    let stats = stats_with(0, 0, 0, 0);
    let chart = render_correctness_chart(&stats, 1).unwrap();
    // bottom of the first category slot stays background
    assert_eq!(pixel(&chart, 52, 145), palette::BACKGROUND);
}

#[test]
fn option_bars_follow_insertion_order_colors() {
    let mut stats = stats_with(0, 0, 0, 0);
    stats.options.bump("A");
    stats.options.bump("A");
    stats.options.bump("B");
    let chart = render_option_chart(&stats, 1).unwrap();
    // two slots of 170: first bar centered at x = 95 (full height), second
    // at x = 265 (half height)
    assert_eq!(pixel(&chart, 95, 100), palette::option_color(0));
    assert_eq!(pixel(&chart, 265, 120), palette::option_color(1));
    assert_eq!(pixel(&chart, 180, 100), palette::BACKGROUND);
}

#[test]
fn empty_distribution_renders_frame_only() {
    let stats = stats_with(0, 0, 0, 0);
    let chart = render_option_chart(&stats, 1).unwrap();
    assert_eq!(pixel(&chart, 180, 100), palette::BACKGROUND);
    assert_eq!(pixel(&chart, 180, 115), palette::GRID_LINE);
}

#[test]
fn png_round_trip_keeps_dimensions() {
    let stats = stats_with(1, 2, 0, 1);
    let chart = render_correctness_chart(&stats, 1).unwrap();
    let png = chart_to_png(&chart).unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), CHART_WIDTH);
    assert_eq!(decoded.height(), CHART_HEIGHT);
}
