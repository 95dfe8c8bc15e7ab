use crate::foundation::core::Rgb8;
use crate::stats::aggregate::Bucket;

/// Chart background (white).
pub const BACKGROUND: Rgb8 = Rgb8::new(255, 255, 255);

/// Horizontal gridline color (light gray).
pub const GRID_LINE: Rgb8 = Rgb8::new(0xE3, 0xE3, 0xE3);

/// Fixed 6-color pastel palette for option-distribution bars.
///
/// Bars cycle through this palette by position; the assignment depends only
/// on the option's ordinal in first-seen order, never on its value.
pub const OPTION_PALETTE: [Rgb8; 6] = [
    Rgb8::new(0xA8, 0xD8, 0xEA), // pastel blue
    Rgb8::new(0xAA, 0xE3, 0xB0), // pastel green
    Rgb8::new(0xF6, 0xC9, 0x90), // pastel orange
    Rgb8::new(0xD7, 0xBD, 0xE2), // pastel purple
    Rgb8::new(0xF5, 0xB8, 0xC4), // pastel pink
    Rgb8::new(0xEF, 0xE5, 0xA5), // pastel yellow
];

/// Fixed color for each correctness bucket.
///
/// Total over [`Bucket`], so an unrecognized category cannot silently fall
/// back to a default color.
pub fn bucket_color(bucket: Bucket) -> Rgb8 {
    match bucket {
        Bucket::Correct => Rgb8::new(0xA9, 0xDC, 0xA9), // pastel green
        Bucket::Wrong => Rgb8::new(0xF2, 0xA9, 0xA2),   // pastel red
        Bucket::Unknown => Rgb8::new(0xCC, 0xCC, 0xCC), // soft gray
        Bucket::Pending => Rgb8::new(0xA9, 0xC6, 0xE8), // pastel blue
    }
}

/// Palette color for the option bar at `position` (cycles mod palette size).
pub fn option_color(position: usize) -> Rgb8 {
    OPTION_PALETTE[position % OPTION_PALETTE.len()]
}

#[cfg(test)]
#[path = "../../tests/unit/chart/palette.rs"]
mod tests;
