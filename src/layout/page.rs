use image::RgbImage;
use kurbo::{Point, Rect};

use crate::{
    foundation::core::Rgb8,
    layout::metrics::{FontFace, text_width},
};

/// Page width in points (A4 portrait).
pub const PAGE_WIDTH: f64 = 595.28;
/// Page height in points (A4 portrait).
pub const PAGE_HEIGHT: f64 = 841.89;
/// Uniform page margin in points.
pub const MARGIN: f64 = 50.0;
/// Vertical gap emitted below every embedded image.
pub const IMAGE_GAP: f64 = 12.0;
/// Divider rule color (light gray).
pub const DIVIDER_COLOR: Rgb8 = Rgb8::new(0xD9, 0xD9, 0xD9);

/// Stroke width of divider rules in points.
const DIVIDER_STROKE: f64 = 0.75;

/// A single drawing operation on one page.
///
/// Coordinates use the PDF convention: origin at the bottom-left corner of
/// the page, y growing upward.
#[derive(Clone, Debug)]
pub enum PageOp {
    /// Text run with its baseline origin at `at`.
    Text {
        /// Baseline origin.
        at: Point,
        /// Face the run is set in.
        face: FontFace,
        /// Font size in points.
        size: f64,
        /// Text content.
        content: String,
    },
    /// Straight stroked line segment.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke color.
        color: Rgb8,
        /// Stroke width in points.
        width: f64,
    },
    /// Embedded raster drawn into `frame`.
    Image {
        /// Index into the layout engine's image table.
        index: usize,
        /// Placement rectangle on the page.
        frame: Rect,
    },
}

/// Ordered op list for one page.
#[derive(Clone, Debug, Default)]
pub struct PageSketch {
    /// Drawing operations in emission order.
    pub ops: Vec<PageOp>,
}

/// Vertical-cursor layout engine over fixed-size pages.
///
/// The engine owns a single cursor starting at `PAGE_HEIGHT - MARGIN` and
/// strictly decreasing as elements are emitted. Every primitive checks the
/// remaining page height first and starts a fresh page when the next element
/// would not fit, so content taller than one page paginates instead of
/// drawing past the bottom margin.
pub struct LayoutEngine {
    finished: Vec<PageSketch>,
    current: PageSketch,
    images: Vec<RgbImage>,
    cursor: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    /// Create an engine with one empty page and a reset cursor.
    pub fn new() -> Self {
        Self {
            finished: Vec::new(),
            current: PageSketch::default(),
            images: Vec::new(),
            cursor: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Current cursor position (distance from the page bottom).
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Vertical space left on the current page above the bottom margin.
    pub fn remaining(&self) -> f64 {
        self.cursor - MARGIN
    }

    /// Number of pages, the in-progress one included.
    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// Close the current page and start a new one with a reset cursor.
    pub fn new_page(&mut self) {
        self.finished.push(std::mem::take(&mut self.current));
        self.cursor = PAGE_HEIGHT - MARGIN;
    }

    /// Start a new page unless at least `needed` points remain on this one.
    ///
    /// Callers group multi-element blocks (a header band, an image plus its
    /// gap) under one reservation so the block never straddles a page break.
    pub fn reserve(&mut self, needed: f64) {
        if self.remaining() < needed {
            self.new_page();
        }
    }

    /// Draw bold text at the left margin, then advance the cursor.
    ///
    /// The baseline sits `size` points below the cursor; the cursor then
    /// drops by `advance`.
    pub fn heading(&mut self, text: &str, size: f64, advance: f64) {
        self.reserve(advance);
        self.current.ops.push(PageOp::Text {
            at: Point::new(MARGIN, self.cursor - size),
            face: FontFace::SerifBold,
            size,
            content: text.to_string(),
        });
        self.cursor -= advance;
    }

    /// Draw bold text with its right edge on `PAGE_WIDTH - MARGIN`.
    pub fn heading_right(&mut self, text: &str, size: f64, advance: f64) {
        self.reserve(advance);
        let x = PAGE_WIDTH - MARGIN - text_width(FontFace::SerifBold, size, text);
        self.current.ops.push(PageOp::Text {
            at: Point::new(x, self.cursor - size),
            face: FontFace::SerifBold,
            size,
            content: text.to_string(),
        });
        self.cursor -= advance;
    }

    /// Draw a light-gray horizontal rule across the text column.
    pub fn divider(&mut self, advance: f64) {
        self.reserve(advance);
        self.current.ops.push(PageOp::Line {
            from: Point::new(MARGIN, self.cursor),
            to: Point::new(PAGE_WIDTH - MARGIN, self.cursor),
            color: DIVIDER_COLOR,
            width: DIVIDER_STROKE,
        });
        self.cursor -= advance;
    }

    /// Word-wrap `text` into `max_width` and emit one text op per line.
    ///
    /// Lines break across pages individually, so a long paragraph continues
    /// on the next page instead of overflowing this one.
    pub fn paragraph(&mut self, text: &str, face: FontFace, size: f64, line_height: f64, max_width: f64) {
        for line in wrap_words(text, face, size, max_width) {
            self.reserve(line_height);
            self.current.ops.push(PageOp::Text {
                at: Point::new(MARGIN, self.cursor - size),
                face,
                size,
                content: line,
            });
            self.cursor -= line_height;
        }
    }

    /// Place a raster image of `width` x `height` points, centered or at the
    /// left margin, then advance by the height plus [`IMAGE_GAP`].
    ///
    /// An image never straddles a page break.
    pub fn image(&mut self, raster: RgbImage, width: f64, height: f64, centered: bool) {
        self.reserve(height + IMAGE_GAP);
        let x = if centered {
            (PAGE_WIDTH - width) / 2.0
        } else {
            MARGIN
        };
        self.cursor -= height;
        let frame = Rect::new(x, self.cursor, x + width, self.cursor + height);
        self.current.ops.push(PageOp::Image {
            index: self.images.len(),
            frame,
        });
        self.images.push(raster);
        self.cursor -= IMAGE_GAP;
    }

    /// Drop the cursor by `amount` without drawing or page-breaking.
    pub fn spacer(&mut self, amount: f64) {
        self.cursor -= amount;
    }

    /// Finish layout, yielding the page sketches and the image table the
    /// sketches index into.
    pub fn into_parts(mut self) -> (Vec<PageSketch>, Vec<RgbImage>) {
        self.finished.push(self.current);
        (self.finished, self.images)
    }
}

/// Greedy word-wrap against the face metric tables.
///
/// For each word the candidate line is the current line plus a space plus the
/// word (or the word alone on an empty line). A candidate wider than
/// `max_width` flushes the current line and starts a new one with that word;
/// a single word wider than the budget occupies its own line unmodified.
pub fn wrap_words(text: &str, face: FontFace, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if !line.is_empty() && text_width(face, size, &candidate) > max_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/page.rs"]
mod tests;
