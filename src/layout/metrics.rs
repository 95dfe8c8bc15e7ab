//! Width metrics for the two standard serif faces used by report text.
//!
//! Widths are expressed per glyph at a 1000-unit em, matching the metric
//! tables shipped with the standard Type1 faces the PDF emitter references.
//! Measuring here (instead of shaping a real font file) keeps layout a pure
//! function of the input text.

/// Advance width used for glyphs outside the tables, in 1000-unit em space.
const FALLBACK_WIDTH: u16 = 500;

/// Standard serif faces report text is set in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FontFace {
    /// Regular serif body face.
    SerifRegular,
    /// Bold serif heading face.
    SerifBold,
}

impl FontFace {
    /// PostScript base font name referenced by the PDF emitter.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::SerifRegular => "Times-Roman",
            FontFace::SerifBold => "Times-Bold",
        }
    }

    /// Glyph advance width at a 1000-unit em.
    ///
    /// ASCII comes from the face's metric table; the handful of typographic
    /// characters the engine itself emits (em-dash, en-dash, bullet) are
    /// mapped explicitly, everything else falls back to a fixed width.
    pub fn advance_units(self, c: char) -> u16 {
        let code = c as u32;
        if (0x20..=0x7E).contains(&code) {
            return self.ascii_widths()[(code - 0x20) as usize];
        }
        match c {
            '\u{2013}' => 500,  // en dash
            '\u{2014}' => 1000, // em dash
            '\u{2022}' => 350,  // bullet
            _ => FALLBACK_WIDTH,
        }
    }

    fn ascii_widths(self) -> &'static [u16; 95] {
        match self {
            FontFace::SerifRegular => &TIMES_ROMAN_WIDTHS,
            FontFace::SerifBold => &TIMES_BOLD_WIDTHS,
        }
    }
}

/// Measured width of `text` at `size` points.
pub fn text_width(face: FontFace, size: f64, text: &str) -> f64 {
    let units: u64 = text
        .chars()
        .map(|c| u64::from(face.advance_units(c)))
        .sum();
    units as f64 * size / 1000.0
}

/// Times-Roman advance widths for ASCII 0x20..=0x7E.
#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 333, // space ! " # $ % & '
    333, 333, 500, 564, 250, 333, 250, 278, // ( ) * + , - . /
    500, 500, 500, 500, 500, 500, 500, 500, // 0 1 2 3 4 5 6 7
    500, 500, 278, 278, 564, 564, 564, 444, // 8 9 : ; < = > ?
    921, 722, 667, 667, 722, 611, 556, 722, // @ A B C D E F G
    722, 333, 389, 722, 611, 889, 722, 722, // H I J K L M N O
    556, 722, 667, 556, 611, 722, 722, 944, // P Q R S T U V W
    722, 722, 611, 333, 278, 333, 469, 500, // X Y Z [ \ ] ^ _
    333, 444, 500, 444, 500, 444, 333, 500, // ` a b c d e f g
    500, 278, 278, 500, 278, 778, 500, 500, // h i j k l m n o
    500, 500, 333, 389, 278, 500, 500, 722, // p q r s t u v w
    500, 500, 444, 480, 200, 480, 541,      // x y z { | } ~
];

/// Times-Bold advance widths for ASCII 0x20..=0x7E.
#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 333, // space ! " # $ % & '
    333, 333, 500, 570, 250, 333, 250, 278,  // ( ) * + , - . /
    500, 500, 500, 500, 500, 500, 500, 500,  // 0 1 2 3 4 5 6 7
    500, 500, 333, 333, 570, 570, 570, 500,  // 8 9 : ; < = > ?
    930, 722, 667, 722, 722, 667, 611, 778,  // @ A B C D E F G
    778, 389, 500, 778, 667, 944, 722, 778,  // H I J K L M N O
    611, 778, 722, 556, 667, 722, 722, 1000, // P Q R S T U V W
    722, 722, 667, 333, 278, 333, 581, 500,  // X Y Z [ \ ] ^ _
    333, 500, 556, 444, 556, 444, 333, 500,  // ` a b c d e f g
    556, 278, 333, 556, 278, 833, 556, 500,  // h i j k l m n o
    556, 556, 444, 389, 333, 556, 500, 722,  // p q r s t u v w
    500, 500, 444, 394, 220, 394, 520,       // x y z { | } ~
];

#[cfg(test)]
#[path = "../../tests/unit/layout/metrics.rs"]
mod tests;
