use super::*;

#[test]
fn digits_share_a_uniform_width() {
    for c in '0'..='9' {
        assert_eq!(FontFace::SerifRegular.advance_units(c), 500);
        assert_eq!(FontFace::SerifBold.advance_units(c), 500);
    }
}

#[test]
fn width_scales_linearly_with_size() {
    let narrow = text_width(FontFace::SerifRegular, 10.0, "00");
    let wide = text_width(FontFace::SerifRegular, 20.0, "00");
    assert!((narrow - 10.0).abs() < 1e-9);
    assert!((wide - 20.0).abs() < 1e-9);
}

#[test]
fn widths_accumulate_per_glyph() {
    let face = FontFace::SerifRegular;
    let expected = f64::from(
        face.advance_units('a') + face.advance_units(' ') + face.advance_units('b'),
    ) * 12.0
        / 1000.0;
    assert!((text_width(face, 12.0, "a b") - expected).abs() < 1e-9);
}

#[test]
fn bold_face_is_at_least_as_wide() {
    assert!(FontFace::SerifBold.advance_units('d') > FontFace::SerifRegular.advance_units('d'));
    assert!(
        text_width(FontFace::SerifBold, 12.0, "Pending")
            >= text_width(FontFace::SerifRegular, 12.0, "Pending")
    );
}

#[test]
fn typographic_characters_have_explicit_widths() {
    assert_eq!(FontFace::SerifRegular.advance_units('\u{2014}'), 1000);
    assert_eq!(FontFace::SerifRegular.advance_units('\u{2022}'), 350);
    // uncovered glyphs fall back to a fixed width
    assert_eq!(FontFace::SerifRegular.advance_units('\u{2713}'), 500);
}
