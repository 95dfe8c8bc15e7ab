use super::*;
use kurbo::{Point, Rect};

use crate::foundation::core::Rgb8;

fn sample_sketch() -> PageSketch {
    PageSketch {
        ops: vec![
            PageOp::Text {
                at: Point::new(50.0, 770.0),
                face: FontFace::SerifBold,
                size: 20.0,
                content: "Task t1".to_string(),
            },
            PageOp::Line {
                from: Point::new(50.0, 760.0),
                to: Point::new(545.28, 760.0),
                color: Rgb8::new(0xD9, 0xD9, 0xD9),
                width: 0.75,
            },
            PageOp::Image {
                index: 0,
                frame: Rect::new(117.64, 560.0, 477.64, 720.0),
            },
        ],
    }
}

#[test]
fn emitted_bytes_form_a_loadable_pdf() {
    let images = vec![image::RgbImage::new(4, 4)];
    let bytes = emit_document(&[sample_sketch()], &images).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn one_page_object_per_sketch() {
    let bytes = emit_document(&[PageSketch::default(), PageSketch::default()], &[]).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn pages_share_font_and_image_resources() {
    let bytes = emit_document(&[sample_sketch()], &[image::RgbImage::new(4, 4)]).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();

    let page = doc.get_dictionary(page_id).unwrap();
    let resources = match page.get(b"Resources").unwrap() {
        Object::Reference(id) => doc.get_dictionary(*id).unwrap(),
        Object::Dictionary(dict) => dict,
        other => panic!("unexpected resources object {other:?}"),
    };

    let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
    assert!(fonts.has(b"F1"));
    assert!(fonts.has(b"F2"));
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    assert!(xobjects.has(b"Im0"));
}

#[test]
fn drawn_text_survives_extraction() {
    let bytes = emit_document(&[sample_sketch()], &[image::RgbImage::new(4, 4)]).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    let text = doc.extract_text(&[1]).unwrap();
    assert!(text.contains("Task t1"));
}

#[test]
fn winansi_mapping_covers_engine_typography() {
    assert_eq!(encode_winansi("A1"), vec![0x41, 0x31]);
    assert_eq!(encode_winansi("\u{2014}"), vec![0x97]);
    assert_eq!(encode_winansi("\u{2022}"), vec![0x95]);
    assert_eq!(encode_winansi("\u{2013}"), vec![0x96]);
    // unmappable characters degrade to '?'
    assert_eq!(encode_winansi("\u{20AC}"), vec![b'?']);
}
