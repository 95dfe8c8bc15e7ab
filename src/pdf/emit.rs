use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};

use crate::{
    foundation::error::{RubricError, RubricResult},
    layout::metrics::FontFace,
    layout::page::{PAGE_HEIGHT, PAGE_WIDTH, PageOp, PageSketch},
};

/// Producer string stamped into the document info dictionary.
const PRODUCER: &str = "rubric-report";

/// Assemble the final PDF byte stream from laid-out pages.
///
/// Every sketch becomes one page; all pages share a resource dictionary with
/// the two standard serif fonts and one `DeviceRGB` image XObject per entry
/// in `images`. The output is fully in-memory; the caller owns persistence
/// and transport.
#[tracing::instrument(skip(pages, images))]
pub fn emit_document(pages: &[PageSketch], images: &[RgbImage]) -> RubricResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FontFace::SerifBold.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FontFace::SerifRegular.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });

    let mut xobjects = Dictionary::new();
    for (index, image) in images.iter().enumerate() {
        let (width, height) = image.dimensions();
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            image.as_raw().clone(),
        );
        let id = doc.add_object(stream);
        xobjects.set(image_resource_name(index), Object::Reference(id));
    }

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            font_resource_name(FontFace::SerifBold) => bold_id,
            font_resource_name(FontFace::SerifRegular) => regular_id,
        },
        "XObject" => Object::Dictionary(xobjects),
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for sketch in pages {
        let encoded = page_content(sketch)
            .encode()
            .map_err(|e| RubricError::encode(format!("encode page content stream: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![real(0.0), real(0.0), real(PAGE_WIDTH), real(PAGE_HEIGHT)],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RubricError::encode(format!("write document bytes: {e}")))?;
    tracing::debug!(pages = pages.len(), images = images.len(), "document emitted");
    Ok(bytes)
}

fn page_content(sketch: &PageSketch) -> Content {
    let mut operations = Vec::new();
    for op in &sketch.ops {
        match op {
            PageOp::Text {
                at,
                face,
                size,
                content,
            } => {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(font_resource_name(*face).into()),
                        real(*size),
                    ],
                ));
                operations.push(Operation::new("Td", vec![real(at.x), real(at.y)]));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(
                        encode_winansi(content),
                        StringFormat::Literal,
                    )],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            PageOp::Line {
                from,
                to,
                color,
                width,
            } => {
                let [r, g, b] = color.to_unit_components();
                operations.push(Operation::new("w", vec![real(*width)]));
                operations.push(Operation::new(
                    "RG",
                    vec![Object::Real(r), Object::Real(g), Object::Real(b)],
                ));
                operations.push(Operation::new("m", vec![real(from.x), real(from.y)]));
                operations.push(Operation::new("l", vec![real(to.x), real(to.y)]));
                operations.push(Operation::new("S", vec![]));
            }
            PageOp::Image { index, frame } => {
                operations.push(Operation::new("q", vec![]));
                operations.push(Operation::new(
                    "cm",
                    vec![
                        real(frame.width()),
                        real(0.0),
                        real(0.0),
                        real(frame.height()),
                        real(frame.x0),
                        real(frame.y0),
                    ],
                ));
                operations.push(Operation::new(
                    "Do",
                    vec![Object::Name(image_resource_name(*index).into())],
                ));
                operations.push(Operation::new("Q", vec![]));
            }
        }
    }
    Content { operations }
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

fn font_resource_name(face: FontFace) -> &'static str {
    match face {
        FontFace::SerifBold => "F1",
        FontFace::SerifRegular => "F2",
    }
}

fn image_resource_name(index: usize) -> String {
    format!("Im{index}")
}

/// Encode drawn text to WinAnsi bytes.
///
/// ASCII passes through; the typographic characters the engine emits
/// (dashes, bullet, curly quotes) map to their WinAnsi code points; anything
/// else degrades to `?` rather than producing mojibake in the viewer.
fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pdf/emit.rs"]
mod tests;
