//! Content stream generation for label overlays.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

use crate::calculation::PageLayout;
use crate::models::DrawInstruction;

/// Resource name the overlay font is registered under.
pub const FONT_RESOURCE: &str = "F1";

/// Encodes text for a WinAnsi (Latin-1 subset) Type1 font.
///
/// Characters outside Latin-1 are replaced with `?`.
///
/// # Example
///
/// ```
/// use jornada_register::document::encode_text;
///
/// assert_eq!(encode_text("Médico"), vec![b'M', 0xE9, b'd', b'i', b'c', b'o']);
/// assert_eq!(encode_text("→"), vec![b'?']);
/// ```
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn snap(value: f32) -> f32 {
    if value.abs() < 1e-6 { 0.0 } else { value }
}

/// Returns the text matrix `[a b c d x y]` for a rotation in degrees and a
/// position.
///
/// A 90 degree rotation yields `[0 1 -1 0 x y]`.
pub fn text_matrix(rotation: f32, x: f32, y: f32) -> [f32; 6] {
    let (sin, cos) = rotation.to_radians().sin_cos();
    [snap(cos), snap(sin), snap(-sin), snap(cos), x, y]
}

fn draw_operations(draw: &DrawInstruction, layout: &PageLayout) -> [Operation; 5] {
    let anchor = layout.position(draw);
    let matrix = text_matrix(draw.rotation, anchor.x, anchor.y);

    [
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(FONT_RESOURCE.into()), layout.font_size.into()],
        ),
        Operation::new("Tm", matrix.iter().map(|&v| v.into()).collect()),
        Operation::new(
            "Tj",
            vec![Object::String(encode_text(&draw.text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

/// Builds the encoded content stream drawing every label, one text object
/// per label.
pub fn overlay_content(draws: &[DrawInstruction], layout: &PageLayout) -> lopdf::Result<Vec<u8>> {
    let operations: Vec<_> = draws
        .iter()
        .flat_map(|draw| draw_operations(draw, layout))
        .collect();

    Content { operations }.encode()
}
