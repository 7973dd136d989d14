use egui::Pos2;

use crate::color::Color;
use crate::document::Document;
use crate::element::{Element, ElementKind};
use crate::id_generator::ElementId;

/// What a fill click changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// These shapes were under the pointer and got recolored
    Shapes(Vec<ElementId>),
    /// Nothing was hit, so the background was recolored
    Background,
}

/// Recolor every ellipse and rectangle under `pos`.
///
/// All overlapping shapes are recolored, not just the topmost one. Strokes are
/// never targeted. When no shape is hit the background takes the color instead.
pub fn fill_area(doc: &mut Document, pos: Pos2, color: Color) -> FillOutcome {
    let mut hit = Vec::new();

    for kind in [ElementKind::Ellipse, ElementKind::Rectangle] {
        for (id, element) in doc.elements_of_kind_mut(kind) {
            if element.hit_test(pos) {
                element.set_color(color);
                hit.push(id);
            }
        }
    }

    if hit.is_empty() {
        log::debug!("Fill at {:?} hit nothing, recoloring background", pos);
        doc.set_background(color);
        FillOutcome::Background
    } else {
        log::debug!("Fill at {:?} recolored {:?}", pos, hit);
        FillOutcome::Shapes(hit)
    }
}
