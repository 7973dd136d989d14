use egui::Pos2;

use crate::color::Color;
use crate::surface::DrawingSurface;

mod common;
mod ellipse;
mod rectangle;
mod stroke;

pub use common::{ERASER_COLOR, INITIAL_ELLIPSE_RADIUS, INITIAL_RECTANGLE_SIZE, STROKE_SEED_OFFSET};
pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use stroke::FreehandStroke;

/// Common trait that all drawn shapes implement
pub trait Element {
    /// Paint the element, fill first, then outline
    fn draw(&self, surface: &mut dyn DrawingSurface);

    /// Test if the element contains the given position
    fn hit_test(&self, pos: Pos2) -> bool;

    /// Recolor the element in place
    fn set_color(&mut self, color: Color);
}

/// Kind tag of an [`ElementType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Ellipse,
    Rectangle,
    Pen,
    Eraser,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Ellipse => "ellipse",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Pen => "pen",
            ElementKind::Eraser => "eraser",
        }
    }
}

/// Enumeration of everything that can be drawn on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Pen(FreehandStroke),
    Eraser(FreehandStroke),
}

impl ElementType {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementType::Ellipse(_) => ElementKind::Ellipse,
            ElementType::Rectangle(_) => ElementKind::Rectangle,
            ElementType::Pen(_) => ElementKind::Pen,
            ElementType::Eraser(_) => ElementKind::Eraser,
        }
    }

    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            ElementType::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_ellipse_mut(&mut self) -> Option<&mut Ellipse> {
        match self {
            ElementType::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            ElementType::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_rectangle_mut(&mut self) -> Option<&mut Rectangle> {
        match self {
            ElementType::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// The stroke of a pen or eraser element
    pub fn as_stroke(&self) -> Option<&FreehandStroke> {
        match self {
            ElementType::Pen(s) | ElementType::Eraser(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_stroke_mut(&mut self) -> Option<&mut FreehandStroke> {
        match self {
            ElementType::Pen(s) | ElementType::Eraser(s) => Some(s),
            _ => None,
        }
    }
}

impl Element for ElementType {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        match self {
            ElementType::Ellipse(e) => e.draw(surface),
            ElementType::Rectangle(r) => r.draw(surface),
            ElementType::Pen(s) | ElementType::Eraser(s) => s.draw(surface),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            ElementType::Ellipse(e) => e.hit_test(pos),
            ElementType::Rectangle(r) => r.hit_test(pos),
            ElementType::Pen(s) | ElementType::Eraser(s) => s.hit_test(pos),
        }
    }

    fn set_color(&mut self, color: Color) {
        match self {
            ElementType::Ellipse(e) => e.set_color(color),
            ElementType::Rectangle(r) => r.set_color(color),
            ElementType::Pen(s) => s.set_color(color),
            // Eraser strokes always paint the eraser color
            ElementType::Eraser(_) => {}
        }
    }
}

/// Factory functions for the elements created on pointer-down
pub mod factory {
    use super::*;

    pub fn create_ellipse(center: Pos2, color: Color, stroke_width: f32) -> ElementType {
        ElementType::Ellipse(Ellipse::seeded(center, color, stroke_width))
    }

    pub fn create_rectangle(corner: Pos2, color: Color, stroke_width: f32) -> ElementType {
        ElementType::Rectangle(Rectangle::seeded(corner, color, stroke_width))
    }

    pub fn create_pen(start: Pos2, color: Color, stroke_width: f32) -> ElementType {
        ElementType::Pen(FreehandStroke::pen(start, color, stroke_width))
    }

    pub fn create_eraser(start: Pos2, stroke_width: f32) -> ElementType {
        ElementType::Eraser(FreehandStroke::eraser(start, stroke_width))
    }
}
