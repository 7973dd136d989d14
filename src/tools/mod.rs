use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::document::Document;
use crate::element::{ElementKind, ElementType, factory};
use crate::id_generator::ElementId;

mod fill;
mod width;

pub use fill::{FillOutcome, fill_area};
pub use width::{StrokeWidth, WidthSelection};

/// High-level pointer behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Draw,
    Fill,
    /// Erase with a white pen, whatever shape is selected
    Clear,
}

/// Geometry drawn in [`Mode::Draw`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Ellipse,
    Rectangle,
    Pen,
}

/// Mode, shape, brush color and width chosen by the user.
///
/// These persist until changed and are never touched by clearing the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    pub mode: Mode,
    pub shape: Shape,
    pub brush_color: Color,
    pub width: WidthSelection,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Draw,
            shape: Shape::Ellipse,
            brush_color: Color::YELLOW,
            width: WidthSelection::default(),
        }
    }
}

impl ToolSettings {
    pub fn stroke_width(&self) -> f32 {
        self.width.active().as_f32()
    }

    /// The tool that pointer input is routed to
    pub fn active_tool(&self) -> ActiveTool {
        match (self.mode, self.shape) {
            (Mode::Draw, Shape::Ellipse) => ActiveTool::Ellipse,
            (Mode::Draw, Shape::Rectangle) => ActiveTool::Rectangle,
            (Mode::Draw, Shape::Pen) => ActiveTool::Pen,
            (Mode::Clear, _) => ActiveTool::Eraser,
            (Mode::Fill, _) => ActiveTool::Fill,
        }
    }
}

/// The tool resolved from the current mode and shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTool {
    Ellipse,
    Rectangle,
    Pen,
    Eraser,
    Fill,
}

impl ActiveTool {
    pub fn name(&self) -> &'static str {
        match self {
            ActiveTool::Ellipse => "Ellipse",
            ActiveTool::Rectangle => "Rectangle",
            ActiveTool::Pen => "Pen",
            ActiveTool::Eraser => "Eraser",
            ActiveTool::Fill => "Fill",
        }
    }

    /// Kind of element this tool creates and drags, if it creates any
    pub fn element_kind(&self) -> Option<ElementKind> {
        match self {
            ActiveTool::Ellipse => Some(ElementKind::Ellipse),
            ActiveTool::Rectangle => Some(ElementKind::Rectangle),
            ActiveTool::Pen => Some(ElementKind::Pen),
            ActiveTool::Eraser => Some(ElementKind::Eraser),
            ActiveTool::Fill => None,
        }
    }

    /// Handle pointer press on the canvas.
    ///
    /// Returns the id of the element created for the drag, or `None` for fill,
    /// which acts immediately.
    pub fn on_pointer_down(&self, pos: Pos2, settings: &ToolSettings, doc: &mut Document) -> Option<ElementId> {
        let color = settings.brush_color;
        let width = settings.stroke_width();

        let element = match self {
            ActiveTool::Ellipse => factory::create_ellipse(pos, color, width),
            ActiveTool::Rectangle => factory::create_rectangle(pos, color, width),
            ActiveTool::Pen => factory::create_pen(pos, color, width),
            ActiveTool::Eraser => factory::create_eraser(pos, width),
            ActiveTool::Fill => {
                fill_area(doc, pos, color);
                return None;
            }
        };
        Some(doc.insert(element))
    }

    /// Handle pointer drag on the element created by `on_pointer_down`.
    ///
    /// `anchor` is the press position. Returns false, leaving the element
    /// untouched, when it is not the kind this tool drags.
    pub fn on_pointer_move(&self, element: &mut ElementType, anchor: Pos2, pos: Pos2) -> bool {
        match (self, element) {
            (ActiveTool::Ellipse, ElementType::Ellipse(ellipse)) => ellipse.span(anchor, pos),
            (ActiveTool::Rectangle, ElementType::Rectangle(rect)) => rect.drag_corner_to(pos),
            (ActiveTool::Pen, ElementType::Pen(stroke)) | (ActiveTool::Eraser, ElementType::Eraser(stroke)) => {
                stroke.add_point(pos)
            }
            _ => return false,
        }
        true
    }
}

/// Toolbar buttons and the mode/shape each one selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Rectangle,
    Ellipse,
    Pen,
    Eraser,
    Fill,
}

impl ToolbarButton {
    pub const ALL: [ToolbarButton; 5] = [
        ToolbarButton::Rectangle,
        ToolbarButton::Ellipse,
        ToolbarButton::Pen,
        ToolbarButton::Eraser,
        ToolbarButton::Fill,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarButton::Rectangle => "Rectangle",
            ToolbarButton::Ellipse => "Ellipse",
            ToolbarButton::Pen => "Pen",
            ToolbarButton::Eraser => "Eraser",
            ToolbarButton::Fill => "Fill",
        }
    }

    /// Mode to switch to, and the shape too where the button sets one
    pub fn selection(&self) -> (Mode, Option<Shape>) {
        match self {
            ToolbarButton::Rectangle => (Mode::Draw, Some(Shape::Rectangle)),
            ToolbarButton::Ellipse => (Mode::Draw, Some(Shape::Ellipse)),
            ToolbarButton::Pen => (Mode::Draw, Some(Shape::Pen)),
            ToolbarButton::Eraser => (Mode::Clear, Some(Shape::Pen)),
            ToolbarButton::Fill => (Mode::Fill, None),
        }
    }

    /// Whether this button's tool is the one in use
    pub fn is_selected(&self, settings: &ToolSettings) -> bool {
        let (mode, shape) = self.selection();
        settings.mode == mode && shape.is_none_or(|shape| settings.shape == shape)
    }
}
