use egui::{Pos2, Rect};

use super::Element;
use super::common::INITIAL_RECTANGLE_SIZE;
use crate::color::Color;
use crate::surface::DrawingSurface;

/// Axis-aligned rectangle filled and outlined in a single color.
///
/// Edges are stored as dragged, so `right < left` or `bottom < top` is possible
/// when the pointer moves up or left of the press position.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    color: Color,
    stroke_width: f32,
}

impl Rectangle {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32, color: Color, stroke_width: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            color,
            stroke_width,
        }
    }

    /// The small rectangle anchored at the press position on pointer-down
    pub fn seeded(corner: Pos2, color: Color, stroke_width: f32) -> Self {
        Self::new(
            corner.x,
            corner.y,
            corner.x + INITIAL_RECTANGLE_SIZE,
            corner.y + INITIAL_RECTANGLE_SIZE,
            color,
            stroke_width,
        )
    }

    /// Edges as `[left, top, right, bottom]`, exactly as stored
    pub fn edges(&self) -> [f32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    /// Normalized bounds, with min at the top left
    pub fn bounds(&self) -> Rect {
        Rect::from_two_pos(
            Pos2::new(self.left, self.top),
            Pos2::new(self.right, self.bottom),
        )
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Move the right and bottom edges; left and top stay where they were created
    pub fn drag_corner_to(&mut self, pos: Pos2) {
        self.right = pos.x;
        self.bottom = pos.y;
    }
}

impl Element for Rectangle {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        let bounds = self.bounds();
        surface.fill_rectangle(bounds, self.color);
        surface.stroke_rectangle(bounds, self.color, self.stroke_width);
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        let bounds = self.bounds();
        pos.x >= bounds.min.x && pos.x <= bounds.max.x && pos.y >= bounds.min.y && pos.y <= bounds.max.y
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
