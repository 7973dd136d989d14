use egui::{Pos2, Vec2};

use super::Element;
use super::common::{self, INITIAL_ELLIPSE_RADIUS};
use crate::color::Color;
use crate::surface::DrawingSurface;

/// Axis-aligned ellipse filled and outlined in a single color
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Pos2,
    radius: Vec2,
    color: Color,
    stroke_width: f32,
}

impl Ellipse {
    /// Create an ellipse. Negative radii are taken by magnitude.
    pub fn new(center: Pos2, radius_x: f32, radius_y: f32, color: Color, stroke_width: f32) -> Self {
        Self {
            center,
            radius: Vec2::new(radius_x.abs(), radius_y.abs()),
            color,
            stroke_width,
        }
    }

    /// The degenerate ellipse placed on pointer-down
    pub fn seeded(center: Pos2, color: Color, stroke_width: f32) -> Self {
        Self::new(
            center,
            INITIAL_ELLIPSE_RADIUS,
            INITIAL_ELLIPSE_RADIUS,
            color,
            stroke_width,
        )
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius_x(&self) -> f32 {
        self.radius.x
    }

    pub fn radius_y(&self) -> f32 {
        self.radius.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Refit the ellipse into the box spanned by `anchor` and `current`
    pub fn span(&mut self, anchor: Pos2, current: Pos2) {
        let (center, radius) = common::center_and_half_extents(anchor, current);
        self.center = center;
        self.radius = radius;
    }
}

impl Element for Ellipse {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        surface.fill_ellipse(self.center, self.radius, self.color);
        surface.stroke_ellipse(self.center, self.radius, self.color, self.stroke_width);
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        let dx = pos.x - self.center.x;
        let dy = pos.y - self.center.y;
        let Vec2 { x: rx, y: ry } = self.radius;

        // A collapsed axis leaves a line (or a point) to hit
        if rx == 0.0 || ry == 0.0 {
            return dx.abs() <= rx && dy.abs() <= ry;
        }

        (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
