use egui::Pos2;

use super::Element;
use super::common::{self, ERASER_COLOR};
use crate::color::Color;
use crate::surface::DrawingSurface;

/// Freehand polyline, shared by the pen and the eraser.
///
/// A stroke without a color is an eraser stroke and paints [`ERASER_COLOR`].
#[derive(Debug, Clone, PartialEq)]
pub struct FreehandStroke {
    points: Vec<Pos2>,
    color: Option<Color>,
    stroke_width: f32,
}

impl FreehandStroke {
    pub fn from_points(points: Vec<Pos2>, color: Option<Color>, stroke_width: f32) -> Self {
        Self {
            points,
            color,
            stroke_width,
        }
    }

    /// A pen stroke seeded with its first segment at `start`
    pub fn pen(start: Pos2, color: Color, stroke_width: f32) -> Self {
        Self::from_points(common::seed_points(start), Some(color), stroke_width)
    }

    /// An eraser stroke seeded with its first segment at `start`
    pub fn eraser(start: Pos2, stroke_width: f32) -> Self {
        Self::from_points(common::seed_points(start), None, stroke_width)
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// The pen color, or `None` for eraser strokes
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_eraser(&self) -> bool {
        self.color.is_none()
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }
}

impl Element for FreehandStroke {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        let color = self.color.unwrap_or(ERASER_COLOR);
        for segment in self.points.windows(2) {
            surface.draw_line_segment(segment[0], segment[1], color, self.stroke_width);
        }
    }

    /// Strokes are never targeted by fill
    fn hit_test(&self, _pos: Pos2) -> bool {
        false
    }

    fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }
}
