use egui::{Pos2, Vec2};

use crate::color::Color;

/// Radius of a freshly created ellipse, before the first drag update
pub const INITIAL_ELLIPSE_RADIUS: f32 = 2.0;
/// Width and height of a freshly created rectangle
pub const INITIAL_RECTANGLE_SIZE: f32 = 2.0;
/// Offset of the second seed point of a new freehand stroke
pub const STROKE_SEED_OFFSET: f32 = 1.0;
/// Eraser strokes paint over the drawing with this color
pub const ERASER_COLOR: Color = Color::WHITE;

/// The two points every freehand stroke starts with.
///
/// A stroke needs at least one segment to be visible, so the press position is
/// paired with a point nudged down and to the right.
pub(crate) fn seed_points(start: Pos2) -> Vec<Pos2> {
    vec![start, start + Vec2::splat(STROKE_SEED_OFFSET)]
}

/// Midpoint and half extents of the box spanned by two corners
pub(crate) fn center_and_half_extents(anchor: Pos2, current: Pos2) -> (Pos2, Vec2) {
    let center = anchor.lerp(current, 0.5);
    let half = Vec2::new(
        (current.x - anchor.x).abs() / 2.0,
        (current.y - anchor.y).abs() / 2.0,
    );
    (center, half)
}
