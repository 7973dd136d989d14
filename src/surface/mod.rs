use egui::{Pos2, Rect, Vec2};

use crate::color::Color;
use crate::error::SurfaceResult;

mod egui_surface;
mod recording;

pub use egui_surface::{EguiSurface, EguiSurfaceFactory};
pub use recording::{DrawCall, RecordingFactory, RecordingSurface};

/// An immediate-mode 2D drawing target.
///
/// All coordinates are device-independent units relative to the top left
/// corner of the surface. Every call carries its own color, so a shape
/// drawing itself never changes state that outlives the call.
pub trait DrawingSurface {
    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color);

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color, width: f32);

    fn fill_rectangle(&mut self, rect: Rect, color: Color);

    fn stroke_rectangle(&mut self, rect: Rect, color: Color, width: f32);

    fn draw_line_segment(&mut self, from: Pos2, to: Pos2, color: Color, width: f32);

    /// Fill the whole surface with a single color
    fn clear(&mut self, color: Color);

    /// Match the surface to a new client area
    fn resize(&mut self, area: Rect);

    fn begin_frame(&mut self);

    /// Finish the frame.
    ///
    /// Returns [`crate::error::SurfaceError::DeviceLost`] when the surface has
    /// to be discarded and recreated before the next frame.
    fn end_frame(&mut self) -> SurfaceResult<()>;
}

/// Creates drawing surfaces on demand for the [`crate::Renderer`]
pub trait SurfaceFactory {
    type Surface: DrawingSurface;

    fn create_surface(&mut self, area: Rect) -> SurfaceResult<Self::Surface>;
}
