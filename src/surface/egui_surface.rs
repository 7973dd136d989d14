use egui::{Context, LayerId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{DrawingSurface, SurfaceFactory};
use crate::color::Color;
use crate::error::SurfaceResult;
use crate::input::DpiScale;

/// Drawing surface that emits egui shapes into a fixed layer.
///
/// Geometry arrives in device-independent units. It goes back to device
/// pixels with the editor's DPI scale, then to egui points with the live
/// pixels-per-point, and is offset by the top left corner of the area. This is
/// the inverse of the conversion applied to pointer input.
pub struct EguiSurface {
    painter: Painter,
    area: Rect,
    dpi: DpiScale,
}

impl EguiSurface {
    pub fn new(painter: Painter, area: Rect, dpi: DpiScale) -> Self {
        Self { painter, area, dpi }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn points_per_pixel(&self) -> f32 {
        1.0 / self.painter.ctx().pixels_per_point()
    }

    pub(crate) fn to_screen(&self, dips: Pos2) -> Pos2 {
        self.area.min + self.dpi.dips_to_pixels(dips).to_vec2() * self.points_per_pixel()
    }

    fn rect_to_screen(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max))
    }

    fn radius_to_screen(&self, radius: Vec2) -> Vec2 {
        Vec2::new(radius.x * self.dpi.x(), radius.y * self.dpi.y()) * self.points_per_pixel()
    }

    /// Stroke widths follow the horizontal scale
    fn width_to_screen(&self, width: f32) -> f32 {
        width * self.dpi.x() * self.points_per_pixel()
    }
}

impl DrawingSurface for EguiSurface {
    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color) {
        self.painter.add(Shape::ellipse_filled(
            self.to_screen(center),
            self.radius_to_screen(radius),
            color.to_color32(),
        ));
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color, width: f32) {
        self.painter.add(Shape::ellipse_stroke(
            self.to_screen(center),
            self.radius_to_screen(radius),
            Stroke::new(self.width_to_screen(width), color.to_color32()),
        ));
    }

    fn fill_rectangle(&mut self, rect: Rect, color: Color) {
        self.painter
            .rect_filled(self.rect_to_screen(rect), 0.0, color.to_color32());
    }

    fn stroke_rectangle(&mut self, rect: Rect, color: Color, width: f32) {
        self.painter.rect_stroke(
            self.rect_to_screen(rect),
            0.0,
            Stroke::new(self.width_to_screen(width), color.to_color32()),
        );
    }

    fn draw_line_segment(&mut self, from: Pos2, to: Pos2, color: Color, width: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(self.width_to_screen(width), color.to_color32()),
        );
    }

    fn clear(&mut self, color: Color) {
        self.painter.rect_filled(self.area, 0.0, color.to_color32());
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
        self.painter.set_clip_rect(area);
    }

    fn begin_frame(&mut self) {}

    fn end_frame(&mut self) -> SurfaceResult<()> {
        // egui owns the GPU device, so the painter cannot lose it.
        Ok(())
    }
}

/// Builds [`EguiSurface`]s that paint into one egui layer
pub struct EguiSurfaceFactory {
    ctx: Context,
    layer_id: LayerId,
    dpi: DpiScale,
}

impl EguiSurfaceFactory {
    /// `dpi` must be the scale the editor converts pointer input with
    pub fn new(ctx: Context, layer_id: LayerId, dpi: DpiScale) -> Self {
        Self { ctx, layer_id, dpi }
    }
}

impl SurfaceFactory for EguiSurfaceFactory {
    type Surface = EguiSurface;

    fn create_surface(&mut self, area: Rect) -> SurfaceResult<EguiSurface> {
        log::debug!("Creating egui surface for area {:?}", area);
        let painter = Painter::new(self.ctx.clone(), self.layer_id, area);
        Ok(EguiSurface::new(painter, area, self.dpi))
    }
}
