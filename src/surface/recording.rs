use egui::{Pos2, Rect, Vec2};

use super::{DrawingSurface, SurfaceFactory};
use crate::color::Color;
use crate::error::{SurfaceError, SurfaceResult};

/// A single call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BeginFrame,
    EndFrame,
    Clear(Color),
    FillEllipse {
        center: Pos2,
        radius: Vec2,
        color: Color,
    },
    StrokeEllipse {
        center: Pos2,
        radius: Vec2,
        color: Color,
        width: f32,
    },
    FillRectangle {
        rect: Rect,
        color: Color,
    },
    StrokeRectangle {
        rect: Rect,
        color: Color,
        width: f32,
    },
    LineSegment {
        from: Pos2,
        to: Pos2,
        color: Color,
        width: f32,
    },
}

/// Headless surface that records every call it receives.
///
/// Used in tests, and handy for inspecting what a frame would draw.
#[derive(Debug)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    area: Rect,
    lose_device: bool,
}

impl RecordingSurface {
    pub fn new(area: Rect) -> Self {
        Self {
            calls: Vec::new(),
            area,
            lose_device: false,
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Number of line segments drawn since the last `take_calls`
    pub fn line_segment_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::LineSegment { .. }))
            .count()
    }

    /// Make the next `end_frame` report a lost device
    pub fn lose_device(&mut self) {
        self.lose_device = true;
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color) {
        self.calls.push(DrawCall::FillEllipse { center, radius, color });
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color, width: f32) {
        self.calls.push(DrawCall::StrokeEllipse {
            center,
            radius,
            color,
            width,
        });
    }

    fn fill_rectangle(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRectangle { rect, color });
    }

    fn stroke_rectangle(&mut self, rect: Rect, color: Color, width: f32) {
        self.calls.push(DrawCall::StrokeRectangle { rect, color, width });
    }

    fn draw_line_segment(&mut self, from: Pos2, to: Pos2, color: Color, width: f32) {
        self.calls.push(DrawCall::LineSegment {
            from,
            to,
            color,
            width,
        });
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn begin_frame(&mut self) {
        self.calls.push(DrawCall::BeginFrame);
    }

    fn end_frame(&mut self) -> SurfaceResult<()> {
        self.calls.push(DrawCall::EndFrame);
        if std::mem::take(&mut self.lose_device) {
            return Err(SurfaceError::DeviceLost);
        }
        Ok(())
    }
}

/// Factory for [`RecordingSurface`]s that can be told to fail
#[derive(Debug, Default)]
pub struct RecordingFactory {
    failures_remaining: usize,
    created: usize,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `count` creation attempts
    pub fn fail_next(&mut self, count: usize) {
        self.failures_remaining = count;
    }

    /// Number of surfaces successfully created so far
    pub fn created(&self) -> usize {
        self.created
    }
}

impl SurfaceFactory for RecordingFactory {
    type Surface = RecordingSurface;

    fn create_surface(&mut self, area: Rect) -> SurfaceResult<RecordingSurface> {
        if self.failures_remaining > 0 {
            self.failures_remaining -= 1;
            return Err(SurfaceError::CreationFailed(
                "recording factory told to fail".to_string(),
            ));
        }
        self.created += 1;
        Ok(RecordingSurface::new(area))
    }
}
