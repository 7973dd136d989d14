use egui::Pos2;

/// Conversion from device pixels to device-independent units.
///
/// Fixed for the whole session once the window exists; 1.0 means 96 DPI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpiScale {
    x: f32,
    y: f32,
}

impl Default for DpiScale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl DpiScale {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn uniform(scale: f32) -> Self {
        Self::new(scale, scale)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn pixels_to_dips(&self, pixels: Pos2) -> Pos2 {
        Pos2::new(pixels.x / self.x, pixels.y / self.y)
    }

    pub fn dips_to_pixels(&self, dips: Pos2) -> Pos2 {
        Pos2::new(dips.x * self.x, dips.y * self.y)
    }
}
