use serde::{Deserialize, Serialize};

use crate::error::WidthError;

/// One of the six selectable stroke widths, in device-independent units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StrokeWidth(u8);

impl StrokeWidth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(width: u8) -> Result<Self, WidthError> {
        if (Self::MIN..=Self::MAX).contains(&width) {
            Ok(Self(width))
        } else {
            Err(WidthError::OutOfRange(width))
        }
    }

    /// Every selectable width, thinnest first
    pub fn all() -> impl Iterator<Item = StrokeWidth> {
        (Self::MIN..=Self::MAX).map(StrokeWidth)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for StrokeWidth {
    type Error = WidthError;

    fn try_from(width: u8) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

impl From<StrokeWidth> for u8 {
    fn from(width: StrokeWidth) -> u8 {
        width.0
    }
}

/// The width menu: exactly one width is checked at any time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidthSelection {
    active: StrokeWidth,
}

impl WidthSelection {
    pub fn new(active: StrokeWidth) -> Self {
        Self { active }
    }

    pub fn active(&self) -> StrokeWidth {
        self.active
    }

    pub fn is_checked(&self, width: StrokeWidth) -> bool {
        self.active == width
    }

    /// Check `width` and uncheck the previous one, which is returned
    pub fn select(&mut self, width: StrokeWidth) -> StrokeWidth {
        std::mem::replace(&mut self.active, width)
    }
}
