use serde::{Deserialize, Serialize};

/// Pixel dimensions of the axis surface.
///
/// Zero-sized viewports are representable: the axis degenerates to an empty
/// drawing instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Vertical center row; value `0.0` is drawn here.
    #[must_use]
    pub fn center_y(self) -> i32 {
        (self.height / 2) as i32
    }
}
