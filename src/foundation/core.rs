use std::str::FromStr;

use crate::foundation::error::{PrintframeError, PrintframeResult};

/// Pixel rectangle in source-image coordinate space.
///
/// `width` and `height` are non-zero when built through [`CropRegion::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CropRegion {
    /// Left edge in source pixels.
    pub x: u32,
    /// Top edge in source pixels.
    pub y: u32,
    /// Width in source pixels.
    pub width: u32,
    /// Height in source pixels.
    pub height: u32,
}

impl CropRegion {
    /// Create a validated region with `width > 0` and `height > 0`.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> PrintframeResult<Self> {
        if width == 0 || height == 0 {
            return Err(PrintframeError::validation(
                "crop region width and height must be > 0",
            ));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Region covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> PrintframeResult<Self> {
        Self::new(0, 0, width, height)
    }

    /// Exclusive right edge, saturating.
    pub fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating.
    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Intersect with `[0, width) x [0, height)`.
    ///
    /// Returns `None` when the region does not overlap the image at all.
    pub fn clamp_to(self, width: u32, height: u32) -> Option<Self> {
        let x0 = self.x.min(width);
        let y0 = self.y.min(height);
        let x1 = self.right().min(width);
        let y1 = self.bottom().min(height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

impl FromStr for CropRegion {
    type Err = PrintframeError;

    /// Parse `"x,y,width,height"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PrintframeError::validation(format!("crop region '{s}': {e}")))?;
        match parts.as_slice() {
            [x, y, w, h] => Self::new(*x, *y, *w, *h),
            _ => Err(PrintframeError::validation(format!(
                "crop region '{s}' must be 'x,y,width,height'"
            ))),
        }
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels as an array, in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
