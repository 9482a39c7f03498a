use image::{Rgba, RgbaImage};

use crate::geometry::{BoundingBox, Color};

/// RGBA pixel buffer the renderer draws onto.
///
/// Writes replace the stored pixel outright; there is no alpha compositing,
/// so a transparent write erases whatever was there before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocates a `width` x `height` buffer with every pixel set to (0,0,0,0).
    pub fn new(width: u32, height: u32) -> Self {
        tracing::debug!(width, height, "allocating transparent canvas");
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(Color::TRANSPARENT.channels())),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns `None` for coordinates outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = self.index(x, y)?;
        Some(Color::from(*self.image.get_pixel(x, y)))
    }

    /// Out-of-canvas writes are dropped silently.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((x, y)) = self.index(x, y) {
            self.image.put_pixel(x, y, color.into());
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn opaque_pixel_count(&self) -> usize {
        self.image.pixels().filter(|pixel| pixel.0[3] != 0).count()
    }

    /// Intersection of `bounds` with the canvas, or `None` when they miss.
    pub(crate) fn clip(&self, bounds: BoundingBox) -> Option<BoundingBox> {
        let max_x = i32::try_from(self.width()).ok()?.checked_sub(1)?;
        let max_y = i32::try_from(self.height()).ok()?.checked_sub(1)?;
        let left = bounds.x0.max(0);
        let top = bounds.y0.max(0);
        let right = bounds.x1.min(max_x);
        let bottom = bounds.y1.min(max_y);
        if left > right || top > bottom {
            return None;
        }
        Some(BoundingBox::new(left, top, right, bottom))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    fn index(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((x, y))
    }
}
