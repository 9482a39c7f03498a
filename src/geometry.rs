//! Shared geometric and color primitives used by the canvas and renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle spanned by two corner pixels, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    /// Corners may arrive in any order; they are stored normalized.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self { x0, y0, x1, y1 }
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 as f32 + self.x1 as f32) / 2.0,
            (self.y0 as f32 + self.y1 as f32) / 2.0,
        )
    }

    /// Half extents measured to the outer pixel edges.
    pub fn half_extents(&self) -> (f32, f32) {
        (
            (self.x1 as f32 - self.x0 as f32) / 2.0 + 0.5,
            (self.y1 as f32 - self.y0 as f32) / 2.0 + 0.5,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.channels())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_normalizes_swapped_corners() {
        let bounds = BoundingBox::new(30, 24, 2, 8);
        assert_eq!(bounds, BoundingBox::new(2, 8, 30, 24));
    }

    #[test]
    fn bounding_box_center_and_extents_reach_outer_pixel_edges() {
        let bounds = BoundingBox::new(2, 2, 30, 30);
        assert_eq!(bounds.center(), (16.0, 16.0));
        assert_eq!(bounds.half_extents(), (14.5, 14.5));
    }

    #[test]
    fn color_converts_to_image_pixel() {
        let pixel: image::Rgba<u8> = Color::WHITE.into();
        assert_eq!(pixel.0, [255, 255, 255, 255]);
        assert_eq!(
            Color::from(image::Rgba([1, 2, 3, 0])),
            Color::rgba(1, 2, 3, 0)
        );
    }
}
