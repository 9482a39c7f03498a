use super::{BoundingBox, Color};
use crate::canvas::Canvas;

/// Solid rectangle. A transparent fill erases the covered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleFill {
    pub bounds: BoundingBox,
    pub fill: Color,
}

impl RectangleFill {
    pub const fn new(bounds: BoundingBox, fill: Color) -> Self {
        Self { bounds, fill }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let Some(clipped) = canvas.clip(self.bounds) else {
            return;
        };
        for y in clipped.y0..=clipped.y1 {
            for x in clipped.x0..=clipped.x1 {
                canvas.set_pixel(x, y, self.fill);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRectangleFill {
    pub bounds: BoundingBox,
    pub radius: u16,
    pub fill: Color,
}

impl RoundedRectangleFill {
    pub const fn new(bounds: BoundingBox, radius: u16, fill: Color) -> Self {
        Self {
            bounds,
            radius,
            fill,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let Some(clipped) = canvas.clip(self.bounds) else {
            return;
        };
        let radius = self.effective_radius();
        for y in clipped.y0..=clipped.y1 {
            for x in clipped.x0..=clipped.x1 {
                if self.covers(x, y, radius) {
                    canvas.set_pixel(x, y, self.fill);
                }
            }
        }
    }

    /// Radius limited to half of the shorter side.
    fn effective_radius(&self) -> i32 {
        let width = self.bounds.x1.abs_diff(self.bounds.x0).saturating_add(1);
        let height = self.bounds.y1.abs_diff(self.bounds.y0).saturating_add(1);
        let limit = (width / 2).min(height / 2);
        // `limit` fits in i32 since half of any u32 span does.
        i32::from(self.radius).min(limit as i32)
    }

    fn covers(&self, x: i32, y: i32, radius: i32) -> bool {
        let BoundingBox { x0, y0, x1, y1 } = self.bounds;
        let corner_x = if x < x0.saturating_add(radius) {
            x0.saturating_add(radius)
        } else if x > x1.saturating_sub(radius) {
            x1.saturating_sub(radius)
        } else {
            return true;
        };
        let corner_y = if y < y0.saturating_add(radius) {
            y0.saturating_add(radius)
        } else if y > y1.saturating_sub(radius) {
            y1.saturating_sub(radius)
        } else {
            return true;
        };
        let dx = x as f32 - corner_x as f32;
        let dy = y as f32 - corner_y as f32;
        (dx * dx + dy * dy).sqrt() <= radius as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_fill_covers_inclusive_bounds() {
        let mut canvas = Canvas::new(8, 8);
        RectangleFill::new(BoundingBox::new(1, 2, 3, 5), Color::WHITE).draw(&mut canvas);
        assert_eq!(canvas.opaque_pixel_count(), 3 * 4);
        assert_eq!(canvas.pixel(3, 5), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 5), Some(Color::TRANSPARENT));
    }

    #[test]
    fn rectangle_fill_erases_previous_pixels() {
        let mut canvas = Canvas::new(8, 8);
        RectangleFill::new(BoundingBox::new(0, 0, 7, 7), Color::WHITE).draw(&mut canvas);
        RectangleFill::new(BoundingBox::new(4, 0, 9, 7), Color::TRANSPARENT).draw(&mut canvas);
        assert_eq!(canvas.opaque_pixel_count(), 4 * 8);
        assert_eq!(canvas.pixel(5, 5), Some(Color::TRANSPARENT));
    }

    #[test]
    fn rectangle_fully_outside_canvas_draws_nothing() {
        let mut canvas = Canvas::new(8, 8);
        RectangleFill::new(BoundingBox::new(10, 10, 20, 20), Color::WHITE).draw(&mut canvas);
        assert_eq!(canvas.opaque_pixel_count(), 0);
    }

    #[test]
    fn rounded_rectangle_trims_corner_pixels() {
        let mut canvas = Canvas::new(22, 22);
        RoundedRectangleFill::new(BoundingBox::new(3, 11, 6, 16), 1, Color::WHITE)
            .draw(&mut canvas);
        assert_eq!(canvas.pixel(3, 11), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(6, 11), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(3, 16), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(6, 16), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(4, 11), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 12), Some(Color::WHITE));
        assert_eq!(canvas.opaque_pixel_count(), 4 * 6 - 4);
    }

    #[test]
    fn rounded_rectangle_with_zero_radius_matches_plain_fill() {
        let bounds = BoundingBox::new(2, 2, 9, 6);
        let mut rounded = Canvas::new(12, 12);
        RoundedRectangleFill::new(bounds, 0, Color::WHITE).draw(&mut rounded);
        let mut plain = Canvas::new(12, 12);
        RectangleFill::new(bounds, Color::WHITE).draw(&mut plain);
        assert_eq!(rounded, plain);
    }

    #[test]
    fn rounded_rectangle_accepts_extreme_coordinates() {
        let bounds = BoundingBox::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let fill = RoundedRectangleFill::new(bounds, 4, Color::WHITE);
        assert_eq!(fill.effective_radius(), 4);

        let mut canvas = Canvas::new(8, 8);
        fill.draw(&mut canvas);
        assert_eq!(canvas.opaque_pixel_count(), 64);
    }

    #[test]
    fn rounded_rectangle_radius_is_limited_by_short_side() {
        let fill = RoundedRectangleFill::new(BoundingBox::new(0, 0, 3, 9), 40, Color::WHITE);
        assert_eq!(fill.effective_radius(), 2);
    }
}
