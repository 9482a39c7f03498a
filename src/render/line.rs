use super::{BoundingBox, Point, Stroke};
use crate::canvas::Canvas;

/// Straight segment with flat ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStroke {
    pub start: Point,
    pub end: Point,
    pub stroke: Stroke,
}

impl LineStroke {
    pub const fn new(start: Point, end: Point, stroke: Stroke) -> Self {
        Self { start, end, stroke }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let half_width = f32::from(self.stroke.width) / 2.0;
        let reach = half_width.ceil() as i32;
        let search = BoundingBox::new(
            self.start.x.min(self.end.x).saturating_sub(reach),
            self.start.y.min(self.end.y).saturating_sub(reach),
            self.start.x.max(self.end.x).saturating_add(reach),
            self.start.y.max(self.end.y).saturating_add(reach),
        );
        let Some(clipped) = canvas.clip(search) else {
            return;
        };

        for y in clipped.y0..=clipped.y1 {
            for x in clipped.x0..=clipped.x1 {
                if self.covers(x, y, half_width) {
                    canvas.set_pixel(x, y, self.stroke.color);
                }
            }
        }
    }

    fn covers(&self, x: i32, y: i32, half_width: f32) -> bool {
        let (x0, y0) = (self.start.x as f32, self.start.y as f32);
        let vx = self.end.x as f32 - x0;
        let vy = self.end.y as f32 - y0;
        let px = x as f32 - x0;
        let py = y as f32 - y0;
        let length_sq = vx * vx + vy * vy;

        if length_sq == 0.0 {
            return (px * px + py * py).sqrt() <= half_width.max(0.5);
        }

        let t = (px * vx + py * vy) / length_sq;
        if !(0.0..=1.0).contains(&t) {
            return false;
        }
        // Signed distance; the band is half-open so axis-aligned lines are
        // exactly `width` pixels thick.
        let offset = (vx * py - vy * px) / length_sq.sqrt();
        offset >= -half_width && offset < half_width
    }
}
