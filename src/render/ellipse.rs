use super::{BoundingBox, Stroke};
use crate::canvas::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipseOutline {
    pub bounds: BoundingBox,
    pub stroke: Stroke,
}

impl EllipseOutline {
    pub const fn new(bounds: BoundingBox, stroke: Stroke) -> Self {
        Self { bounds, stroke }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let ring = Ring::new(self.bounds, self.stroke.width);
        fill_matching(canvas, self.bounds, self.stroke, |x, y| ring.contains(x, y));
    }
}

/// Segment of an ellipse outline. Angles are in degrees, measured clockwise
/// from the 3 o'clock position of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcOutline {
    pub bounds: BoundingBox,
    pub start_deg: f32,
    pub end_deg: f32,
    pub stroke: Stroke,
}

impl ArcOutline {
    pub const fn new(bounds: BoundingBox, start_deg: f32, end_deg: f32, stroke: Stroke) -> Self {
        Self {
            bounds,
            start_deg,
            end_deg,
            stroke,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let ring = Ring::new(self.bounds, self.stroke.width);
        let span = AngleSpan::new(self.start_deg, self.end_deg);
        fill_matching(canvas, self.bounds, self.stroke, |x, y| {
            ring.contains(x, y) && span.contains(ring.angle_deg(x, y))
        });
    }
}

fn fill_matching(
    canvas: &mut Canvas,
    bounds: BoundingBox,
    stroke: Stroke,
    matches: impl Fn(i32, i32) -> bool,
) {
    let Some(clipped) = canvas.clip(bounds) else {
        return;
    };
    for y in clipped.y0..=clipped.y1 {
        for x in clipped.x0..=clipped.x1 {
            if matches(x, y) {
                canvas.set_pixel(x, y, stroke.color);
            }
        }
    }
}

/// Band between the outer ellipse of a bounding box and the same ellipse
/// shrunk by the stroke width.
#[derive(Debug, Clone, Copy)]
struct Ring {
    cx: f32,
    cy: f32,
    outer_rx: f32,
    outer_ry: f32,
    inner_rx: f32,
    inner_ry: f32,
}

impl Ring {
    fn new(bounds: BoundingBox, width: u8) -> Self {
        let (cx, cy) = bounds.center();
        let (outer_rx, outer_ry) = bounds.half_extents();
        let width = f32::from(width);
        Self {
            cx,
            cy,
            outer_rx,
            outer_ry,
            inner_rx: outer_rx - width,
            inner_ry: outer_ry - width,
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        let dx = x as f32 - self.cx;
        let dy = y as f32 - self.cy;
        if normalized_distance(dx, dy, self.outer_rx, self.outer_ry) > 1.0 {
            return false;
        }
        if self.inner_rx <= 0.0 || self.inner_ry <= 0.0 {
            return true;
        }
        normalized_distance(dx, dy, self.inner_rx, self.inner_ry) >= 1.0
    }

    /// Parametric angle of the pixel in [0, 360), clockwise on screen.
    fn angle_deg(&self, x: i32, y: i32) -> f32 {
        let dx = (x as f32 - self.cx) / self.outer_rx;
        let dy = (y as f32 - self.cy) / self.outer_ry;
        dy.atan2(dx).to_degrees().rem_euclid(360.0)
    }
}

fn normalized_distance(dx: f32, dy: f32, rx: f32, ry: f32) -> f32 {
    let nx = dx / rx;
    let ny = dy / ry;
    nx * nx + ny * ny
}

#[derive(Debug, Clone, Copy)]
struct AngleSpan {
    start: f32,
    sweep: f32,
}

impl AngleSpan {
    /// An end angle before the start wraps forward by whole turns.
    fn new(start_deg: f32, end_deg: f32) -> Self {
        let delta = end_deg - start_deg;
        let sweep = if delta >= 0.0 {
            delta
        } else {
            delta.rem_euclid(360.0)
        };
        Self {
            start: start_deg.rem_euclid(360.0),
            sweep,
        }
    }

    fn contains(&self, angle_deg: f32) -> bool {
        if self.sweep >= 360.0 {
            return true;
        }
        if self.sweep == 0.0 {
            return false;
        }
        (angle_deg - self.start).rem_euclid(360.0) <= self.sweep
    }
}
