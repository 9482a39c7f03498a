//! Gauge: two concentric open arcs with a needle pointing to the upper right.

use crate::canvas::Canvas;
use crate::geometry::{BoundingBox, Color, Point};
use crate::render::{Shape, Stroke};

pub const SIZE: u32 = 64;

pub const OUTER_ARC: Shape = Shape::arc(
    BoundingBox::new(8, 8, 56, 56),
    45.0,
    315.0,
    Stroke::new(Color::WHITE, 6),
);

pub const INNER_ARC: Shape = Shape::arc(
    BoundingBox::new(16, 16, 48, 48),
    60.0,
    300.0,
    Stroke::new(Color::WHITE, 4),
);

pub const NEEDLE: Shape = Shape::line(
    Point::new(32, 32),
    Point::new(54, 10),
    Stroke::new(Color::WHITE, 4),
);

pub const SHAPES: [Shape; 3] = [OUTER_ARC, INNER_ARC, NEEDLE];

pub fn render() -> Canvas {
    super::render_square(SIZE, &SHAPES)
}
