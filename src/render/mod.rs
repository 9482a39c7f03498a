mod ellipse;
mod line;
mod rectangle;

use crate::canvas::Canvas;
pub use crate::geometry::{BoundingBox, Color, Point};
pub use ellipse::{ArcOutline, EllipseOutline};
pub use line::LineStroke;
pub use rectangle::{RectangleFill, RoundedRectangleFill};

/// Outline color and thickness shared by ellipses, arcs and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Color,
    pub width: u8,
}

impl Stroke {
    pub const fn new(color: Color, width: u8) -> Self {
        Self {
            color,
            width: clamp_u8_range(width, 1, 255),
        }
    }
}

/// One drawing instruction. Instructions are applied in order and each
/// replaces the pixels it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Ellipse(EllipseOutline),
    Arc(ArcOutline),
    Line(LineStroke),
    Rectangle(RectangleFill),
    RoundedRectangle(RoundedRectangleFill),
}

impl Shape {
    pub const fn ellipse(bounds: BoundingBox, stroke: Stroke) -> Self {
        Self::Ellipse(EllipseOutline::new(bounds, stroke))
    }

    pub const fn arc(bounds: BoundingBox, start_deg: f32, end_deg: f32, stroke: Stroke) -> Self {
        Self::Arc(ArcOutline::new(bounds, start_deg, end_deg, stroke))
    }

    pub const fn line(start: Point, end: Point, stroke: Stroke) -> Self {
        Self::Line(LineStroke::new(start, end, stroke))
    }

    pub const fn rectangle(bounds: BoundingBox, fill: Color) -> Self {
        Self::Rectangle(RectangleFill::new(bounds, fill))
    }

    pub const fn rounded_rectangle(bounds: BoundingBox, radius: u16, fill: Color) -> Self {
        Self::RoundedRectangle(RoundedRectangleFill::new(bounds, radius, fill))
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ellipse(_) => "ellipse",
            Self::Arc(_) => "arc",
            Self::Line(_) => "line",
            Self::Rectangle(_) => "rectangle",
            Self::RoundedRectangle(_) => "rounded_rectangle",
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Self::Ellipse(outline) => outline.draw(canvas),
            Self::Arc(outline) => outline.draw(canvas),
            Self::Line(stroke) => stroke.draw(canvas),
            Self::Rectangle(fill) => fill.draw(canvas),
            Self::RoundedRectangle(fill) => fill.draw(canvas),
        }
    }
}

/// Applies `shapes` to `canvas` in the given order.
pub fn draw_shapes(canvas: &mut Canvas, shapes: &[Shape]) {
    for (index, shape) in shapes.iter().enumerate() {
        tracing::debug!(index, kind = shape.kind(), "drawing shape");
        shape.draw(canvas);
    }
}

const fn clamp_u8_range(value: u8, min: u8, max: u8) -> u8 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
