//! White "C" ring: a circle outline with its right-middle section cut out.

use crate::canvas::Canvas;
use crate::geometry::{BoundingBox, Color};
use crate::render::{Shape, Stroke};

pub const SIZE: u32 = 32;

pub const SHAPES: [Shape; 2] = [
    Shape::ellipse(BoundingBox::new(2, 2, 30, 30), Stroke::new(Color::WHITE, 4)),
    Shape::rectangle(BoundingBox::new(16, 8, 32, 24), Color::TRANSPARENT),
];

pub fn render() -> Canvas {
    super::render_square(SIZE, &SHAPES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_opens_on_the_right() {
        let canvas = render();
        assert_eq!((canvas.width(), canvas.height()), (SIZE, SIZE));
        assert_eq!(canvas.pixel(2, 16), Some(Color::WHITE));
        assert_eq!(canvas.pixel(16, 2), Some(Color::WHITE));
        assert_eq!(canvas.pixel(16, 30), Some(Color::WHITE));
        for y in 8..=24 {
            for x in 16..SIZE as i32 {
                assert_eq!(canvas.pixel(x, y), Some(Color::TRANSPARENT), "({x}, {y})");
            }
        }
    }

    #[test]
    fn ring_keeps_arms_above_and_below_the_cut() {
        let canvas = render();
        assert_eq!(canvas.pixel(27, 7), Some(Color::WHITE));
        assert_eq!(canvas.pixel(27, 25), Some(Color::WHITE));
    }

    #[test]
    fn ring_center_and_corners_stay_transparent() {
        let canvas = render();
        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31), (16, 16), (10, 16)] {
            assert_eq!(canvas.pixel(x, y), Some(Color::TRANSPARENT), "({x}, {y})");
        }
    }
}
