//! Usage bars: three white vertical bars of increasing height.

use crate::canvas::Canvas;
use crate::geometry::{BoundingBox, Color};
use crate::render::Shape;

pub const SIZE: u32 = 22;
const CORNER_RADIUS: u16 = 1;

pub const SHAPES: [Shape; 3] = [
    Shape::rounded_rectangle(BoundingBox::new(3, 11, 6, 16), CORNER_RADIUS, Color::WHITE),
    Shape::rounded_rectangle(BoundingBox::new(9, 7, 12, 16), CORNER_RADIUS, Color::WHITE),
    Shape::rounded_rectangle(BoundingBox::new(15, 2, 18, 16), CORNER_RADIUS, Color::WHITE),
];

pub fn render() -> Canvas {
    super::render_square(SIZE, &SHAPES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_height(canvas: &Canvas, x: i32) -> usize {
        (0..SIZE as i32)
            .filter(|&y| canvas.pixel(x, y) == Some(Color::WHITE))
            .count()
    }

    #[test]
    fn bars_grow_from_left_to_right() {
        let canvas = render();
        let heights = [
            column_height(&canvas, 4),
            column_height(&canvas, 10),
            column_height(&canvas, 16),
        ];
        assert_eq!(heights, [6, 10, 15]);
    }

    #[test]
    fn bars_share_a_baseline() {
        let canvas = render();
        for x in [4, 10, 16] {
            assert_eq!(canvas.pixel(x, 16), Some(Color::WHITE));
            assert_eq!(canvas.pixel(x, 17), Some(Color::TRANSPARENT));
        }
    }

    #[test]
    fn gaps_between_bars_stay_transparent() {
        let canvas = render();
        for x in [0, 1, 2, 7, 8, 13, 14, 19, 20, 21] {
            assert_eq!(column_height(&canvas, x), 0, "column {x}");
        }
    }
}
