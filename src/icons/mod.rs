//! Fixed drawing sequences for each tray icon design.

pub mod bars;
pub mod gauge;
pub mod ring;

use crate::canvas::Canvas;
use crate::render::{self, Shape};

/// Allocates a transparent `size` x `size` canvas and applies `shapes` to it.
pub fn render_square(size: u32, shapes: &[Shape]) -> Canvas {
    let mut canvas = Canvas::new(size, size);
    render::draw_shapes(&mut canvas, shapes);
    canvas
}
