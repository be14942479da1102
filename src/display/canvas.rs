//! macroquad backend for [`Surface`].

use macroquad::color::{Color, WHITE};
use macroquad::shapes::{draw_circle, draw_ellipse, draw_rectangle};

use super::surface::Surface;

/// Draws straight to the current macroquad frame.
///
/// Only usable from inside a running macroquad window.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    fill: Color,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates a canvas with a white fill.
    pub fn new() -> Self {
        Self { fill: WHITE }
    }
}

impl Surface for Canvas {
    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        draw_rectangle(x, y, width, height, self.fill);
    }

    fn fill_round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
        if r <= 0.0 {
            draw_rectangle(x, y, width, height, self.fill);
            return;
        }

        // Cross of two rectangles, corners filled by circles
        draw_rectangle(x + r, y, width - 2.0 * r, height, self.fill);
        draw_rectangle(x, y + r, width, height - 2.0 * r, self.fill);
        for (cx, cy) in [
            (x + r, y + r),
            (x + width - r, y + r),
            (x + r, y + height - r),
            (x + width - r, y + height - r),
        ] {
            draw_circle(cx, cy, r, self.fill);
        }
    }

    fn fill_oval(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (rx, ry) = (width / 2.0, height / 2.0);
        draw_ellipse(x + rx, y + ry, rx, ry, 0.0, self.fill);
    }
}
