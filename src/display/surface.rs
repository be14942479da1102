//! Minimal drawing capability that entities render through.
//!
//! Backends implement [`Surface`]; entities never touch backend specifics.
//! [`RecordingSurface`] is a headless backend that keeps every call.

use macroquad::color::{Color, WHITE};

/// Immediate-mode fill operations.
///
/// Shapes are filled with the colour from the most recent [`Surface::set_fill`].
pub trait Surface {
    /// Sets the colour used by subsequent fills.
    fn set_fill(&mut self, color: Color);

    /// Fills an axis-aligned rectangle with top-left corner `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fills a rectangle with rounded corners of the given radius.
    fn fill_round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32);

    /// Fills the ellipse inscribed in the rectangle with top-left corner `(x, y)`.
    fn fill_oval(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// A single recorded fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Output of [`Surface::fill_rect`].
    Rect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill colour at the time of the call.
        color: Color,
    },
    /// Output of [`Surface::fill_round_rect`].
    RoundRect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Corner radius.
        radius: f32,
        /// Fill colour at the time of the call.
        color: Color,
    },
    /// Output of [`Surface::fill_oval`].
    Oval {
        /// Left edge of the bounding box.
        x: f32,
        /// Top edge of the bounding box.
        y: f32,
        /// Bounding box width.
        width: f32,
        /// Bounding box height.
        height: f32,
        /// Fill colour at the time of the call.
        color: Color,
    },
}

/// Surface that records fills instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    fill: Color,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Creates an empty recording with a white fill.
    pub fn new() -> Self {
        Self {
            fill: WHITE,
            commands: Vec::new(),
        }
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded rectangles.
    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }

    /// Recorded ovals.
    pub fn ovals(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Oval { .. }))
    }

    /// Drops every recorded command, keeping the current fill.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color: self.fill,
        });
    }

    fn fill_round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        self.commands.push(DrawCommand::RoundRect {
            x,
            y,
            width,
            height,
            radius,
            color: self.fill,
        });
    }

    fn fill_oval(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Oval {
            x,
            y,
            width,
            height,
            color: self.fill,
        });
    }
}
