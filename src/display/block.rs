//! Solid rectangular entity.

use super::entity::{Body, Entity, EntityConfig};
use super::surface::Surface;

/// A filled rectangle in the entity's colour, centred on `x` with its top at `y`.
///
/// Each tick integrates the block's velocity and acceleration.
#[derive(Debug)]
pub struct Block {
    body: Body,
}

impl Block {
    /// Creates a block from `config`.
    pub fn new(config: &EntityConfig) -> Self {
        Self {
            body: Body::new(config),
        }
    }
}

impl Entity for Block {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if !self.body.is_visible() {
            return;
        }
        surface.set_fill(self.body.color());
        surface.fill_rect(
            self.body.x() - self.body.width() / 2.0,
            self.body.y(),
            self.body.width(),
            self.body.height(),
        );
    }

    fn tick(&mut self, dt: f32) {
        self.body.apply_forces(dt);
    }
}
