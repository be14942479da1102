//! Two-component vectors used for entity velocity and acceleration.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// A mutable 2D vector.
///
/// Plain storage: owners read and write the components in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    x: f32,
    y: f32,
}

/// Shared-ownership handle to a [`Vector2D`].
///
/// Entities hold their velocity and acceleration through this handle so that
/// [`Body::align_with`](super::entity::Body::align_with) can make two entities
/// share one velocity: a write through either is visible through both.
pub type SharedVector = Rc<RefCell<Vector2D>>;

impl Vector2D {
    /// Creates a vector from its components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal component.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical component.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Sets the horizontal component.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Sets the vertical component.
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Moves this vector behind a fresh shared handle.
    pub fn into_shared(self) -> SharedVector {
        Rc::new(RefCell::new(self))
    }
}

/// Creates a new, unaliased shared vector.
pub fn shared(x: f32, y: f32) -> SharedVector {
    Vector2D::new(x, y).into_shared()
}
