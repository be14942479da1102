//! Shared state and per-frame contract for every visual object on the display.
//!
//! A concrete entity owns a [`Body`] (position, size, offset, heading, colour,
//! visibility and kinematic state) and implements [`Entity`] to say how it
//! renders and how it changes between frames. The host calls
//! [`Entity::tick`] and then [`Entity::draw`] on every entity once per frame.

use macroquad::color::{Color, WHITE};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use super::surface::Surface;
use super::vector::{SharedVector, Vector2D};

/// Field values used to build a [`Body`].
///
/// Every field is optional in serialized form; missing ones take the
/// defaults listed on each field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Horizontal centre. Default 0.
    pub x: f32,
    /// Top edge. Default 0.
    pub y: f32,
    /// Width, clamped to be non-negative. Default 0.
    pub width: f32,
    /// Height, clamped to be non-negative. Default 0.
    pub height: f32,
    /// Horizontal displacement applied when aligning to a target. Default 0.
    pub x_offset: f32,
    /// Vertical displacement applied when aligning to a target. Default 0.
    pub y_offset: f32,
    /// Heading in degrees counterclockwise from the positive x-axis. Default 90.
    pub direction: f32,
    /// Display colour. Default white.
    #[serde(with = "rgba")]
    pub color: Color,
    /// Whether `draw` has any effect. Default true.
    pub visible: bool,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
            direction: 90.0,
            color: WHITE,
            visible: true,
        }
    }
}

impl EntityConfig {
    /// Configuration for an entity placed at `(x, y)` with every other field defaulted.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Configuration for a widget positioned relative to an anchor.
    ///
    /// The position stays at the origin until the entity is aligned.
    pub fn anchored(x_offset: f32, y_offset: f32, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            x_offset,
            y_offset,
            ..Self::default()
        }
    }
}

/// State shared by every entity.
///
/// `x` is the horizontal centre of the bounding box and `y` its top edge.
#[derive(Debug)]
pub struct Body {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    x_offset: f32,
    y_offset: f32,
    direction: f32,
    color: Color,
    velocity: SharedVector,
    acceleration: SharedVector,
    visible: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self::new(&EntityConfig::default())
    }
}

impl Body {
    /// Builds a body from `config` with zero velocity and acceleration.
    pub fn new(config: &EntityConfig) -> Self {
        Self {
            x: config.x,
            y: config.y,
            width: config.width.max(0.0),
            height: config.height.max(0.0),
            x_offset: config.x_offset,
            y_offset: config.y_offset,
            direction: config.direction,
            color: config.color,
            velocity: Vector2D::default().into_shared(),
            acceleration: Vector2D::default().into_shared(),
            visible: config.visible,
        }
    }

    /// Horizontal centre.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Sets the horizontal centre.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Top edge.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Sets the top edge.
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Bounding box width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the width; negative values become 0.
    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(0.0);
    }

    /// Bounding box height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Sets the height; negative values become 0.
    pub fn set_height(&mut self, height: f32) {
        self.height = height.max(0.0);
    }

    /// Horizontal alignment offset.
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    /// Sets the horizontal alignment offset.
    pub fn set_x_offset(&mut self, x_offset: f32) {
        self.x_offset = x_offset;
    }

    /// Vertical alignment offset.
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    /// Sets the vertical alignment offset.
    pub fn set_y_offset(&mut self, y_offset: f32) {
        self.y_offset = y_offset;
    }

    /// Heading in degrees, counterclockwise from the positive x-axis.
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Sets the heading in degrees.
    pub fn set_direction(&mut self, direction: f32) {
        self.direction = direction;
    }

    /// Display colour.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the display colour.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Handle to the velocity vector. Cloning the handle aliases it.
    pub fn velocity(&self) -> &SharedVector {
        &self.velocity
    }

    /// Replaces the velocity handle.
    pub fn set_velocity(&mut self, velocity: SharedVector) {
        self.velocity = velocity;
    }

    /// Handle to the acceleration vector.
    pub fn acceleration(&self) -> &SharedVector {
        &self.acceleration
    }

    /// Replaces the acceleration handle.
    pub fn set_acceleration(&mut self, acceleration: SharedVector) {
        self.acceleration = acceleration;
    }

    /// Whether drawing has any visible effect.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the entity. Ticking is unaffected.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Moves the position by `velocity * dt`.
    pub fn apply_velocity(&mut self, dt: f32) {
        let velocity = *self.velocity.borrow();
        self.x += velocity.x() * dt;
        self.y += velocity.y() * dt;
    }

    /// Adds `acceleration * dt` to the velocity.
    pub fn apply_acceleration(&mut self, dt: f32) {
        // Copy first: the two handles may point at the same vector.
        let acceleration = *self.acceleration.borrow();
        let mut velocity = self.velocity.borrow_mut();
        let (vx, vy) = (velocity.x(), velocity.y());
        velocity.set_x(vx + acceleration.x() * dt);
        velocity.set_y(vy + acceleration.y() * dt);
    }

    /// Integrates one step: position moves with the velocity held before this
    /// call, and only then does acceleration update the velocity.
    pub fn apply_forces(&mut self, dt: f32) {
        self.apply_velocity(dt);
        self.apply_acceleration(dt);
    }

    /// Places this body at `target`'s position plus this body's offset, shares
    /// `target`'s velocity handle and copies its heading.
    pub fn align_with(&mut self, target: &Body) {
        self.x = target.x + self.x_offset;
        self.y = target.y + self.y_offset;
        self.velocity = Rc::clone(&target.velocity);
        self.direction = target.direction;
    }

    /// Places this body at `(x, y)` plus this body's offset.
    pub fn align_with_point(&mut self, x: f32, y: f32) {
        self.x = x + self.x_offset;
        self.y = y + self.y_offset;
    }
}

/// Per-frame contract implemented by every visual object.
///
/// Implementors expose their [`Body`]; the kinematic and alignment operations
/// are provided on top of it.
pub trait Entity {
    /// Shared entity state.
    fn body(&self) -> &Body;

    /// Mutable shared entity state.
    fn body_mut(&mut self) -> &mut Body;

    /// Renders the entity. Must not change any state.
    ///
    /// # Arguments
    ///
    /// * `surface` - Drawing capability supplied by the host backend.
    fn draw(&self, surface: &mut dyn Surface);

    /// Updates the entity. Runs whether or not the entity is visible.
    ///
    /// # Arguments
    ///
    /// * `dt` - Time elapsed since the last tick in seconds.
    fn tick(&mut self, dt: f32);

    /// Whether drawing has any visible effect.
    fn is_visible(&self) -> bool {
        self.body().is_visible()
    }

    /// Shows or hides the entity.
    fn set_visible(&mut self, visible: bool) {
        self.body_mut().set_visible(visible);
    }

    /// See [`Body::apply_velocity`].
    fn apply_velocity(&mut self, dt: f32) {
        self.body_mut().apply_velocity(dt);
    }

    /// See [`Body::apply_acceleration`].
    fn apply_acceleration(&mut self, dt: f32) {
        self.body_mut().apply_acceleration(dt);
    }

    /// See [`Body::apply_forces`].
    fn apply_forces(&mut self, dt: f32) {
        self.body_mut().apply_forces(dt);
    }

    /// See [`Body::align_with`].
    fn align_with(&mut self, target: &dyn Entity) {
        self.body_mut().align_with(target.body());
    }

    /// See [`Body::align_with_point`].
    fn align_with_point(&mut self, x: f32, y: f32) {
        self.body_mut().align_with_point(x, y);
    }
}

/// Serializes a colour as `[r, g, b, a]`.
mod rgba {
    use macroquad::color::Color;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        [color.r, color.g, color.b, color.a].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let [r, g, b, a] = <[f32; 4]>::deserialize(deserializer)?;
        Ok(Color::new(r, g, b, a))
    }
}
