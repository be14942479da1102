//! # Flight HUD - Heads-up display entities for a flight simulation
//!
//! Visual objects drawn on a 2D surface every frame, and the gauges that
//! report a tracked vehicle's state.
//!
//! ## Features
//!
//! - Entity model with position, size, alignment offset, heading and colour
//! - Explicit Euler-style kinematics (velocity first, then acceleration)
//! - Alignment to other entities with a shared velocity handle
//! - Altitude indicator with a self-doubling ceiling
//! - Backend-agnostic drawing through a small [`display::surface::Surface`] trait
//! - macroquad backend and a headless recording backend
//! - JSON parameter files
//!
//! ## Frame contract
//!
//! The host calls [`display::entity::Entity::tick`] and then
//! [`display::entity::Entity::draw`] on every entity, once per frame, from a
//! single thread.
//!
//! ## Logging
//!
//! Ceiling rescales, rejected ceiling writes and parameter file activity are
//! reported through `tracing`. Hosts install the subscriber; the bundled
//! demo uses `tracing-subscriber`'s formatter.

/// Entities, gauges and the drawing capability they render through.
pub mod display {
    /// Altitude gauge with an auto-scaling ceiling.
    pub mod altitude_indicator;
    /// Solid rectangle entity.
    pub mod block;
    /// macroquad implementation of the drawing capability.
    pub mod canvas;
    /// Shared entity state and the per-frame [`entity::Entity`] contract.
    pub mod entity;
    /// Display and flight parameters.
    pub mod params;
    /// Drawing capability and a recording implementation.
    pub mod surface;
    /// Mutable 2D vectors and their shared handle.
    pub mod vector;
}
