//! Gauge showing a vehicle's altitude against a self-scaling ceiling.
//!
//! The indicator is a rounded frame with tick marks and a marker dot. The dot
//! sits at `altitude / max_altitude` of the way up the gauge. Whenever a tick
//! sees the altitude above the ceiling, the ceiling doubles (once per tick), so
//! the dot may stay off-scale for a few frames after a fast climb. While it is
//! off-scale it is simply not drawn.

use macroquad::color::{BLACK, Color, LIGHTGRAY};
use macroquad::math::Rect;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::entity::{Body, Entity, EntityConfig};
use super::params::Params;
use super::surface::Surface;

/// Corner radius of the gauge frame.
pub const FRAME_CORNER_RADIUS: f32 = 10.0;
/// Height of the top and bottom ticks.
pub const MAJOR_TICK_HEIGHT: f32 = 5.0;
/// Each tick tier is this factor smaller than the one above it.
pub const TICK_SCALE: f32 = 1.5;
/// Number of ticks between the top and bottom ticks.
pub const MINOR_TICK_COUNT: usize = 3;
/// Radius of the altitude marker dot.
pub const MARKER_RADIUS: f32 = 3.0;
/// How far the marker may overhang the gauge before it is hidden.
pub const MARKER_TOLERANCE: f32 = 2.0;

/// Gauge background.
pub const FRAME_COLOR: Color = LIGHTGRAY;
/// Tick mark colour.
pub const TICK_COLOR: Color = BLACK;
/// Marker colour (cornflower blue).
pub const MARKER_COLOR: Color = Color::from_rgba(100, 149, 237, 255);

/// Anything that can report its current altitude.
pub trait AltitudeSource {
    /// Current altitude. Expected to be non-negative in normal operation.
    fn altitude(&self) -> f32;
}

impl AltitudeSource for Cell<f32> {
    fn altitude(&self) -> f32 {
        self.get()
    }
}

impl<T: AltitudeSource + ?Sized> AltitudeSource for RefCell<T> {
    fn altitude(&self) -> f32 {
        self.borrow().altitude()
    }
}

/// Tick mark rectangles for one frame, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMarks {
    /// Top and bottom ticks.
    pub major: [Rect; 2],
    /// Evenly spaced ticks between the major ones, top to bottom.
    pub minor: [Rect; MINOR_TICK_COUNT],
}

/// Where the altitude marker goes this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// Marker drawn centred on `(x, y)`.
    Visible {
        /// Horizontal centre.
        x: f32,
        /// Vertical centre.
        y: f32,
    },
    /// Marker centre `y` falls outside the gauge; nothing is drawn.
    Suppressed {
        /// Vertical centre the marker would have had.
        y: f32,
    },
}

/// Altitude gauge tracking a shared vehicle.
pub struct AltitudeIndicator {
    body: Body,
    vehicle: Rc<dyn AltitudeSource>,
    max_altitude: f32,
}

impl fmt::Debug for AltitudeIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AltitudeIndicator")
            .field("body", &self.body)
            .field("max_altitude", &self.max_altitude)
            .finish_non_exhaustive()
    }
}

impl AltitudeIndicator {
    /// Creates an indicator positioned relative to an anchor.
    ///
    /// # Arguments
    ///
    /// * `x_offset` - Horizontal offset from the anchor
    /// * `y_offset` - Vertical offset from the anchor
    /// * `width` - Gauge width
    /// * `height` - Gauge height
    /// * `vehicle` - Shared altitude source
    /// * `initial_altitude` - Starting ceiling; must be strictly positive
    pub fn new(
        x_offset: f32,
        y_offset: f32,
        width: f32,
        height: f32,
        vehicle: Rc<dyn AltitudeSource>,
        initial_altitude: f32,
    ) -> Self {
        Self {
            body: Body::new(&EntityConfig::anchored(x_offset, y_offset, width, height)),
            vehicle,
            max_altitude: initial_altitude,
        }
    }

    /// Creates an indicator that sits at a fixed screen height (vertical offset 0).
    pub fn with_fixed_height(
        x_offset: f32,
        width: f32,
        height: f32,
        vehicle: Rc<dyn AltitudeSource>,
        initial_altitude: f32,
    ) -> Self {
        Self::new(x_offset, 0.0, width, height, vehicle, initial_altitude)
    }

    /// Creates an indicator from validated display parameters.
    pub fn from_params(params: &Params, vehicle: Rc<dyn AltitudeSource>) -> Self {
        if params.indicator_fixed_height {
            Self::with_fixed_height(
                params.indicator_x_offset,
                params.indicator_width,
                params.indicator_height,
                vehicle,
                params.initial_max_altitude,
            )
        } else {
            Self::new(
                params.indicator_x_offset,
                params.indicator_y_offset,
                params.indicator_width,
                params.indicator_height,
                vehicle,
                params.initial_max_altitude,
            )
        }
    }

    /// Current scale ceiling.
    pub fn max_altitude(&self) -> f32 {
        self.max_altitude
    }

    /// Raises the ceiling to `max_altitude`.
    ///
    /// The ceiling never decreases; lower (or NaN) values are ignored.
    pub fn set_max_altitude(&mut self, max_altitude: f32) {
        if max_altitude >= self.max_altitude {
            self.max_altitude = max_altitude;
        } else {
            tracing::warn!(
                requested = max_altitude,
                current = self.max_altitude,
                "ignoring altitude ceiling below the current one"
            );
        }
    }

    /// Switches the tracked vehicle.
    pub fn set_vehicle(&mut self, vehicle: Rc<dyn AltitudeSource>) {
        self.vehicle = vehicle;
    }

    /// Altitude currently reported by the vehicle.
    pub fn vehicle_altitude(&self) -> f32 {
        self.vehicle.altitude()
    }

    /// Fraction of the ceiling reached by the vehicle.
    pub fn proportion(&self) -> f32 {
        self.vehicle.altitude() / self.max_altitude
    }

    /// Tick mark geometry for the current position and size.
    pub fn tick_marks(&self) -> TickMarks {
        let (x, y) = (self.body.x(), self.body.y());
        let height = self.body.height();

        let major_width = self.body.width() / TICK_SCALE;
        let minor_width = major_width / TICK_SCALE;
        let minor_height = MAJOR_TICK_HEIGHT / TICK_SCALE;

        let major = [
            Rect::new(x - major_width / 2.0, y, major_width, MAJOR_TICK_HEIGHT),
            Rect::new(
                x - major_width / 2.0,
                y + height - MAJOR_TICK_HEIGHT,
                major_width,
                MAJOR_TICK_HEIGHT,
            ),
        ];

        let spacing = (height - MAJOR_TICK_HEIGHT * 2.0) / (MINOR_TICK_COUNT + 1) as f32;
        let minor = std::array::from_fn(|i| {
            Rect::new(
                x - minor_width / 2.0,
                y + MAJOR_TICK_HEIGHT + (i + 1) as f32 * spacing,
                minor_width,
                minor_height,
            )
        });

        TickMarks { major, minor }
    }

    /// Marker placement for the vehicle's current altitude.
    pub fn marker(&self) -> Marker {
        let (top, height) = (self.body.y(), self.body.height());
        let marker_y =
            top + height - MARKER_RADIUS - self.proportion() * (height - MARKER_RADIUS);

        let fits_top = marker_y - MARKER_RADIUS >= top - MARKER_TOLERANCE;
        let fits_bottom = marker_y + MARKER_RADIUS <= top + height + MARKER_TOLERANCE;
        if fits_top && fits_bottom {
            Marker::Visible {
                x: self.body.x(),
                y: marker_y,
            }
        } else {
            Marker::Suppressed { y: marker_y }
        }
    }

    fn draw_tick_marks(&self, surface: &mut dyn Surface) {
        surface.set_fill(TICK_COLOR);
        let ticks = self.tick_marks();
        for tick in ticks.major.iter().chain(ticks.minor.iter()) {
            surface.fill_rect(tick.x, tick.y, tick.w, tick.h);
        }
    }

    fn draw_marker(&self, surface: &mut dyn Surface) {
        match self.marker() {
            Marker::Visible { x, y } => {
                surface.set_fill(MARKER_COLOR);
                surface.fill_oval(
                    x - MARKER_RADIUS,
                    y - MARKER_RADIUS,
                    MARKER_RADIUS * 2.0,
                    MARKER_RADIUS * 2.0,
                );
            }
            Marker::Suppressed { y } => {
                tracing::trace!(marker_y = y, "altitude marker off scale");
            }
        }
    }
}

impl Entity for AltitudeIndicator {
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

        surface.set_fill(FRAME_COLOR);
        surface.fill_round_rect(
            self.body.x() - self.body.width() / 2.0,
            self.body.y(),
            self.body.width(),
            self.body.height(),
            FRAME_CORNER_RADIUS,
        );

        self.draw_tick_marks(surface);
        self.draw_marker(surface);
    }

    fn tick(&mut self, _dt: f32) {
        let altitude = self.vehicle.altitude();
        // One doubling per tick, however far the reading overshoots
        if altitude > self.max_altitude {
            self.max_altitude *= 2.0;
            tracing::debug!(
                altitude,
                max_altitude = self.max_altitude,
                "altitude ceiling doubled"
            );
        }
    }
}
