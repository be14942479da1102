#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use flight_hud::display::altitude_indicator::{
    AltitudeIndicator, AltitudeSource, FRAME_COLOR, MARKER_COLOR, MINOR_TICK_COUNT, Marker,
    TICK_COLOR,
};
use flight_hud::display::entity::Entity;
use flight_hud::display::params::Params;
use flight_hud::display::surface::{DrawCommand, RecordingSurface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Indicator at (50, 10), 40 wide and 200 tall, ceiling 100.
fn create_test_indicator(altitude: f32) -> (AltitudeIndicator, Rc<Cell<f32>>) {
    let vehicle = Rc::new(Cell::new(altitude));
    let mut indicator = AltitudeIndicator::new(0.0, 0.0, 40.0, 200.0, vehicle.clone(), 100.0);
    indicator.align_with_point(50.0, 10.0);
    (indicator, vehicle)
}

#[test]
fn test_tick_below_ceiling_keeps_ceiling() {
    let (mut indicator, vehicle) = create_test_indicator(50.0);

    indicator.tick(0.016);
    assert_eq!(indicator.max_altitude(), 100.0);

    // Equal is not above
    vehicle.set(100.0);
    indicator.tick(0.016);
    assert_eq!(indicator.max_altitude(), 100.0);
}

#[test]
fn test_tick_doubles_once_per_call() {
    let (mut indicator, vehicle) = create_test_indicator(250.0);

    indicator.tick(0.016);
    assert_eq!(indicator.max_altitude(), 200.0);

    indicator.tick(0.016);
    assert_eq!(indicator.max_altitude(), 400.0);

    indicator.tick(0.016);
    assert_eq!(indicator.max_altitude(), 400.0);

    vehicle.set(1.0e6);
    indicator.tick(0.016);
    assert_eq!(indicator.max_altitude(), 800.0);
}

#[test]
fn test_ceiling_never_decreases() {
    let (mut indicator, vehicle) = create_test_indicator(150.0);
    let mut previous = indicator.max_altitude();

    for altitude in [150.0, 10.0, 900.0, 0.0, -50.0, 3000.0, 20.0] {
        vehicle.set(altitude);
        indicator.tick(0.016);
        assert!(indicator.max_altitude() >= previous);
        previous = indicator.max_altitude();
    }
}

#[test]
fn test_set_max_altitude_only_raises() {
    let (mut indicator, _vehicle) = create_test_indicator(0.0);

    indicator.set_max_altitude(50.0);
    assert_eq!(indicator.max_altitude(), 100.0);

    indicator.set_max_altitude(f32::NAN);
    assert_eq!(indicator.max_altitude(), 100.0);

    indicator.set_max_altitude(350.0);
    assert_eq!(indicator.max_altitude(), 350.0);
}

#[test]
fn test_tick_runs_while_hidden() {
    let (mut indicator, _vehicle) = create_test_indicator(250.0);
    indicator.set_visible(false);

    indicator.tick(0.016);

    assert_eq!(indicator.max_altitude(), 200.0);
}

#[test]
fn test_marker_halfway() {
    let (indicator, _vehicle) = create_test_indicator(50.0);

    assert_eq!(indicator.proportion(), 0.5);
    assert_eq!(indicator.marker(), Marker::Visible { x: 50.0, y: 108.5 });
}

#[test]
fn test_marker_on_ground() {
    let (indicator, _vehicle) = create_test_indicator(0.0);

    assert_eq!(indicator.marker(), Marker::Visible { x: 50.0, y: 207.0 });
}

#[test]
fn test_marker_suppressed_below_gauge() {
    let (indicator, _vehicle) = create_test_indicator(-10.0);

    match indicator.marker() {
        Marker::Suppressed { y } => assert!(y + 3.0 > 10.0 + 200.0 + 2.0),
        visible @ Marker::Visible { .. } => panic!("expected suppressed marker, got {visible:?}"),
    }
}

#[test]
fn test_marker_suppressed_above_gauge() {
    let (indicator, _vehicle) = create_test_indicator(250.0);

    assert!(matches!(indicator.marker(), Marker::Suppressed { .. }));
}

#[test]
fn test_marker_at_ceiling_overhangs_top() {
    // Centre lands on the top edge, so the dot pokes 3 units above it
    let (indicator, _vehicle) = create_test_indicator(100.0);

    assert_eq!(indicator.marker(), Marker::Suppressed { y: 10.0 });
}

#[test]
fn test_marker_returns_after_rescale() {
    let (mut indicator, _vehicle) = create_test_indicator(150.0);
    assert!(matches!(indicator.marker(), Marker::Suppressed { .. }));

    indicator.tick(0.016);

    match indicator.marker() {
        Marker::Visible { y, .. } => assert_relative_eq!(y, 207.0 - 0.75 * 197.0),
        suppressed @ Marker::Suppressed { .. } => {
            panic!("expected visible marker, got {suppressed:?}")
        }
    }
}

#[test]
fn test_tick_marks_layout() {
    let (indicator, _vehicle) = create_test_indicator(0.0);
    let ticks = indicator.tick_marks();

    let major_width = 40.0 / 1.5;
    assert_relative_eq!(ticks.major[0].x, 50.0 - major_width / 2.0);
    assert_relative_eq!(ticks.major[0].y, 10.0);
    assert_relative_eq!(ticks.major[0].w, major_width);
    assert_relative_eq!(ticks.major[0].h, 5.0);
    assert_relative_eq!(ticks.major[1].y, 205.0);

    let expected_y = [62.5, 110.0, 157.5];
    for (tick, y) in ticks.minor.iter().zip(expected_y) {
        assert_relative_eq!(tick.y, y);
        assert_relative_eq!(tick.w, major_width / 1.5);
        assert_relative_eq!(tick.h, 5.0 / 1.5);
        assert_relative_eq!(tick.x + tick.w / 2.0, 50.0, epsilon = 1e-4);
    }
}

#[test]
fn test_minor_ticks_evenly_spaced_at_any_height() {
    let vehicle = Rc::new(Cell::new(0.0_f32));

    for height in [20.0, 75.0, 200.0, 333.0, 1000.0] {
        let indicator = AltitudeIndicator::new(0.0, 0.0, 30.0, height, vehicle.clone(), 10.0);
        let ticks = indicator.tick_marks();
        let spacing = (height - 10.0) / 4.0;

        assert_eq!(ticks.minor.len(), MINOR_TICK_COUNT);
        assert_relative_eq!(ticks.minor[0].y, 5.0 + spacing, epsilon = 1e-3);
        for pair in ticks.minor.windows(2) {
            assert_relative_eq!(pair[1].y - pair[0].y, spacing, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_draw_scenario() {
    let (indicator, _vehicle) = create_test_indicator(50.0);
    let mut surface = RecordingSurface::new();

    indicator.draw(&mut surface);

    let commands = surface.commands();
    assert_eq!(commands.len(), 7);
    assert_eq!(
        commands[0],
        DrawCommand::RoundRect {
            x: 30.0,
            y: 10.0,
            width: 40.0,
            height: 200.0,
            radius: 10.0,
            color: FRAME_COLOR,
        }
    );
    assert_eq!(surface.rects().count(), 5);
    assert!(
        surface
            .rects()
            .all(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == TICK_COLOR))
    );
    assert_eq!(
        commands[6],
        DrawCommand::Oval {
            x: 47.0,
            y: 105.5,
            width: 6.0,
            height: 6.0,
            color: MARKER_COLOR,
        }
    );
}

#[test]
fn test_draw_omits_off_scale_marker() {
    let (indicator, _vehicle) = create_test_indicator(-10.0);
    let mut surface = RecordingSurface::new();

    indicator.draw(&mut surface);

    assert_eq!(surface.commands().len(), 6);
    assert_eq!(surface.ovals().count(), 0);
}

#[test]
fn test_hidden_indicator_draws_nothing() {
    let (mut indicator, _vehicle) = create_test_indicator(50.0);
    indicator.set_visible(false);
    let mut surface = RecordingSurface::new();

    indicator.draw(&mut surface);

    assert!(surface.commands().is_empty());
}

#[test]
fn test_draw_does_not_rescale() {
    let (indicator, _vehicle) = create_test_indicator(500.0);
    let mut surface = RecordingSurface::new();

    indicator.draw(&mut surface);
    indicator.draw(&mut surface);

    assert_eq!(indicator.max_altitude(), 100.0);
}

#[test]
fn test_fixed_height_indicator() {
    let vehicle = Rc::new(Cell::new(0.0_f32));
    let mut indicator = AltitudeIndicator::with_fixed_height(-40.0, 40.0, 200.0, vehicle, 100.0);

    indicator.align_with_point(800.0, 30.0);

    assert_eq!(indicator.body().y_offset(), 0.0);
    assert_eq!(indicator.body().x(), 760.0);
    assert_eq!(indicator.body().y(), 30.0);
}

#[test]
fn test_from_params() {
    let vehicle = Rc::new(Cell::new(0.0_f32));
    let mut params = Params::default();

    let anchored = AltitudeIndicator::from_params(&params, vehicle.clone());
    assert_eq!(anchored.body().y_offset(), params.indicator_y_offset);
    assert_eq!(anchored.max_altitude(), params.initial_max_altitude);

    params.indicator_fixed_height = true;
    let fixed = AltitudeIndicator::from_params(&params, vehicle);
    assert_eq!(fixed.body().y_offset(), 0.0);
    assert_eq!(fixed.body().width(), params.indicator_width);
}

struct Probe {
    altitude: f32,
}

impl AltitudeSource for Probe {
    fn altitude(&self) -> f32 {
        self.altitude
    }
}

#[test]
fn test_shared_vehicle_updates_are_seen() {
    let probe = Rc::new(RefCell::new(Probe { altitude: 10.0 }));
    let mut indicator = AltitudeIndicator::new(0.0, 0.0, 40.0, 200.0, probe.clone(), 100.0);
    assert_eq!(indicator.vehicle_altitude(), 10.0);

    probe.borrow_mut().altitude = 180.0;
    indicator.tick(0.016);

    assert_eq!(indicator.vehicle_altitude(), 180.0);
    assert_eq!(indicator.max_altitude(), 200.0);
}

#[test]
fn test_set_vehicle() {
    let (mut indicator, _vehicle) = create_test_indicator(10.0);

    indicator.set_vehicle(Rc::new(Cell::new(75.0_f32)));

    assert_eq!(indicator.vehicle_altitude(), 75.0);
    assert_eq!(indicator.proportion(), 0.75);
}

/// Indicator at (50, 10), 40 wide, given height, ceiling 100.
fn create_short_indicator(height: f32, altitude: f32) -> AltitudeIndicator {
    let vehicle = Rc::new(Cell::new(altitude));
    let mut indicator = AltitudeIndicator::new(0.0, 0.0, 40.0, height, vehicle, 100.0);
    indicator.align_with_point(50.0, 10.0);
    indicator
}

#[test]
fn test_marker_top_tolerance_is_inclusive() {
    // y = 10 + 5 - 3 - 0.5 * 2 = 11, so the dot's top sits exactly 2 above the gauge
    let indicator = create_short_indicator(5.0, 50.0);
    assert_eq!(indicator.marker(), Marker::Visible { x: 50.0, y: 11.0 });

    // Half a unit further up
    let indicator = create_short_indicator(5.0, 75.0);
    assert_eq!(indicator.marker(), Marker::Suppressed { y: 10.5 });
}

#[test]
fn test_marker_bottom_tolerance_is_inclusive() {
    // y = 10 + 7 - 3 + 0.5 * 4 = 16, so the dot's bottom sits exactly 2 below the gauge
    let indicator = create_short_indicator(7.0, -50.0);
    assert_eq!(indicator.marker(), Marker::Visible { x: 50.0, y: 16.0 });

    // Half a unit further down
    let indicator = create_short_indicator(7.0, -62.5);
    assert_eq!(indicator.marker(), Marker::Suppressed { y: 16.5 });
}
