#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use flight_hud::display::surface::{DrawCommand, RecordingSurface, Surface};
use macroquad::color::{BLUE, WHITE};

#[test]
fn test_recording_tags_current_fill() {
    let mut surface = RecordingSurface::new();

    surface.fill_rect(0.0, 0.0, 1.0, 1.0);
    surface.set_fill(BLUE);
    surface.fill_oval(2.0, 3.0, 4.0, 5.0);
    surface.fill_round_rect(1.0, 1.0, 10.0, 10.0, 2.0);

    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 1.0,
                height: 1.0,
                color: WHITE,
            },
            DrawCommand::Oval {
                x: 2.0,
                y: 3.0,
                width: 4.0,
                height: 5.0,
                color: BLUE,
            },
            DrawCommand::RoundRect {
                x: 1.0,
                y: 1.0,
                width: 10.0,
                height: 10.0,
                radius: 2.0,
                color: BLUE,
            },
        ]
    );
    assert_eq!(surface.rects().count(), 1);
    assert_eq!(surface.ovals().count(), 1);
}

#[test]
fn test_clear_keeps_fill() {
    let mut surface = RecordingSurface::new();
    surface.set_fill(BLUE);
    surface.fill_rect(0.0, 0.0, 1.0, 1.0);

    surface.clear();
    surface.fill_rect(5.0, 5.0, 1.0, 1.0);

    assert_eq!(surface.commands().len(), 1);
    assert!(matches!(
        surface.commands()[0],
        DrawCommand::Rect { x, color, .. } if x == 5.0 && color == BLUE
    ));
}
