use flight_hud::display::altitude_indicator::{AltitudeIndicator, AltitudeSource};
use flight_hud::display::block::Block;
use flight_hud::display::canvas::Canvas;
use flight_hud::display::entity::{Entity, EntityConfig};
use flight_hud::display::params::Params;
use flight_hud::display::surface::Surface;
use macroquad::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

mod flight;
mod ui;

use flight::Flight;

const DEFAULT_PARAMS_PATH: &str = "flight_hud.json";

/// Entities on screen, ticked then drawn once per frame.
struct Scene {
    rocket: Block,
    plume: Block,
    indicator: AltitudeIndicator,
}

impl Scene {
    fn new(params: &Params, vehicle: Rc<dyn AltitudeSource>) -> Self {
        let rocket = Block::new(&EntityConfig {
            width: 16.0,
            height: 48.0,
            color: Color::from_rgba(220, 220, 230, 255),
            ..EntityConfig::default()
        });
        let plume = Block::new(&EntityConfig {
            width: 10.0,
            y_offset: 48.0,
            color: Color::from_rgba(255, 140, 0, 255),
            ..EntityConfig::default()
        });

        Self {
            rocket,
            plume,
            indicator: AltitudeIndicator::from_params(params, vehicle),
        }
    }

    fn entities(&self) -> [&dyn Entity; 3] {
        [&self.rocket, &self.plume, &self.indicator]
    }

    fn tick(&mut self, params: &Params, throttle: f32, dt: f32) {
        self.rocket.tick(dt);
        self.plume.tick(dt);
        self.indicator.tick(dt);

        // Re-anchor after integration so followers never lag a frame
        self.rocket
            .align_with_point(screen_width() / 2.0, screen_height() / 2.0 - 24.0);
        self.plume.align_with(&self.rocket);
        self.plume.body_mut().set_height(throttle * 30.0);
        self.plume.set_visible(throttle > 0.0);

        let indicator = self.indicator.body_mut();
        indicator.set_width(params.indicator_width);
        indicator.set_height(params.indicator_height);
        self.indicator.align_with_point(screen_width(), 0.0);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for entity in self.entities() {
            entity.draw(surface);
        }
    }
}

fn load_params(path: Option<&str>) -> Params {
    let Some(path) = path else {
        return Params::default();
    };
    match Params::load_from_file(path) {
        Ok(params) => params,
        Err(e) => {
            tracing::warn!("failed to load {path}: {e}; using defaults");
            Params::default()
        }
    }
}

#[macroquad::main("Flight HUD")]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let params_path = std::env::args().nth(1);
    let mut params = load_params(params_path.as_deref());

    println!("Starting flight HUD");

    let mut ui_state = ui::UIState::new();
    let flight = Rc::new(RefCell::new(Flight::default()));
    let mut scene = Scene::new(&params, flight.clone());
    let mut canvas = Canvas::new();

    loop {
        clear_background(Color::from_rgba(20, 24, 40, 255));

        let dt = params.time_step;
        flight.borrow_mut().step(&params, ui_state.throttle, dt);

        scene.indicator.set_visible(ui_state.indicator_visible);
        scene.tick(&params, ui_state.throttle, dt);
        scene.draw(&mut canvas);

        let max_altitude = scene.indicator.max_altitude();
        ui_state.update_history(&flight.borrow(), max_altitude);
        ui::draw_ui(&mut ui_state, &flight.borrow(), max_altitude, &mut params);

        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            *flight.borrow_mut() = Flight::default();
            scene = Scene::new(&params, flight.clone());
            ui_state.clear_history();
            ui_state.status_message = Some("Flight reset".to_string());
        }

        if ui_state.save_requested {
            ui_state.save_requested = false;
            let path = params_path.as_deref().unwrap_or(DEFAULT_PARAMS_PATH);
            ui_state.status_message = Some(match params.save_to_file(path) {
                Ok(()) => format!("Saved to {path}"),
                Err(e) => format!("Save failed: {e}"),
            });
        }

        ui::process_egui();

        next_frame().await
    }
}
