use crate::flight::Flight;
use flight_hud::display::params::Params;
use egui_macroquad::egui;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub stats_panel_width: f32,
    pub altitude_history: VecDeque<(f64, f64)>,
    pub ceiling_history: VecDeque<(f64, f64)>,
    last_update_time: f32,
    update_interval: f32,
    pub throttle: f32,
    pub indicator_visible: bool,
    pub save_requested: bool,
    pub reset_requested: bool,
    pub status_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 300.0,
            altitude_history: VecDeque::new(),
            ceiling_history: VecDeque::new(),
            last_update_time: 0.0,
            update_interval: 0.25, // Sample every 0.25 seconds
            throttle: 0.5,
            indicator_visible: true,
            save_requested: false,
            reset_requested: false,
            status_message: None,
        }
    }

    pub fn clear_history(&mut self) {
        self.altitude_history.clear();
        self.ceiling_history.clear();
        self.last_update_time = 0.0;
    }

    pub fn update_history(&mut self, flight: &Flight, max_altitude: f32) {
        if flight.time - self.last_update_time >= self.update_interval {
            self.last_update_time = flight.time;

            self.altitude_history
                .push_back((flight.time as f64, flight.altitude as f64));
            self.ceiling_history
                .push_back((flight.time as f64, max_altitude as f64));

            if self.altitude_history.len() > MAX_HISTORY_POINTS {
                self.altitude_history.pop_front();
            }
            if self.ceiling_history.len() > MAX_HISTORY_POINTS {
                self.ceiling_history.pop_front();
            }
        }
    }
}

pub fn draw_ui(state: &mut UIState, flight: &Flight, max_altitude: f32, params: &mut Params) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, flight, max_altitude, params);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
