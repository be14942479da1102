use crate::flight::Flight;
use flight_hud::display::params::Params;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_stats_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    flight: &Flight,
    max_altitude: f32,
    params: &mut Params,
) {
    egui::SidePanel::left("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Flight");
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    state.save_requested = true;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });

            ui.horizontal(|ui| {
                let button_text = if state.indicator_visible {
                    "📏 Indicator: ON"
                } else {
                    "📏 Indicator: OFF"
                };
                if ui.button(button_text).clicked() {
                    state.indicator_visible = !state.indicator_visible;
                }
            });

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            ui.add(egui::Slider::new(&mut state.throttle, 0.0..=1.0).text("Throttle"));
            ui.label(format!("Time: {:.1}s", flight.time));
            ui.label(format!("Altitude: {:.1}", flight.altitude));
            ui.label(format!("Climb rate: {:.1}", flight.climb_rate));
            ui.label(format!("Ceiling: {:.0}", max_altitude));

            ui.collapsing("Vehicle", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.thrust_acceleration, 0.0..=100.0)
                        .text("Thrust"),
                );
                ui.add(egui::Slider::new(&mut params.gravity, 0.0..=30.0).text("Gravity"));
                ui.add(
                    egui::Slider::new(&mut params.turbulence, 0.0..=20.0).text("Turbulence"),
                );
            });

            ui.collapsing("Indicator", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.indicator_width, 10.0..=120.0).text("Width"),
                );
                ui.add(
                    egui::Slider::new(&mut params.indicator_height, 50.0..=600.0)
                        .text("Height"),
                );
            });

            ui.separator();
            ui.label("Altitude History");
            draw_altitude_plot(ui, &state.altitude_history, &state.ceiling_history);
        });
}

fn draw_altitude_plot(
    ui: &mut egui::Ui,
    altitude_data: &VecDeque<(f64, f64)>,
    ceiling_data: &VecDeque<(f64, f64)>,
) {
    if altitude_data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("altitude_plot")
        .height(180.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTime: {:.1}s\nAltitude: {:.1}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            let altitude_points: PlotPoints = altitude_data.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(altitude_points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Altitude"),
            );

            if !ceiling_data.is_empty() {
                let ceiling_points: PlotPoints =
                    ceiling_data.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(
                    Line::new(ceiling_points)
                        .color(egui::Color32::from_rgb(255, 200, 100))
                        .name("Ceiling"),
                );
            }
        });
}
