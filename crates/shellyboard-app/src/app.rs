//! Application shell: page header, booking-week strip, canvas panel.

use shellyboard_core::{Canvas, dates};

use crate::canvas_ui;
use crate::theme;

/// Top-level application state.
pub struct ShellyApp {
    canvas: Canvas,
}

impl ShellyApp {
    /// Create the application.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            canvas: Canvas::new(),
        }
    }
}

/// Seven day chips for the current AEST week, today highlighted, plus a
/// "night N of 7" readout.
fn week_strip(ui: &mut egui::Ui) {
    let today = dates::today_aest();
    let week_start = dates::start_of_week_aest(today);
    let night = dates::nights_between(week_start, today) + 1;

    ui.horizontal(|ui| {
        for i in 0..7 {
            let day = dates::add_days(week_start, i);
            // day boundaries are encoded at 14:00 UTC, so the UTC date
            // names the Sydney calendar day
            let label = day.format("%a %d").to_string();
            let chip = if day == today {
                egui::RichText::new(label)
                    .size(12.0)
                    .color(egui::Color32::WHITE)
                    .background_color(theme::ACCENT)
            } else {
                egui::RichText::new(label)
                    .size(12.0)
                    .color(theme::CHIP_TEXT)
                    .background_color(theme::CHIP_BG)
            };
            ui.label(chip);
        }
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("night {night} of 7"))
                .size(12.0)
                .color(theme::TEXT_MUTED),
        );
    });
}

impl eframe::App for ShellyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Shelly Beach");
            ui.add_space(4.0);
            week_strip(ui);
            ui.add_space(8.0);
            canvas_ui::show(ui, &mut self.canvas);
        });
    }
}
