use eframe::egui::{self, RichText};

use crate::settings;
use crate::theme::ThemePreference;
use crate::ui::app::CountdownApp;
use crate::ui::util::toggle_switch;
use crate::utils::format_target;

pub fn draw_settings_tab(app: &mut CountdownApp, ui: &mut egui::Ui) {
    ui.heading("Settings");

    ui.add_space(20.0);

    // --- Theme ---
    ui.group(|ui| {
        ui.label("Application theme");
        ui.horizontal(|ui| {
            ui.label("☀ Light");
            let mut dark = app.settings.theme.is_dark();
            if toggle_switch(ui, &mut dark).changed() {
                app.set_theme(ThemePreference::from_checked(dark), ui.ctx());
            }
            ui.label("🌙 Dark");
        });
    });

    ui.add_space(20.0);

    // --- Event ---
    ui.group(|ui| {
        ui.label("Event");
        ui.separator();
        ui.label(format!("Name: {}", app.settings.event_name));
        ui.label(format!("Deadline: {}", format_target(&app.settings.target)));
        if let Some(path) = settings::config_file_path() {
            ui.label(
                RichText::new(format!("Edit {} and restart to change the event.", path.display()))
                    .weak()
                    .small(),
            );
        }
    });

    ui.add_space(20.0);

    // --- About ---
    ui.group(|ui| {
        ui.label("About");
        ui.separator();
        ui.label(format!("EventDown v{}", env!("CARGO_PKG_VERSION")));
        ui.horizontal(|ui| {
            ui.label("Built with");
            ui.hyperlink_to("egui", "https://github.com/emilk/egui");
            ui.label("and Rust.");
        });
    });
}
