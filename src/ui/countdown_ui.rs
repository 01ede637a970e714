use chrono::{DateTime, Local};
use eframe::egui::{self, Align2, FontId, RichText};

use crate::countdown::{Field, ENDED_MESSAGE};
use crate::ui::app::CountdownApp;
use crate::utils::format_target;

const FIELD_SIZE: egui::Vec2 = egui::vec2(86.0, 64.0);
const DIGIT_FONT_SIZE: f32 = 40.0;
// How far the old digits rise while sliding out.
const SLIDE_RISE: f32 = 8.0;

pub fn draw_countdown_tab(app: &mut CountdownApp, ui: &mut egui::Ui, now: DateTime<Local>) {
    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.heading(&app.settings.event_name);
        ui.label(RichText::new(format_target(&app.countdown.target())).weak());
        ui.add_space(10.0);
    });

    ui.separator();
    ui.add_space(24.0);

    if app.countdown.has_ended() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new(ENDED_MESSAGE).size(32.0).strong());
        });
        return;
    }

    let spacing = ui.spacing().item_spacing.x;
    let row_width = 4.0 * FIELD_SIZE.x + 3.0 * spacing;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
        for field in Field::ALL {
            draw_field(app, ui, field, now);
        }
    });

    if app.display.next_transition().is_some() {
        ui.ctx().request_repaint(); // keep the slide moving
    }
}

fn draw_field(app: &CountdownApp, ui: &mut egui::Ui, field: Field, now: DateTime<Local>) {
    ui.vertical(|ui| {
        ui.set_width(FIELD_SIZE.x);

        let (rect, _) = ui.allocate_exact_size(FIELD_SIZE, egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect(
                rect,
                6.0,
                ui.visuals().extreme_bg_color,
                ui.visuals().widgets.noninteractive.bg_stroke,
            );

            let display = app.display.field(field);
            let mut pos = rect.center();
            let mut color = ui.visuals().strong_text_color();
            if display.is_sliding() {
                let progress = display.slide_progress(now).unwrap_or(1.0);
                pos.y -= progress * SLIDE_RISE;
                color = color.gamma_multiply(1.0 - 0.7 * progress);
            }
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                display.text(),
                FontId::proportional(DIGIT_FONT_SIZE),
                color,
            );
        }

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(field.label()).weak());
        });
    });
}
