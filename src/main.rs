use anyhow::Result;
use eframe::egui::{self, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ui::app::CountdownApp;
use crate::ui::icons::create_app_icon;

mod countdown;
mod settings;
mod theme;
mod ui;
mod utils;

fn main() -> Result<(), eframe::Error> {
    let _log_guard = init_tracing();
    info!("🚀 EventDown v{} starting", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(520.0, 400.0))
            .with_min_inner_size(Vec2::new(430.0, 320.0))
            .with_icon(create_app_icon()),
        centered: true,
        default_theme: eframe::Theme::Light,
        follow_system_theme: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "EventDown - Event Countdown",
        options,
        Box::new(|cc| Box::new(CountdownApp::new(cc))),
    )
}

// Log to a daily-rolling file when a per-user data directory exists, to
// stderr otherwise. The guard must stay alive so buffered lines get flushed.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(log_dir) = settings::log_dir() {
        if std::fs::create_dir_all(&log_dir).is_ok() {
            let appender = tracing_appender::rolling::daily(&log_dir, "eventdown.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            return Some(guard);
        }
    }

    tracing_subscriber::fmt().with_env_filter(filter).init();
    None
}
