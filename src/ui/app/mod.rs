use chrono::{DateTime, Local};
use eframe::egui;
use tracing::{info, warn};

use crate::countdown::clock::{Clock, SystemClock};
use crate::countdown::display::CountdownDisplay;
use crate::countdown::ticker::Ticker;
use crate::countdown::Countdown;
use crate::settings::Settings;
use crate::theme::{self, Theme, ThemePreference};
use crate::ui::{countdown_ui, settings_ui};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Tab {
    Countdown,
    Settings,
}

/// Application context built once at startup; owns both the theme state and
/// the countdown renderer, including their schedule bookkeeping.
pub struct CountdownApp {
    pub active_tab: Tab,
    pub theme: Theme,
    pub settings: Settings,
    pub countdown: Countdown,
    pub display: CountdownDisplay,
    pub ticker: Ticker,
    pub clock: Box<dyn Clock>,
}

impl CountdownApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_clock(Settings::load(), Box::new(SystemClock))
    }

    pub fn with_clock(settings: Settings, clock: Box<dyn Clock>) -> Self {
        let theme = theme::theme_for(settings.theme);
        let countdown = Countdown::new(settings.target);
        info!(
            "⏳ counting down to {} ({})",
            settings.event_name,
            settings.target.format("%Y-%m-%d %H:%M:%S")
        );

        Self {
            active_tab: Tab::Countdown,
            theme,
            settings,
            countdown,
            display: CountdownDisplay::new(),
            ticker: Ticker::every_second(),
            clock,
        }
    }

    /// Applies a preference to the visuals and the stored settings. The
    /// write is best-effort; a failure never reaches the user.
    pub fn set_theme(&mut self, preference: ThemePreference, ctx: &egui::Context) {
        self.settings.theme = preference;
        self.theme = theme::theme_for(preference);
        ctx.set_visuals(self.theme.visuals.clone());
        match self.settings.save() {
            Ok(()) => info!("theme switched to {}", preference.as_str()),
            Err(e) => warn!("theme switched to {} but not persisted: {e}", preference.as_str()),
        }
    }

    /// One pass of the tick/settle pipeline; returns the instant it used.
    fn advance(&mut self) -> DateTime<Local> {
        let now = self.clock.now();
        if self.ticker.due(now) {
            let was_running = !self.countdown.has_ended();
            if let Some(remaining) = self.countdown.tick(now) {
                self.display.render(&remaining, now);
            } else if was_running {
                info!("🎉 event ended");
            }
        }
        self.display.settle(now);
        now
    }

    /// Earliest instant anything is scheduled: the next tick or a pending
    /// field swap.
    fn next_wake(&self, now: DateTime<Local>) -> Option<std::time::Duration> {
        let mut wake = self.ticker.next_due();
        if let Some(transition) = self.display.next_transition() {
            wake = Some(wake.map_or(transition, |w| w.min(transition)));
        }
        wake.map(|at| (at - now).to_std().unwrap_or_default())
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.theme.visuals.clone());

        let now = self.advance();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.active_tab == Tab::Countdown, "⏳ Countdown")
                    .clicked()
                {
                    self.active_tab = Tab::Countdown;
                }
                if ui
                    .selectable_label(self.active_tab == Tab::Settings, "⚙ Settings")
                    .clicked()
                {
                    self.active_tab = Tab::Settings;
                }
            });

            ui.separator();

            match self.active_tab {
                Tab::Countdown => countdown_ui::draw_countdown_tab(self, ui, now),
                Tab::Settings => settings_ui::draw_settings_tab(self, ui),
            }
        });

        if let Some(delay) = self.next_wake(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
