//! Theme management for the application.

use eframe::egui;
use serde::{Deserialize, Serialize};

/// Persisted light/dark choice, stored as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Maps the toggle control state to a preference: checked means dark.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub visuals: egui::Visuals,
}

pub fn dark_theme() -> Theme {
    Theme {
        name: "Dark",
        visuals: egui::Visuals::dark(),
    }
}

pub fn light_theme() -> Theme {
    Theme {
        name: "Light",
        visuals: egui::Visuals::light(),
    }
}

pub fn theme_for(preference: ThemePreference) -> Theme {
    if preference.is_dark() {
        dark_theme()
    } else {
        light_theme()
    }
}
