//! Reusable Dioxus RSX components for the lilac dashboard.

mod chart_card;
mod config_panel;
mod error_display;
mod theme_toggle;

pub use chart_card::ChartCard;
pub use config_panel::ConfigPanel;
pub use error_display::ErrorDisplay;
pub use theme_toggle::ThemeToggle;
