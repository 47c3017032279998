//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the session-scoped reactive signals into a single
//! struct provided via `use_context_provider`. Child components retrieve it
//! with `use_context::<AppState>()`.

use dioxus::prelude::*;
use lilac_charts::{ChartConfig, Theme};

/// Shared reactive state for the dashboard session.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current color theme
    pub theme: Signal<Theme>,
    /// Current chart display toggles; replaced wholesale on any change
    pub chart_config: Signal<ChartConfig>,
    /// Error message if a page failed to build
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            theme: Signal::new(Theme::default()),
            chart_config: Signal::new(ChartConfig::default()),
            error_msg: Signal::new(None),
        }
    }
}
