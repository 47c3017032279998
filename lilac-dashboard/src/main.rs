//! Lilac dashboard: sample data-visualization app.
//!
//! Pages of themed charts (bar, line, scatter, pie, box, strip, histogram,
//! heatmap) over fixed in-memory sample data, with a light/dark theme
//! toggle and a panel of chart-display switches. Figures are built by
//! `lilac-charts` and rendered through the D3 bridge in `lilac-ui`.
//!
//! Run with `dx serve` from this crate's directory.

mod pages;
mod route;
mod shell;

use dioxus::prelude::*;
use lilac_ui::js_bridge;
use lilac_ui::state::AppState;

use route::Route;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    // Load the D3 renderer once on mount
    use_effect(|| {
        js_bridge::init_charts();
    });

    rsx! {
        Router::<Route> {}
    }
}
