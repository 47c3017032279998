//! Charts page: 2x2 grid of bar, line, scatter, and pie charts.

use dioxus::prelude::*;
use lilac_charts::pages::charts_page;
use lilac_ui::components::ChartCard;
use lilac_ui::js_bridge;
use lilac_ui::state::AppState;

/// Container ids, top-left to bottom-right.
const CHART_IDS: [&str; 4] = [
    "charts-bar-tl",
    "charts-line-tr",
    "charts-scatter-bl",
    "charts-pie-br",
];

/// The default route renders the charts page.
#[component]
pub fn Home() -> Element {
    rsx! { ChartsBody {} }
}

#[component]
pub fn ChartsPage() -> Element {
    rsx! { ChartsBody {} }
}

#[component]
fn ChartsBody() -> Element {
    let mut state = use_context::<AppState>();

    // Rebuild and re-render every figure whenever theme or config change.
    use_effect(move || {
        let theme = (state.theme)();
        let config = (state.chart_config)();
        js_bridge::set_document_title("Charts - Lilac Dashboard");
        match charts_page(theme, &config) {
            Ok(page) => {
                state.error_msg.set(None);
                for (id, figure) in CHART_IDS.iter().zip(page.figures.iter()) {
                    js_bridge::render_figure(id, &figure.to_json());
                }
            }
            Err(err) => {
                log::warn!("charts page failed to build: {err}");
                state.error_msg.set(Some(err.to_string()));
            }
        }
    });

    let show_toolbar = (state.chart_config)().show_toolbar;

    rsx! {
        h1 { class: "page-heading", "Charts" }
        div {
            class: "chart-grid",
            for id in CHART_IDS {
                ChartCard { id, show_toolbar }
            }
        }
    }
}
