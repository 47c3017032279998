//! Insights page: 2x2 grid of box, strip, histogram, and heatmap charts.

use dioxus::prelude::*;
use lilac_charts::pages::insights_page;
use lilac_ui::components::ChartCard;
use lilac_ui::js_bridge;
use lilac_ui::state::AppState;

/// Container ids, top-left to bottom-right.
const CHART_IDS: [&str; 4] = [
    "insights-box-tl",
    "insights-strip-tr",
    "insights-hist-bl",
    "insights-heatmap-br",
];

#[component]
pub fn InsightsPage() -> Element {
    let mut state = use_context::<AppState>();

    use_effect(move || {
        let theme = (state.theme)();
        let config = (state.chart_config)();
        js_bridge::set_document_title("Insights - Lilac Dashboard");
        match insights_page(theme, &config) {
            Ok(page) => {
                state.error_msg.set(None);
                for (id, figure) in CHART_IDS.iter().zip(page.figures.iter()) {
                    js_bridge::render_figure(id, &figure.to_json());
                }
            }
            Err(err) => {
                log::warn!("insights page failed to build: {err}");
                state.error_msg.set(Some(err.to_string()));
            }
        }
    });

    let show_toolbar = (state.chart_config)().show_toolbar;

    rsx! {
        h1 { class: "page-heading", "Insights" }
        div {
            class: "chart-grid",
            for id in CHART_IDS {
                ChartCard { id, show_toolbar }
            }
        }
    }
}
