//! Chart card component: the container D3 renders into, plus an optional
//! toolbar.

use dioxus::prelude::*;

use crate::js_bridge;

/// Props for ChartCard
#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// The DOM id for the chart container (D3 will render into this)
    #[props(into)]
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 380)]
    pub min_height: u32,
    /// Whether to show the chart toolbar (SVG download)
    #[props(default = false)]
    pub show_toolbar: bool,
}

/// A card holding one D3 chart and, when enabled, its toolbar.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let chart_id = props.id.clone();
    let on_download = move |_| {
        js_bridge::download_chart_svg(&chart_id, &format!("{chart_id}.svg"));
    };

    rsx! {
        div {
            class: "chart-card",
            style: "min-height: {props.min_height}px; position: relative;",
            if props.show_toolbar {
                div {
                    class: "chart-toolbar",
                    button {
                        class: "chart-toolbar-button",
                        title: "Download as SVG",
                        onclick: on_download,
                        "SVG"
                    }
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
