//! Chart config panel: five switches over the chart display toggles.

use dioxus::prelude::*;
use lilac_charts::ChartConfig;

use crate::state::AppState;

/// One labeled switch row.
#[derive(Props, Clone, PartialEq)]
pub struct ConfigSwitchProps {
    #[props(into)]
    pub id: String,
    #[props(into)]
    pub label: String,
    pub checked: bool,
    pub onchange: EventHandler<bool>,
}

#[component]
pub fn ConfigSwitch(props: ConfigSwitchProps) -> Element {
    rsx! {
        label {
            class: "config-switch",
            input {
                r#type: "checkbox",
                id: "{props.id}",
                checked: props.checked,
                onchange: move |evt: Event<FormData>| props.onchange.call(evt.checked()),
            }
            "{props.label}"
        }
    }
}

/// The config panel. Every switch change replaces the whole [`ChartConfig`]
/// value in state, which re-renders all charts on the chart pages.
#[component]
pub fn ConfigPanel() -> Element {
    let mut state = use_context::<AppState>();
    let config = (state.chart_config)();

    rsx! {
        div {
            id: "config-panel",
            class: "config-panel",
            ConfigSwitch {
                id: "config-show-legend",
                label: "Show legends",
                checked: config.show_legend,
                onchange: move |on| {
                    let next = ChartConfig { show_legend: on, ..(state.chart_config)() };
                    state.chart_config.set(next);
                },
            }
            ConfigSwitch {
                id: "config-show-titles",
                label: "Show chart titles",
                checked: config.show_titles,
                onchange: move |on| {
                    let next = ChartConfig { show_titles: on, ..(state.chart_config)() };
                    state.chart_config.set(next);
                },
            }
            ConfigSwitch {
                id: "config-show-data-labels",
                label: "Show data labels",
                checked: config.show_data_labels,
                onchange: move |on| {
                    let next = ChartConfig { show_data_labels: on, ..(state.chart_config)() };
                    state.chart_config.set(next);
                },
            }
            ConfigSwitch {
                id: "config-show-grid",
                label: "Show grid lines",
                checked: config.show_grid,
                onchange: move |on| {
                    let next = ChartConfig { show_grid: on, ..(state.chart_config)() };
                    state.chart_config.set(next);
                },
            }
            ConfigSwitch {
                id: "config-show-toolbar",
                label: "Show chart toolbar",
                checked: config.show_toolbar,
                onchange: move |on| {
                    let next = ChartConfig { show_toolbar: on, ..(state.chart_config)() };
                    state.chart_config.set(next);
                },
            }
        }
    }
}
