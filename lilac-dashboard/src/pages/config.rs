//! Config page: heading, intro text, and the chart-display switch panel.

use dioxus::prelude::*;
use lilac_charts::pages::config_page;
use lilac_ui::components::ConfigPanel;
use lilac_ui::js_bridge;

#[component]
pub fn ConfigPage() -> Element {
    let page = config_page();

    use_effect(|| {
        js_bridge::set_document_title("Config - Lilac Dashboard");
    });

    rsx! {
        h1 { class: "page-heading", {page.heading} }
        if let Some(intro) = page.intro {
            p { class: "page-intro", {intro} }
        }
        ConfigPanel {}
    }
}
