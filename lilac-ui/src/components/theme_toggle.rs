//! Light/dark theme toggle.

use dioxus::prelude::*;
use lilac_charts::Theme;

use crate::state::AppState;

/// Checkbox toggle flipping the session theme between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let dark = (state.theme)() == Theme::Dark;

    let on_toggle = move |evt: Event<FormData>| {
        let next = if evt.checked() {
            Theme::Dark
        } else {
            Theme::Light
        };
        state.theme.set(next);
    };

    rsx! {
        label {
            class: "theme-toggle",
            input {
                r#type: "checkbox",
                id: "theme-toggle",
                checked: dark,
                onchange: on_toggle,
            }
            if dark { "Dark" } else { "Light" }
        }
    }
}
