//! App shell: theme wrapper, navbar, error surface, and page outlet.

use dioxus::prelude::*;
use lilac_charts::Palette;
use lilac_ui::components::{ErrorDisplay, ThemeToggle};
use lilac_ui::state::AppState;

use crate::route::Route;

/// Layout wrapper for every route. The wrapper div carries the
/// `theme-light`/`theme-dark` class that drives the CSS variables below.
#[component]
pub fn Shell() -> Element {
    let state = use_context::<AppState>();
    let theme = (state.theme)();
    let palette = Palette::resolve(theme);

    rsx! {
        style { {GLOBAL_CSS} }
        div {
            id: "theme-wrapper",
            class: "{theme.wrapper_class()}",
            style: "background: {palette.background}; color: {palette.text_primary}; min-height: 100vh;",
            NavBar {}
            div {
                class: "page-container",
                if let Some(message) = (state.error_msg)() {
                    ErrorDisplay { message }
                }
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Lilac Dashboard" }
            div {
                class: "nav-links",
                Link { class: "nav-link", to: Route::ChartsPage {}, "Charts" }
                Link { class: "nav-link", to: Route::InsightsPage {}, "Insights" }
                Link { class: "nav-link", to: Route::ConfigPage {}, "Config" }
            }
            ThemeToggle {}
        }
    }
}

/// Global stylesheet. Color values match the palettes in `lilac-charts`.
const GLOBAL_CSS: &str = r#"
.theme-light {
  --background: #faf8ff;
  --surface: #f0ebfa;
  --text-primary: #3d3551;
  --text-secondary: #7a6b8a;
  --primary: #7b68ee;
  --border: #e0d8f0;
}

.theme-dark {
  --background: #1a1625;
  --surface: #252035;
  --text-primary: #e8e4f0;
  --text-secondary: #a89bb8;
  --primary: #a78bfa;
  --border: #3d3551;
}

body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}

.navbar {
  display: flex;
  align-items: center;
  gap: 24px;
  padding: 12px 24px;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.navbar-brand {
  font-weight: 600;
  color: var(--primary);
}

.nav-links {
  display: flex;
  gap: 16px;
  flex: 1;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
}

.nav-link:hover {
  color: var(--primary);
}

.theme-toggle, .config-switch {
  display: flex;
  align-items: center;
  gap: 8px;
  color: var(--text-secondary);
  cursor: pointer;
}

.page-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 16px 24px;
}

.page-heading {
  color: var(--text-primary);
  font-size: 26px;
  margin: 8px 0 16px 0;
}

.page-intro {
  color: var(--text-secondary);
  margin: 0 0 12px 0;
}

.chart-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 16px;
}

@media (max-width: 900px) {
  .chart-grid {
    grid-template-columns: 1fr;
  }
}

.chart-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 8px;
}

.chart-toolbar {
  position: absolute;
  top: 8px;
  right: 8px;
  z-index: 1;
}

.chart-toolbar-button {
  background: var(--background);
  color: var(--text-secondary);
  border: 1px solid var(--border);
  border-radius: 4px;
  padding: 2px 8px;
  font-size: 11px;
  cursor: pointer;
}

.chart-toolbar-button:hover {
  color: var(--primary);
}

.config-panel {
  display: flex;
  flex-direction: column;
  gap: 12px;
  max-width: 420px;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 16px;
}

.error-display {
  padding: 12px 16px;
  margin: 8px 0;
  background: #ffebee;
  color: #c62828;
  border: 1px solid #ef9a9a;
  border-radius: 4px;
}

.muted {
  color: var(--text-secondary);
}
"#;
