//! Page builders: pure functions from (theme, config) to a page's heading
//! and ordered figures.
//!
//! Each chart page is a fixed 2x2 arrangement. Pages only call dataset
//! loaders and figure builders; they never mutate config or touch the DOM.

use lilac_data::{datasets, DataError};

use crate::builders::{
    bar_chart, box_chart, heatmap_chart, histogram_chart, line_chart, pie_chart, scatter_chart,
    strip_chart,
};
use crate::config::ChartConfig;
use crate::figure::Figure;
use crate::theme::Theme;

/// Heading, intro text, and ordered figures for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    pub heading: String,
    pub intro: Option<String>,
    pub figures: Vec<Figure>,
}

/// Charts page: bar, line, scatter, pie.
pub fn charts_page(theme: Theme, config: &ChartConfig) -> Result<PageSpec, DataError> {
    let bar = bar_chart(
        datasets::sales_by_region(),
        "region",
        "sales",
        "Sales by region",
        Some("region"),
        theme,
        config,
    )?;
    let line = line_chart(
        datasets::monthly_revenue(),
        "month",
        &["revenue", "costs"],
        "Revenue vs costs",
        theme,
        config,
    )?;
    let scatter = scatter_chart(
        datasets::scatter_segments(),
        "units",
        "revenue",
        "Units vs revenue by segment",
        Some("segment"),
        theme,
        config,
    )?;
    let pie = pie_chart(
        datasets::category_share(),
        "category",
        "share",
        "Share by category",
        theme,
        config,
    )?;

    Ok(PageSpec {
        heading: "Charts".to_string(),
        intro: None,
        figures: vec![bar, line, scatter, pie],
    })
}

/// Insights page: box, strip, histogram, heatmap.
pub fn insights_page(theme: Theme, config: &ChartConfig) -> Result<PageSpec, DataError> {
    let boxes = box_chart(
        datasets::team_scores(),
        "team",
        "score",
        "Score distribution by team",
        theme,
        config,
    )?;
    let strip = strip_chart(
        datasets::team_scores(),
        "team",
        "score",
        "Scores by team (strip plot)",
        theme,
        config,
    )?;
    let hist = histogram_chart(
        datasets::response_times(),
        "response_ms",
        "Response time distribution",
        Some(24),
        theme,
        config,
    )?;
    let heat = heatmap_chart(
        datasets::quarterly_revenue(),
        "quarter",
        "region",
        "revenue",
        "Revenue by quarter and region",
        theme,
        config,
    )?;

    Ok(PageSpec {
        heading: "Insights".to_string(),
        intro: None,
        figures: vec![boxes, strip, hist, heat],
    })
}

/// Config page: heading and intro text only; the toggles themselves are a
/// UI component.
pub fn config_page() -> PageSpec {
    PageSpec {
        heading: "Config".to_string(),
        intro: Some(
            "Toggle the options below to change how charts behave on the Charts and Insights pages."
                .to_string(),
        ),
        figures: Vec::new(),
    }
}
