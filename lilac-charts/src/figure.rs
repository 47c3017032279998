//! Serializable chart descriptions handed to the D3 renderer.
//!
//! A [`Figure`] is the complete, themed specification of one chart. It is
//! serialized to camelCase JSON and passed across the JS bridge, where
//! `renderFigure` dispatches on the `kind` tag.

use serde::Serialize;

/// A fully parameterized, themed chart description ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    /// Chart title. Empty when titles are toggled off.
    pub title: String,
    /// X-axis title. Empty where not applicable (pie, heatmap color axis).
    pub x_title: String,
    /// Y-axis title.
    pub y_title: String,
    /// Theme- and config-derived presentation settings.
    pub layout: Layout,
    #[serde(flatten)]
    pub data: FigureData,
}

impl Figure {
    /// A figure with the given data and title and an empty layout. The
    /// layout is filled in by the builders' shared theming step.
    pub fn new(data: FigureData, title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_title: String::new(),
            y_title: String::new(),
            layout: Layout::default(),
            data,
        }
    }

    /// The wire name of this figure's chart kind.
    pub fn kind(&self) -> &'static str {
        match self.data {
            FigureData::Bar { .. } => "bar",
            FigureData::Line { .. } => "line",
            FigureData::Scatter { .. } => "scatter",
            FigureData::Pie { .. } => "pie",
            FigureData::Box { .. } => "box",
            FigureData::Strip { .. } => "strip",
            FigureData::Histogram { .. } => "histogram",
            FigureData::Heatmap { .. } => "heatmap",
        }
    }

    /// Serialize for the JS bridge.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Presentation settings derived from the palette and chart config.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub paper_color: String,
    pub plot_color: String,
    pub text_color: String,
    pub muted_color: String,
    pub grid_color: String,
    pub font_family: String,
    pub colorway: Vec<String>,
    pub show_legend: bool,
    pub show_grid: bool,
    pub show_data_labels: bool,
    pub show_toolbar: bool,
}

/// Kind-specific chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum FigureData {
    /// Category comparison; `groups` colors bars by a grouping field.
    Bar {
        categories: Vec<String>,
        values: Vec<f64>,
        groups: Option<Vec<String>>,
    },
    /// One or more series over a shared ordered x axis.
    Line { x: Vec<String>, series: Vec<Series> },
    /// Individual points, optionally grouped for coloring.
    Scatter { points: Vec<ScatterPoint> },
    /// Proportions of a whole.
    Pie { labels: Vec<String>, values: Vec<f64> },
    /// Distribution summary per category.
    Box { groups: Vec<SampleGroup> },
    /// Individual points per category, drawn jittered.
    Strip { groups: Vec<SampleGroup> },
    /// Single-variable distribution; `bins` is a hint for the renderer.
    Histogram {
        values: Vec<f64>,
        bins: Option<usize>,
    },
    /// Pivoted row x column matrix. Absent cells are `null`.
    Heatmap {
        x_labels: Vec<String>,
        y_labels: Vec<String>,
        cells: Vec<Vec<Option<f64>>>,
        low_color: String,
        high_color: String,
    },
}

/// A named series of y values for line charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// One scatter point with its grouping label (empty when ungrouped).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub group: String,
}

/// A named group of raw sample values for box and strip charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleGroup {
    pub name: String,
    pub values: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_serializes_with_kind_tag_and_camel_case() {
        let figure = Figure::new(
            FigureData::Bar {
                categories: vec!["North".to_string()],
                values: vec![120.0],
                groups: None,
            },
            "Sales by region",
        );
        let json: serde_json::Value = serde_json::from_str(&figure.to_json()).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["title"], "Sales by region");
        assert_eq!(json["categories"][0], "North");
        assert!(json["layout"]["paperColor"].is_string());
        assert!(json.get("xTitle").is_some());
    }

    #[test]
    fn test_heatmap_serializes_absent_cells_as_null() {
        let figure = Figure::new(
            FigureData::Heatmap {
                x_labels: vec!["Q1".to_string()],
                y_labels: vec!["North".to_string()],
                cells: vec![vec![None]],
                low_color: "#faf8ff".to_string(),
                high_color: "#7b68ee".to_string(),
            },
            "",
        );
        let json: serde_json::Value = serde_json::from_str(&figure.to_json()).unwrap();
        assert!(json["cells"][0][0].is_null());
        assert_eq!(json["lowColor"], "#faf8ff");
    }
}
