//! Chart builders: pure functions from (table, fields, theme, config) to
//! themed [`Figure`] descriptions.
//!
//! Every builder runs the same post-processing step: palette colors, font,
//! colorway, and the config-driven visibility flags are applied through
//! [`apply_theme`], and the title is blanked when titles are toggled off.
//! Axis titles default to the field name with underscores replaced by
//! spaces and each word capitalized.

use lilac_data::{DataError, Table};

use crate::config::ChartConfig;
use crate::figure::{Figure, FigureData, Layout, SampleGroup, ScatterPoint, Series};
use crate::theme::{colorway, Palette, Theme};

/// Font stack applied to every chart.
pub const FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

/// Bar chart for category comparisons.
pub fn bar_chart(
    table: &Table,
    x: &str,
    y: &str,
    title: &str,
    group: Option<&str>,
    theme: Theme,
    config: &ChartConfig,
) -> Result<Figure, DataError> {
    let categories = table.labels(x)?;
    let values = table.numbers(y)?;
    let groups = group.map(|g| table.labels(g)).transpose()?;

    let mut figure = Figure::new(
        FigureData::Bar {
            categories,
            values,
            groups,
        },
        title,
    );
    figure.x_title = humanize(x);
    figure.y_title = humanize(y);
    Ok(apply_theme(figure, theme, config))
}

/// Line chart for time series; one series per y field.
pub fn line_chart(
    table: &Table,
    x: &str,
    ys: &[&str],
    title: &str,
    theme: Theme,
    config: &ChartConfig,
) -> Result<Figure, DataError> {
    let x_values = table.labels(x)?;
    let series = ys
        .iter()
        .map(|y| {
            Ok(Series {
                name: (*y).to_string(),
                values: table.numbers(y)?,
            })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    let mut figure = Figure::new(FigureData::Line { x: x_values, series }, title);
    figure.x_title = humanize(x);
    figure.y_title = "Value".to_string();
    Ok(apply_theme(figure, theme, config))
}

/// Scatter chart for two continuous variables, optionally colored by group.
pub fn scatter_chart(
    table: &Table,
    x: &str,
    y: &str,
    title: &str,
    group: Option<&str>,
    theme: Theme,
    config: &ChartConfig,
) -> Result<Figure, DataError> {
    let xs = table.numbers(x)?;
    let ys = table.numbers(y)?;
    let groups = match group {
        Some(g) => table.labels(g)?,
        None => vec![String::new(); xs.len()],
    };

    let points = xs
        .into_iter()
        .zip(ys)
        .zip(groups)
        .map(|((px, py), g)| ScatterPoint {
            x: px,
            y: py,
            group: g,
        })
        .collect();

    let mut figure = Figure::new(FigureData::Scatter { points }, title);
    figure.x_title = humanize(x);
    figure.y_title = humanize(y);
    Ok(apply_theme(figure, theme, config))
}

/// Pie chart for proportions.
pub fn pie_chart(
    table: &Table,
    names: &str,
    values: &str,
    title: &str,
    theme: Theme,
    config: &ChartConfig,
) -> Result<Figure, DataError> {
    let labels = table.labels(names)?;
    let values = table.numbers(values)?;

    let figure = Figure::new(FigureData::Pie { labels, values }, title);
    Ok(apply_theme(figure, theme, config))
}

/// Box plot for distribution by category.
pub fn box_chart(
    table: &Table,
    x: &str,
    y: &str,
    title: &str,
    theme: Theme,
    config: &ChartConfig,
) -> Result<Figure, DataError> {
    let groups = group_samples(table, x, y)?;
    let mut figure = Figure::new(FigureData::Box { groups }, title);
    figure.x_title = humanize(x);
    figure.y_title = humanize(y);
    Ok(apply_theme(figure, theme, config))
}

/// Strip plot: individual jittered points by category.
pub fn strip_chart(
    table: &Table,
    x: &str,
    y: &str,
    title: &str,
    theme: Theme,
    config: &ChartConfig,
) -> Result<Figure, DataError> {
    let groups = group_samples(table, x, y)?;
    let mut figure = Figure::new(FigureData::Strip { groups }, title);
    figure.x_title = humanize(x);
    figure.y_title = humanize(y);
    Ok(apply_theme(figure, theme, config))
}

/// Histogram for single-variable distribution.
pub fn histogram_chart(
    table: &Table,
    x: &str,
    title: &str,
    bins: Option<usize>,
    theme: Theme,
    config: &ChartConfig,
) -> Result<Figure, DataError> {
    let values = table.numbers(x)?;
    let mut figure = Figure::new(FigureData::Histogram { values, bins }, title);
    figure.x_title = humanize(x);
    figure.y_title = "Count".to_string();
    Ok(apply_theme(figure, theme, config))
}

/// Heatmap over a pivoted row x column matrix.
///
/// The table is pivoted on (`y` rows, `x` columns) with the numeric `z`
/// field aggregated by sum. Duplicate (row, column) pairs add together;
/// cells with no source rows stay `null`. Labels are sorted
/// lexicographically on both axes.
pub fn heatmap_chart(
    table: &Table,
    x: &str,
    y: &str,
    z: &str,
    title: &str,
    theme: Theme,
    config: &ChartConfig,
) -> Result<Figure, DataError> {
    let palette = Palette::resolve(theme);
    let (x_labels, y_labels, cells) = pivot_sum(table, x, y, z)?;

    let mut figure = Figure::new(
        FigureData::Heatmap {
            x_labels,
            y_labels,
            cells,
            low_color: palette.chart_paper.to_string(),
            high_color: palette.primary.to_string(),
        },
        title,
    );
    figure.x_title = humanize(x);
    figure.y_title = humanize(y);
    Ok(apply_theme(figure, theme, config))
}

/// Shared theming step: palette, font, colorway, and visibility flags.
fn apply_theme(mut figure: Figure, theme: Theme, config: &ChartConfig) -> Figure {
    let palette = Palette::resolve(theme);
    figure.layout = Layout {
        paper_color: palette.chart_paper.to_string(),
        plot_color: palette.chart_plot.to_string(),
        text_color: palette.text_primary.to_string(),
        muted_color: palette.text_secondary.to_string(),
        grid_color: palette.border.to_string(),
        font_family: FONT_FAMILY.to_string(),
        colorway: colorway(theme).iter().map(|c| c.to_string()).collect(),
        show_legend: config.show_legend,
        show_grid: config.show_grid,
        show_data_labels: config.show_data_labels,
        show_toolbar: config.show_toolbar,
    };
    if !config.show_titles {
        figure.title.clear();
    }
    figure
}

/// Group the `y` values by the `x` labels, preserving first-appearance order.
fn group_samples(table: &Table, x: &str, y: &str) -> Result<Vec<SampleGroup>, DataError> {
    let labels = table.labels(x)?;
    let values = table.numbers(y)?;

    let mut groups: Vec<SampleGroup> = Vec::new();
    for (label, value) in labels.into_iter().zip(values) {
        match groups.iter_mut().find(|g| g.name == label) {
            Some(group) => group.values.push(value),
            None => groups.push(SampleGroup {
                name: label,
                values: vec![value],
            }),
        }
    }
    Ok(groups)
}

/// Pivot `z` by (`y` rows, `x` columns), summing duplicates.
fn pivot_sum(
    table: &Table,
    x: &str,
    y: &str,
    z: &str,
) -> Result<(Vec<String>, Vec<String>, Vec<Vec<Option<f64>>>), DataError> {
    let col_labels = table.labels(x)?;
    let row_labels = table.labels(y)?;
    let values = table.numbers(z)?;

    let mut x_labels = col_labels.clone();
    x_labels.sort();
    x_labels.dedup();
    let mut y_labels = row_labels.clone();
    y_labels.sort();
    y_labels.dedup();

    let mut cells = vec![vec![None; x_labels.len()]; y_labels.len()];
    for ((col, row), value) in col_labels.iter().zip(row_labels.iter()).zip(values) {
        if let (Ok(ci), Ok(ri)) = (
            x_labels.binary_search(col),
            y_labels.binary_search(row),
        ) {
            cells[ri][ci] = Some(cells[ri][ci].unwrap_or(0.0) + value);
        }
    }

    Ok((x_labels, y_labels, cells))
}

/// Default axis title for a field: underscores become spaces and each
/// word is capitalized (`response_ms` -> `Response Ms`).
fn humanize(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lilac_data::datasets;

    fn default_config() -> ChartConfig {
        ChartConfig::default()
    }

    #[test]
    fn test_humanize_field_names() {
        assert_eq!(humanize("response_ms"), "Response Ms");
        assert_eq!(humanize("region"), "Region");
        assert_eq!(humanize("units"), "Units");
    }

    #[test]
    fn test_bar_chart_axis_titles_default_from_fields() {
        let figure = bar_chart(
            datasets::sales_by_region(),
            "region",
            "sales",
            "Sales by region",
            Some("region"),
            Theme::Light,
            &default_config(),
        )
        .unwrap();
        assert_eq!(figure.kind(), "bar");
        assert_eq!(figure.title, "Sales by region");
        assert_eq!(figure.x_title, "Region");
        assert_eq!(figure.y_title, "Sales");
    }

    #[test]
    fn test_show_titles_off_blanks_every_builder_title() {
        let config = ChartConfig {
            show_titles: false,
            ..Default::default()
        };
        let figures = [
            bar_chart(
                datasets::sales_by_region(),
                "region",
                "sales",
                "t",
                None,
                Theme::Light,
                &config,
            )
            .unwrap(),
            line_chart(
                datasets::monthly_revenue(),
                "month",
                &["revenue", "costs"],
                "t",
                Theme::Light,
                &config,
            )
            .unwrap(),
            scatter_chart(
                datasets::scatter_segments(),
                "units",
                "revenue",
                "t",
                Some("segment"),
                Theme::Light,
                &config,
            )
            .unwrap(),
            pie_chart(
                datasets::category_share(),
                "category",
                "share",
                "t",
                Theme::Light,
                &config,
            )
            .unwrap(),
            box_chart(
                datasets::team_scores(),
                "team",
                "score",
                "t",
                Theme::Light,
                &config,
            )
            .unwrap(),
            strip_chart(
                datasets::team_scores(),
                "team",
                "score",
                "t",
                Theme::Light,
                &config,
            )
            .unwrap(),
            histogram_chart(
                datasets::response_times(),
                "response_ms",
                "t",
                Some(24),
                Theme::Light,
                &config,
            )
            .unwrap(),
            heatmap_chart(
                datasets::quarterly_revenue(),
                "quarter",
                "region",
                "revenue",
                "t",
                Theme::Light,
                &config,
            )
            .unwrap(),
        ];
        for figure in figures {
            assert_eq!(figure.title, "", "kind {}", figure.kind());
        }
    }

    #[test]
    fn test_show_legend_and_grid_flags_flow_into_layout() {
        let config = ChartConfig {
            show_legend: false,
            show_grid: false,
            ..Default::default()
        };
        let figure = scatter_chart(
            datasets::scatter_segments(),
            "units",
            "revenue",
            "Units vs revenue",
            Some("segment"),
            Theme::Light,
            &config,
        )
        .unwrap();
        assert!(!figure.layout.show_legend);
        assert!(!figure.layout.show_grid);
        assert!(figure.layout.show_data_labels);
    }

    #[test]
    fn test_dark_theme_layout_uses_dark_palette_and_colorway() {
        let figure = bar_chart(
            datasets::sales_by_region(),
            "region",
            "sales",
            "Sales",
            None,
            Theme::Dark,
            &default_config(),
        )
        .unwrap();
        assert_eq!(figure.layout.paper_color, "#1a1625");
        assert_eq!(figure.layout.plot_color, "#252035");
        assert_eq!(figure.layout.colorway[0], "#a78bfa");
    }

    #[test]
    fn test_line_chart_one_series_per_field() {
        let figure = line_chart(
            datasets::monthly_revenue(),
            "month",
            &["revenue", "costs"],
            "Revenue vs costs",
            Theme::Light,
            &default_config(),
        )
        .unwrap();
        match figure.data {
            FigureData::Line { x, series } => {
                assert_eq!(x.len(), 12);
                assert_eq!(series.len(), 2);
                assert_eq!(series[0].name, "revenue");
                assert_eq!(series[1].name, "costs");
            }
            other => panic!("expected line data, got {other:?}"),
        }
        assert_eq!(figure.y_title, "Value");
    }

    #[test]
    fn test_group_samples_preserves_first_appearance_order() {
        let groups = group_samples(datasets::team_scores(), "team", "score").unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
        assert!(groups.iter().all(|g| g.values.len() == 8));
    }

    #[test]
    fn test_heatmap_pivot_sums_duplicate_pairs() {
        let table = Table::from_csv("quarter,region,revenue\nQ1,North,80\nQ1,North,20\n").unwrap();
        let (x_labels, y_labels, cells) = pivot_sum(&table, "quarter", "region", "revenue").unwrap();
        assert_eq!(x_labels, ["Q1"]);
        assert_eq!(y_labels, ["North"]);
        assert_eq!(cells[0][0], Some(100.0));
    }

    #[test]
    fn test_heatmap_pivot_leaves_absent_cells_null() {
        let table =
            Table::from_csv("quarter,region,revenue\nQ1,North,80\nQ2,South,65\n").unwrap();
        let (x_labels, y_labels, cells) = pivot_sum(&table, "quarter", "region", "revenue").unwrap();
        assert_eq!(x_labels, ["Q1", "Q2"]);
        assert_eq!(y_labels, ["North", "South"]);
        assert_eq!(cells[0][0], Some(80.0));
        assert_eq!(cells[0][1], None);
        assert_eq!(cells[1][0], None);
        assert_eq!(cells[1][1], Some(65.0));
    }

    #[test]
    fn test_heatmap_scale_runs_paper_to_primary() {
        let figure = heatmap_chart(
            datasets::quarterly_revenue(),
            "quarter",
            "region",
            "revenue",
            "Revenue by quarter and region",
            Theme::Dark,
            &default_config(),
        )
        .unwrap();
        match figure.data {
            FigureData::Heatmap {
                low_color,
                high_color,
                x_labels,
                y_labels,
                cells,
            } => {
                assert_eq!(low_color, "#1a1625");
                assert_eq!(high_color, "#a78bfa");
                assert_eq!(x_labels, ["Q1", "Q2", "Q3", "Q4"]);
                assert_eq!(y_labels, ["East", "North", "South", "West"]);
                assert!(cells.iter().flatten().all(|c| c.is_some()));
            }
            other => panic!("expected heatmap data, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_propagates() {
        let result = bar_chart(
            datasets::sales_by_region(),
            "region",
            "profit",
            "Profit",
            None,
            Theme::Light,
            &default_config(),
        );
        assert!(matches!(result, Err(DataError::MissingColumn(_))));
    }
}
