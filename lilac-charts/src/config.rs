//! Chart display toggles.

/// The five chart-display toggles exposed on the Config page.
///
/// Every flag defaults to `true`. The UI replaces the whole value on any
/// toggle change; individual fields are never mutated in place elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// Show chart legends.
    pub show_legend: bool,
    /// Show chart titles.
    pub show_titles: bool,
    /// Show data labels (bar value labels, pie slice labels).
    pub show_data_labels: bool,
    /// Show axis grid lines.
    pub show_grid: bool,
    /// Show the per-chart toolbar (SVG download).
    pub show_toolbar: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_titles: true,
            show_data_labels: true,
            show_grid: true,
            show_toolbar: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartConfig;

    #[test]
    fn test_all_toggles_default_on() {
        let config = ChartConfig::default();
        assert!(config.show_legend);
        assert!(config.show_titles);
        assert!(config.show_data_labels);
        assert!(config.show_grid);
        assert!(config.show_toolbar);
    }
}
