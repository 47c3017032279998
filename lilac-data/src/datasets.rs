//! Memoized loaders for the sample tables.
//!
//! Each loader parses its embedded CSV on first call and hands out
//! `&'static` references afterwards. The data never changes for the
//! lifetime of the process, so a `OnceLock` per table is all the caching
//! the dashboard needs.

use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::table::{Table, Value};

// Embedded sample data. In a real deployment these would come from an
// API, file, or database load.
const SALES_BY_REGION_CSV: &str = include_str!("../assets/sales_by_region.csv");
const SCATTER_SEGMENTS_CSV: &str = include_str!("../assets/scatter_segments.csv");
const CATEGORY_SHARE_CSV: &str = include_str!("../assets/category_share.csv");
const TEAM_SCORES_CSV: &str = include_str!("../assets/team_scores.csv");
const RESPONSE_TIMES_CSV: &str = include_str!("../assets/response_times.csv");
const QUARTERLY_REVENUE_CSV: &str = include_str!("../assets/quarterly_revenue.csv");

fn embedded(cell: &'static OnceLock<Table>, name: &str, csv: &str) -> &'static Table {
    cell.get_or_init(|| {
        log::debug!("parsing embedded dataset {name}");
        Table::from_csv(csv).expect("embedded dataset is well-formed")
    })
}

/// Sales and order counts by region (bar chart).
pub fn sales_by_region() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    embedded(&TABLE, "sales_by_region", SALES_BY_REGION_CSV)
}

/// Units sold vs revenue by customer segment (scatter chart).
pub fn scatter_segments() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    embedded(&TABLE, "scatter_segments", SCATTER_SEGMENTS_CSV)
}

/// Market share by product category (pie chart).
pub fn category_share() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    embedded(&TABLE, "category_share", CATEGORY_SHARE_CSV)
}

/// Individual scores by team (box and strip charts).
pub fn team_scores() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    embedded(&TABLE, "team_scores", TEAM_SCORES_CSV)
}

/// Request response times in milliseconds (histogram).
pub fn response_times() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    embedded(&TABLE, "response_times", RESPONSE_TIMES_CSV)
}

/// Revenue by quarter and region (heatmap).
pub fn quarterly_revenue() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    embedded(&TABLE, "quarterly_revenue", QUARTERLY_REVENUE_CSV)
}

/// Monthly revenue vs costs for 2024 (line chart).
///
/// Month labels are generated from month-start dates so the x axis reads
/// `2024-01` through `2024-12`.
pub fn monthly_revenue() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    TABLE.get_or_init(|| {
        let revenue = [
            100.0, 115.0, 108.0, 125.0, 132.0, 128.0, 140.0, 138.0, 145.0, 150.0, 148.0, 160.0,
        ];
        let costs = [
            70.0, 78.0, 75.0, 82.0, 88.0, 85.0, 92.0, 90.0, 95.0, 98.0, 96.0, 102.0,
        ];

        let mut rows = Vec::with_capacity(revenue.len());
        for (i, (r, c)) in revenue.iter().zip(costs.iter()).enumerate() {
            let month_start = NaiveDate::from_ymd_opt(2024, i as u32 + 1, 1)
                .expect("2024 has twelve month starts");
            rows.push(vec![
                Value::Text(month_start.format("%Y-%m").to_string()),
                Value::Number(*r),
                Value::Number(*c),
            ]);
        }

        Table::new(
            vec![
                "month".to_string(),
                "revenue".to_string(),
                "costs".to_string(),
            ],
            rows,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaders_are_memoized() {
        let first = sales_by_region();
        let second = sales_by_region();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_sales_by_region_shape() {
        let table = sales_by_region();
        assert_eq!(table.column_names(), ["region", "sales", "orders"]);
        assert_eq!(table.len(), 5);
        assert_eq!(
            table.numbers("sales").unwrap(),
            vec![120.0, 95.0, 140.0, 88.0, 110.0]
        );
    }

    #[test]
    fn test_monthly_revenue_month_labels() {
        let table = monthly_revenue();
        let months = table.labels("month").unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months.first().unwrap(), "2024-01");
        assert_eq!(months.last().unwrap(), "2024-12");
    }

    #[test]
    fn test_team_scores_has_three_teams() {
        let table = team_scores();
        let mut teams = table.labels("team").unwrap();
        teams.dedup();
        assert_eq!(teams, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_quarterly_revenue_covers_all_cells() {
        let table = quarterly_revenue();
        // 4 quarters x 4 regions
        assert_eq!(table.len(), 16);
    }

    #[test]
    fn test_response_times_are_numeric() {
        let values = response_times().numbers("response_ms").unwrap();
        assert_eq!(values.len(), 40);
        assert!(values.iter().all(|v| *v > 0.0));
    }
}
