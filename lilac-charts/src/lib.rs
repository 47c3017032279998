//! Themes, chart config, and figure builders for the lilac dashboard.
//!
//! This crate is pure data shaping: it turns the sample tables from
//! `lilac-data` into serializable [`figure::Figure`] descriptions that the
//! D3 bridge in `lilac-ui` renders. Figures are deterministic functions of
//! (table, field names, theme, config) with no hidden state, so everything
//! here is natively testable.

pub mod builders;
pub mod config;
pub mod figure;
pub mod pages;
pub mod theme;

pub use config::ChartConfig;
pub use figure::Figure;
pub use theme::{Palette, Theme};
