//! Page components, one per route.

mod charts;
mod config;
mod insights;
mod not_found;

pub use charts::{ChartsPage, Home};
pub use config::ConfigPage;
pub use insights::InsightsPage;
pub use not_found::NotFound;
