//! Embedded sample datasets for the lilac dashboard.
//!
//! Sample tables are shipped as CSV embedded at compile time via
//! `include_str!`, parsed once on first access, and served as `&'static`
//! references from then on. Nothing here is ever mutated or persisted.
//!
//! - `table`: the column-oriented [`Table`] type with typed accessors
//! - `datasets`: one memoized loader per sample table

pub mod datasets;
mod error;
pub mod table;

pub use error::DataError;
pub use table::{Table, Value};
