//! Shared Dioxus components and D3.js bridge for the lilac dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3 figure renderer via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (chart cards, toggles, panels)

pub mod components;
pub mod js_bridge;
pub mod state;
