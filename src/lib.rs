//! propgrid: schema-driven property editing.
//!
//! - grid: schema model, field access, control dispatch and the `PropertyGrid` facade
//! - ui: paint commands, hit testing, widgets and rendering backends
//! - app: the interactive editor and theme resolution
//! - services: settings and theme presets on disk
//! - tui: crossterm input mapping and terminal lifecycle (`tui` feature)

pub mod app;
pub mod core;
pub mod grid;
pub mod services;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
