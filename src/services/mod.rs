//! File-backed services used by the terminal host: settings and theme presets.

pub mod presets;
pub mod settings;

pub use presets::{display_name, PresetError, PresetStore};
pub use settings::{load_settings, Settings, ThemeSettings};
