//! Named theme presets: a fixed set of built-ins plus custom presets kept in
//! one JSON file next to the settings.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::settings::{config_dir, ThemeSettings};
use crate::ui::core::theme::Token;

pub const DEFAULT_PRESET: &str = "slate";

pub const BUILTIN_NAMES: [&str; 9] = [
    "light",
    "dark",
    "slate",
    "sunset",
    "emerald",
    "arctic",
    "sakura",
    "terminal",
    "solarized",
];

struct Palette {
    primary: &'static str,
    secondary: &'static str,
    background: &'static str,
    paper: &'static str,
    text: &'static str,
    text_secondary: &'static str,
    muted: &'static str,
    divider: &'static str,
    error: &'static str,
}

const LIGHT_ERROR: &str = "#d32f2f";
const DARK_ERROR: &str = "#f44336";

fn palette(name: &str) -> Option<Palette> {
    let p = match name {
        "light" => Palette {
            primary: "#1976d2",
            secondary: "#f50057",
            background: "#fafafa",
            paper: "#ffffff",
            text: "#111111",
            text_secondary: "#333333",
            muted: "#9e9e9e",
            divider: "#e0e0e0",
            error: LIGHT_ERROR,
        },
        "dark" => Palette {
            primary: "#90caf9",
            secondary: "#f48fb1",
            background: "#121212",
            paper: "#1e1e1e",
            text: "#ffffff",
            text_secondary: "#b3b3b3",
            muted: "#757575",
            divider: "#2f2f2f",
            error: DARK_ERROR,
        },
        "slate" => Palette {
            primary: "#26a69a",
            secondary: "#ffca28",
            background: "#1b1e24",
            paper: "#23272f",
            text: "#e0e0e0",
            text_secondary: "#9e9e9e",
            muted: "#5c6370",
            divider: "#2c313a",
            error: DARK_ERROR,
        },
        "sunset" => Palette {
            primary: "#ff7043",
            secondary: "#ba68c8",
            background: "#2b1d29",
            paper: "#3a2738",
            text: "#fff3e0",
            text_secondary: "#ffe0b2",
            muted: "#8d6e63",
            divider: "#4a3447",
            error: DARK_ERROR,
        },
        "emerald" => Palette {
            primary: "#2e7d32",
            secondary: "#81c784",
            background: "#f1f8e9",
            paper: "#ffffff",
            text: "#1b5e20",
            text_secondary: "#33691e",
            muted: "#9e9e9e",
            divider: "#c5e1a5",
            error: LIGHT_ERROR,
        },
        "arctic" => Palette {
            primary: "#0288d1",
            secondary: "#26c6da",
            background: "#e1f5fe",
            paper: "#ffffff",
            text: "#01579b",
            text_secondary: "#0277bd",
            muted: "#90a4ae",
            divider: "#b3e5fc",
            error: LIGHT_ERROR,
        },
        "sakura" => Palette {
            primary: "#ec407a",
            secondary: "#f48fb1",
            background: "#fff0f5",
            paper: "#ffffff",
            text: "#4a148c",
            text_secondary: "#6a1b9a",
            muted: "#b39ddb",
            divider: "#f8bbd0",
            error: LIGHT_ERROR,
        },
        "terminal" => Palette {
            primary: "#00ff00",
            secondary: "#00bfa5",
            background: "#000000",
            paper: "#0a0a0a",
            text: "#00ff00",
            text_secondary: "#00cc99",
            muted: "#007f00",
            divider: "#003300",
            error: DARK_ERROR,
        },
        "solarized" => Palette {
            primary: "#268bd2",
            secondary: "#2aa198",
            background: "#fdf6e3",
            paper: "#eee8d5",
            text: "#657b83",
            text_secondary: "#586e75",
            muted: "#93a1a1",
            divider: "#eee8d5",
            error: "#dc322f",
        },
        _ => return None,
    };
    Some(p)
}

/// Built-in preset `name`, with every token set.
pub fn builtin(name: &str) -> Option<ThemeSettings> {
    let p = palette(name)?;
    let mut out = ThemeSettings::default();
    for (token, value) in [
        (Token::Background, p.background),
        (Token::Foreground, p.text),
        (Token::HeaderFg, p.secondary),
        (Token::LabelFg, p.text_secondary),
        (Token::MutedFg, p.muted),
        (Token::AccentFg, p.primary),
        (Token::ErrorFg, p.error),
        (Token::FocusBg, p.primary),
        (Token::FocusFg, p.background),
        (Token::Separator, p.divider),
        (Token::StatusBg, p.paper),
        (Token::StatusFg, p.text_secondary),
        (Token::PopupBorder, p.primary),
        (Token::PopupBg, p.paper),
        (Token::PopupSelectedBg, p.primary),
        (Token::PopupSelectedFg, p.paper),
    ] {
        out.set(token, value);
    }
    Some(out)
}

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// `"slate"` -> `"Slate"`.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug)]
pub enum PresetError {
    Io(PathBuf, io::Error),
    Json(serde_json::Error),
    /// Built-in names cannot be overwritten or deleted.
    Reserved(String),
    EmptyName,
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Io(path, err) => write!(f, "{}: {err}", path.display()),
            PresetError::Json(err) => write!(f, "invalid preset data: {err}"),
            PresetError::Reserved(name) => write!(f, "\"{name}\" is a built-in preset"),
            PresetError::EmptyName => f.write_str("preset name is empty"),
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetError::Io(_, err) => Some(err),
            PresetError::Json(err) => Some(err),
            PresetError::Reserved(_) | PresetError::EmptyName => None,
        }
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        PresetError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PresetFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last: Option<String>,
    /// Insertion ordered (`serde_json` is built with `preserve_order`).
    #[serde(default)]
    custom: Map<String, Value>,
}

/// File-backed preset store. Every call re-reads the file, so several
/// processes sharing it see each other's changes.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("propgrid").join("themes.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Built-ins first, then custom presets in the order they were first saved.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN_NAMES.iter().map(|s| s.to_string()).collect();
        names.extend(self.custom_names());
        names
    }

    pub fn custom_names(&self) -> Vec<String> {
        self.read().custom.keys().cloned().collect()
    }

    /// Built-in names resolve to the built-in even if the file holds a custom
    /// entry of the same name.
    pub fn load(&self, name: &str) -> Option<ThemeSettings> {
        if let Some(theme) = builtin(name) {
            return Some(theme);
        }
        let file = self.read();
        let raw = file.custom.get(name)?;
        match serde_json::from_value(raw.clone()) {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::warn!(name, error = %err, "ignoring malformed custom preset");
                None
            }
        }
    }

    pub fn save(&self, name: &str, theme: &ThemeSettings) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        if is_builtin(name) {
            return Err(PresetError::Reserved(name.to_string()));
        }
        let mut file = self.read();
        file.custom
            .insert(name.to_string(), serde_json::to_value(theme)?);
        self.write(&file)?;
        tracing::info!(name, "saved custom preset");
        Ok(())
    }

    /// Returns whether a custom preset named `name` existed.
    pub fn delete(&self, name: &str) -> Result<bool> {
        if is_builtin(name) {
            return Err(PresetError::Reserved(name.to_string()));
        }
        let mut file = self.read();
        if file.custom.shift_remove(name).is_none() {
            return Ok(false);
        }
        self.write(&file)?;
        tracing::info!(name, "deleted custom preset");
        Ok(true)
    }

    /// Drops every custom preset. The last used name is kept.
    pub fn reset(&self) -> Result<()> {
        let mut file = self.read();
        file.custom.clear();
        self.write(&file)
    }

    pub fn last(&self) -> String {
        self.read()
            .last
            .unwrap_or_else(|| DEFAULT_PRESET.to_string())
    }

    pub fn set_last(&self, name: &str) -> Result<()> {
        let mut file = self.read();
        file.last = Some(name.to_string());
        self.write(&file)
    }

    fn read(&self) -> PresetFile {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return PresetFile::default(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "cannot read presets");
                return PresetFile::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "corrupt preset file, treating as empty");
                PresetFile::default()
            }
        }
    }

    fn write(&self, file: &PresetFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PresetError::Io(parent.to_path_buf(), e))?;
        }
        let data = serde_json::to_string_pretty(file)?;
        std::fs::write(&self.path, data).map_err(|e| PresetError::Io(self.path.clone(), e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/presets.rs"]
mod tests;
