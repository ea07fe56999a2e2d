use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::core::theme::Token;

const APP_DIR: &str = "propgrid";
const SETTINGS_FILE: &str = "settings.json";

/// User settings, stored as JSON in the config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Preset to start with. Falls back to the last used preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// `truecolor`, `256` or `16`; skips terminal detection when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_support: Option<String>,
    /// `tracing` filter directive, used when `PROPGRID_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// Per-token overrides applied on top of the preset.
    #[serde(default)]
    pub colors: ThemeSettings,
}

/// Optional color strings per theme token: `#RRGGBB` or an ANSI color name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_selected_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_selected_fg: Option<String>,
}

impl ThemeSettings {
    pub fn get(&self, token: Token) -> Option<&str> {
        self.slot(token).as_deref()
    }

    pub fn set(&mut self, token: Token, value: impl Into<String>) {
        *self.slot_mut(token) = Some(value.into());
    }

    fn slot(&self, token: Token) -> &Option<String> {
        match token {
            Token::Background => &self.background,
            Token::Foreground => &self.foreground,
            Token::HeaderFg => &self.header_fg,
            Token::LabelFg => &self.label_fg,
            Token::MutedFg => &self.muted_fg,
            Token::AccentFg => &self.accent_fg,
            Token::ErrorFg => &self.error_fg,
            Token::FocusBg => &self.focus_bg,
            Token::FocusFg => &self.focus_fg,
            Token::Separator => &self.separator,
            Token::StatusBg => &self.status_bg,
            Token::StatusFg => &self.status_fg,
            Token::PopupBorder => &self.popup_border,
            Token::PopupBg => &self.popup_bg,
            Token::PopupSelectedBg => &self.popup_selected_bg,
            Token::PopupSelectedFg => &self.popup_selected_fg,
        }
    }

    fn slot_mut(&mut self, token: Token) -> &mut Option<String> {
        match token {
            Token::Background => &mut self.background,
            Token::Foreground => &mut self.foreground,
            Token::HeaderFg => &mut self.header_fg,
            Token::LabelFg => &mut self.label_fg,
            Token::MutedFg => &mut self.muted_fg,
            Token::AccentFg => &mut self.accent_fg,
            Token::ErrorFg => &mut self.error_fg,
            Token::FocusBg => &mut self.focus_bg,
            Token::FocusFg => &mut self.focus_fg,
            Token::Separator => &mut self.separator,
            Token::StatusBg => &mut self.status_bg,
            Token::StatusFg => &mut self.status_fg,
            Token::PopupBorder => &mut self.popup_border,
            Token::PopupBg => &mut self.popup_bg,
            Token::PopupSelectedBg => &mut self.popup_selected_bg,
            Token::PopupSelectedFg => &mut self.popup_selected_fg,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// Writes default settings to `path` unless the file already exists.
pub fn ensure_settings_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "wrote default settings");
    }
    Ok(())
}

/// Reads settings from `path`. Missing or unreadable files yield defaults.
pub fn load_settings(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "no settings file");
            return Settings::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings");
            Settings::default()
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config"));
    }

    #[cfg(target_os = "windows")]
    {
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// `<cache>/propgrid/logs`, or a directory under the temp dir.
pub fn log_dir() -> PathBuf {
    cache_dir()
        .map(|dir| dir.join(APP_DIR).join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR).join("logs"))
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
