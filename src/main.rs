use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use propgrid::app::theme::resolve_theme;
use propgrid::app::{EventResult, GridEditor};
use propgrid::grid::load_schema;
use propgrid::services::presets::{self, PresetStore, BUILTIN_NAMES, DEFAULT_PRESET};
use propgrid::services::settings::{self, Settings};
use propgrid::tui::crossterm::into_input_event;
use propgrid::tui::terminal_guard::TerminalGuard;
use propgrid::ui::backend::terminal::RatatuiTerminal;
use propgrid::ui::core::color_support::{
    detect_terminal_color_support, parse_color_support, TerminalColorSupport, COLOR_SUPPORT_ENV,
};
use propgrid::ui::core::painter::Painter;
use propgrid::ui::core::theme::Theme;
use serde_json::Value;

mod logging;

const USAGE: &str = "usage: propgrid <schema.json> <object.json> [--disabled] [--theme NAME]";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    schema: PathBuf,
    object: PathBuf,
    disabled: bool,
    theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Run(CliArgs),
    Help,
}

fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut positional: Vec<String> = Vec::new();
    let mut disabled = false;
    let mut theme = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--disabled" => disabled = true,
            "--theme" => match args.next() {
                Some(name) if !name.trim().is_empty() => theme = Some(name),
                _ => return Err("--theme needs a preset name".to_string()),
            },
            other => {
                if let Some(name) = other.strip_prefix("--theme=") {
                    if name.trim().is_empty() {
                        return Err("--theme needs a preset name".to_string());
                    }
                    theme = Some(name.to_string());
                } else if other.starts_with("--") {
                    return Err(format!("unknown option {other}"));
                } else {
                    positional.push(arg);
                }
            }
        }
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next(), positional.next()) {
        (Some(schema), Some(object), None) => Ok(Command::Run(CliArgs {
            schema: PathBuf::from(schema),
            object: PathBuf::from(object),
            disabled,
            theme,
        })),
        (_, _, Some(extra)) => Err(format!("unexpected argument {extra}")),
        _ => Err("expected a schema file and an object file".to_string()),
    }
}

/// `--theme`, then the settings file, then the last preset used, when known.
fn pick_theme(cli: Option<&str>, settings: Option<&str>, last: &str, available: &[String]) -> String {
    for name in [cli, settings, Some(last)].into_iter().flatten() {
        if available.iter().any(|n| n == name) {
            return name.to_string();
        }
        tracing::warn!(theme = name, "unknown theme preset");
    }
    DEFAULT_PRESET.to_string()
}

/// Env override, then the settings file, then terminal detection.
fn color_support(settings: &Settings) -> TerminalColorSupport {
    std::env::var(COLOR_SUPPORT_ENV)
        .ok()
        .as_deref()
        .and_then(parse_color_support)
        .or_else(|| settings.color_support.as_deref().and_then(parse_color_support))
        .unwrap_or_else(detect_terminal_color_support)
}

/// A missing object file starts out empty and is created on the first save.
fn read_object(path: &Path) -> io::Result<Value> {
    match std::fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).map_err(io::Error::from),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "object file missing, starting empty");
            Ok(Value::Object(serde_json::Map::new()))
        }
        Err(err) => Err(err),
    }
}

fn write_object(path: &Path, object: &Value) -> io::Result<()> {
    let mut text = serde_json::to_string_pretty(object).map_err(io::Error::from)?;
    text.push('\n');
    std::fs::write(path, text)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_themes(
    store: Option<&PresetStore>,
    settings: &Settings,
    support: TerminalColorSupport,
) -> Vec<(String, Theme)> {
    let names: Vec<String> = match store {
        Some(store) => store.list(),
        None => BUILTIN_NAMES.iter().map(|n| n.to_string()).collect(),
    };
    names
        .into_iter()
        .map(|name| {
            let preset = match store {
                Some(store) => store.load(&name),
                None => presets::builtin(&name),
            };
            let theme = resolve_theme(preset.as_ref(), &settings.colors, support);
            (name, theme)
        })
        .collect()
}

fn main() -> io::Result<()> {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(cli)) => cli,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("propgrid: {err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let settings = match settings::settings_path() {
        Some(path) => {
            if let Err(err) = settings::ensure_settings_file(&path) {
                eprintln!("propgrid: cannot create {}: {err}", path.display());
            }
            settings::load_settings(&path)
        }
        None => Settings::default(),
    };
    let _logging = logging::init(settings.log_filter.as_deref());

    let schema = match load_schema(&cli.schema) {
        Ok(schema) => schema,
        Err(err) => {
            eprintln!("propgrid: {err}");
            std::process::exit(1);
        }
    };
    let object = match read_object(&cli.object) {
        Ok(object) => object,
        Err(err) => {
            eprintln!("propgrid: cannot read {}: {err}", cli.object.display());
            std::process::exit(1);
        }
    };

    let store = PresetStore::default_path().map(PresetStore::new);
    let support = color_support(&settings);
    let themes = load_themes(store.as_ref(), &settings, support);
    let available: Vec<String> = themes.iter().map(|(n, _)| n.clone()).collect();
    let last = store
        .as_ref()
        .map(PresetStore::last)
        .unwrap_or_else(|| DEFAULT_PRESET.to_string());
    let current = pick_theme(cli.theme.as_deref(), settings.theme.as_deref(), &last, &available);

    let mut editor = GridEditor::new(schema, object).with_title(file_label(&cli.object));
    editor.set_themes(themes, &current);
    if cli.disabled {
        editor.set_disabled(true);
    }

    let exit_code = run(&mut editor, &cli, store.as_ref())?;
    if let Some(code) = exit_code {
        std::process::exit(code);
    }
    Ok(())
}

/// Runs the terminal loop. Returns an exit code when a signal ended it.
fn run(editor: &mut GridEditor, cli: &CliArgs, store: Option<&PresetStore>) -> io::Result<Option<i32>> {
    let guard = TerminalGuard::enter()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    if let Err(err) =
        propgrid::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)
    {
        tracing::warn!(error = %err, "signal handlers not installed");
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let restorer = guard.restorer();
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restorer.restore();
        previous(info);
    }));

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut painter = Painter::new();
    let object_label = file_label(&cli.object);

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal.exit_code()));
        }

        terminal.draw(|backend, area| {
            let cursor = editor.paint(area, &mut painter);
            backend.draw(area, painter.cmds());
            backend.set_cursor(cursor);
        })?;

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = into_input_event(crossterm::event::read()?) else {
            continue;
        };

        match editor.handle_input(&event) {
            EventResult::Quit => {
                tracing::info!(dirty = editor.is_dirty(), "quit");
                return Ok(None);
            }
            EventResult::Save => match write_object(&cli.object, editor.object()) {
                Ok(()) => {
                    tracing::info!(path = %cli.object.display(), "object saved");
                    editor.mark_saved(format!("Saved {object_label}"));
                }
                Err(err) => {
                    tracing::warn!(path = %cli.object.display(), error = %err, "save failed");
                    editor.set_message(format!("Save failed: {err}"));
                }
            },
            EventResult::Reload => match load_schema(&cli.schema) {
                Ok(schema) => {
                    editor.set_schema(schema);
                    editor.set_message("Schema reloaded");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "schema reload failed");
                    editor.set_message(err.to_string());
                }
            },
            EventResult::ThemeChanged(name) => {
                if let Some(Err(err)) = store.map(|s| s.set_last(&name)) {
                    tracing::warn!(theme = %name, error = %err, "could not remember theme");
                }
            }
            EventResult::Consumed | EventResult::Ignored => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
