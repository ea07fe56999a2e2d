use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How long the signal thread waits for the main loop before exiting on its own.
const SIGNAL_GRACE: Duration = Duration::from_secs(2);

/// Switches the terminal into and out of editor mode.
pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, mouse capture and bracketed paste.
#[derive(Debug, Default)]
pub struct Crossterm;

impl TerminalOps for Crossterm {
    fn enter(&self) -> io::Result<()> {
        use crossterm::event::{EnableBracketedPaste, EnableMouseCapture};
        use crossterm::terminal::{self, EnterAlternateScreen};

        terminal::enable_raw_mode()?;
        let entered = crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        );
        if entered.is_err() {
            let _ = terminal::disable_raw_mode();
        }
        entered
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::event::{DisableBracketedPaste, DisableMouseCapture};
        use crossterm::terminal::{self, LeaveAlternateScreen};

        // Both steps always run.
        let steps = [
            terminal::disable_raw_mode(),
            crossterm::execute!(
                io::stdout(),
                DisableBracketedPaste,
                DisableMouseCapture,
                LeaveAlternateScreen,
                crossterm::cursor::Show
            ),
        ];
        steps.into_iter().find_map(Result::err).map_or(Ok(()), Err)
    }
}

struct Shared {
    left: AtomicBool,
    ops: Box<dyn TerminalOps>,
}

/// Cloneable handle that leaves editor mode exactly once, whether it is
/// called from `Drop`, a panic hook or the signal thread.
#[derive(Clone)]
pub struct TerminalRestorer(Arc<Shared>);

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.0.left.swap(true, Ordering::SeqCst) {
            Ok(())
        } else {
            self.0.ops.leave()
        }
    }
}

pub struct TerminalGuard(TerminalRestorer);

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        Self::enter_with(Crossterm)
    }

    pub fn enter_with(ops: impl TerminalOps) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self(TerminalRestorer(Arc::new(Shared {
            left: AtomicBool::new(false),
            ops: Box::new(ops),
        }))))
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.0.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.0.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    #[cfg(unix)]
    fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        match signal {
            SIGINT => Some(Self::Interrupt),
            SIGTERM => Some(Self::Terminate),
            _ => None,
        }
    }

    /// 128 plus the signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Interrupt => 130,
            Self::Terminate => 143,
        }
    }
}

/// Sends SIGINT and SIGTERM to the main loop. A loop that has not exited after
/// the grace period gets the terminal restored under it and the process ends.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};

    let mut signals = signal_hook::iterator::Signals::new([SIGINT, SIGTERM])?;
    let handle = std::thread::spawn(move || {
        let Some(signal) = signals.forever().find_map(TerminationSignal::from_raw) else {
            return;
        };
        tracing::info!(?signal, "termination signal received");
        if tx.send(signal).is_ok() {
            std::thread::sleep(SIGNAL_GRACE);
        }
        let _ = restorer.restore();
        std::process::exit(signal.exit_code());
    });
    Ok(handle)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
