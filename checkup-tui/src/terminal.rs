//! Terminal setup and teardown for checkup TUI.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::panic;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used throughout the TUI.
pub type CheckupTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode, alternate-screen terminal that is restored when dropped.
///
/// Dereferences to [`CheckupTerminal`] for drawing.
pub struct TerminalGuard {
    terminal: CheckupTerminal,
    restored: bool,
}

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Leaves the alternate screen and disables raw mode.
    ///
    /// Reports errors that `Drop` would have to swallow. Calling it more
    /// than once is harmless.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Deref for TerminalGuard {
    type Target = CheckupTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Installs a panic hook that puts the terminal back before the panic
/// message is printed.
///
/// Call once at startup, before entering the TUI.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
