//! Terminal mode lifecycle.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;

pub const FAREWELL: &str = "Goodbye!";

/// Raw mode + alternate screen for as long as the guard lives.
///
/// Restoration happens in `Drop`, so returning early with `?` or unwinding
/// from a panic leaves the user's terminal usable.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the guard undoes whatever was set up
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}

/// Handle SIGINT delivered from outside the key stream (e.g. `kill -INT`).
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(move || {
        restore_terminal();
        println!("{}", FAREWELL);
        std::process::exit(0);
    })?;
    Ok(())
}
