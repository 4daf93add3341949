//! Interactive session: a blocking read-handle-render loop.
//!
//! Each key event is handled to completion (state update, then one full
//! frame) before the next one is read. Nothing runs between events.

mod guard;
mod input;
mod state;

pub use guard::{FAREWELL, TerminalGuard, install_interrupt_handler, restore_terminal};
pub use input::KeyAction;
pub use state::{Flow, Session, ViewMode};

use crate::presentation::renderers::{CrosstermTerminal, TerminalWriter};
use crate::presentation::{GridLayout, Screen, terminal_width};
use anyhow::Result;
use crossterm::event::{self, Event};
use std::io;

/// Run the interactive viewer on the real terminal until the user quits
pub fn run(session: &mut Session, screen: &Screen) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    install_interrupt_handler()?;

    let mut terminal = CrosstermTerminal::stdout();
    event_loop(session, screen, &mut terminal, event::read, terminal_width)
}

/// Drive a session from an event source.
///
/// `width` is queried once per event; the resulting layout is used both to
/// navigate and to draw that event's frame.
pub fn event_loop<T, E, W>(
    session: &mut Session,
    screen: &Screen,
    terminal: &mut T,
    mut next_event: E,
    width: W,
) -> Result<()>
where
    T: TerminalWriter,
    E: FnMut() -> io::Result<Event>,
    W: Fn() -> usize,
{
    let layout = GridLayout::compute(width(), session.names());
    terminal.draw_frame(&screen.render(session, &layout))?;

    loop {
        let layout = match next_event()? {
            Event::Key(key) => {
                let layout = GridLayout::compute(width(), session.names());
                let action = KeyAction::from_key(key);
                if session.handle(action, layout.columns_per_row) == Flow::Exit {
                    return Ok(());
                }
                layout
            }
            Event::Resize(..) => GridLayout::compute(width(), session.names()),
            _ => continue,
        };

        terminal.draw_frame(&screen.render(session, &layout))?;
    }
}
