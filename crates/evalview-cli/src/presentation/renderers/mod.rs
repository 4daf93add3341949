pub mod backend;

pub use backend::{CrosstermTerminal, MockTerminal, TerminalWriter};
