// evalview: browse a directory of evaluation-run results in the terminal.
//
// Data flow:
// - runtime::load_results reads every <id>.json once, up front
// - tui::Session owns the loaded records and is the only thing that mutates
//   view state (cursor, list/detail mode)
// - presentation renders a whole frame from &Session + GridLayout; it never
//   mutates anything
//
// Grid geometry is recomputed from the live terminal width on every key press
// and the same GridLayout value is used for navigation and drawing.

mod args;
mod commands;
mod logging;
pub mod presentation;
pub mod tui;
pub mod types;

pub use args::Cli;
pub use commands::run;
