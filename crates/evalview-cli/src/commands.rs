use super::args::Cli;
use super::logging;
use crate::presentation::{GridLayout, Palette, Screen, terminal_width};
use crate::tui::{self, FAREWELL, Session};
use anyhow::Result;
use evalview_runtime::{Config, Error, load_results};
use is_terminal::IsTerminal;

const USAGE_HINT: &str = "Usage: evalview [RESULTS_DIR]\n\
     Pass the directory holding one <id>.json result file per run (default: ./runs).";

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let level = cli
        .log_level
        .map(|level| level.to_string())
        .or_else(|| config.log_level.clone());
    logging::init(level.as_deref());

    let results_dir = config.resolve_results_dir(cli.results_dir.as_deref());
    let results = load_results(&results_dir).map_err(|e| match e {
        Error::NotFound(_) => anyhow::anyhow!("{}\n\n{}", e, USAGE_HINT),
        other => other.into(),
    })?;

    let interactive = std::io::stdout().is_terminal();
    let palette = Palette {
        enable_color: interactive && config.color && !cli.no_color,
    };

    let mut session = Session::new(results);
    let screen = Screen::new(&results_dir, palette);

    if !interactive {
        print_summary(&session, &screen);
        return Ok(());
    }

    tracing::debug!(results = session.results().len(), "starting interactive session");
    tui::run(&mut session, &screen)?;
    println!("{}", FAREWELL);

    Ok(())
}

/// Non-interactive output: the list frame, printed once
fn print_summary(session: &Session, screen: &Screen) {
    let layout = GridLayout::compute(terminal_width(), session.names());
    for line in screen.render(session, &layout) {
        println!("{}", line.trim_end());
    }
}
