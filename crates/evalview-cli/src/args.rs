use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser)]
#[command(name = "evalview")]
#[command(about = "Browse evaluation run results in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing one <id>.json result file per run [default: runs]
    #[arg(value_name = "RESULTS_DIR")]
    pub results_dir: Option<String>,

    /// Log level for diagnostics written to stderr (overridden by RUST_LOG)
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
