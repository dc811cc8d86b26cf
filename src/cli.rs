//! Command-line options of the `eventbook` binary

use clap::Parser;

/// Manage calendar events from an interactive shell
#[derive(Parser, Debug)]
#[command(name = "eventbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (-v, -vv, -vvv). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Organization assigned to events created without one
    #[arg(short, long, env = "EVENTBOOK_ORGANIZATION")]
    pub organization: Option<String>,

    /// How events and summaries are printed
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format of event listings and summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Returns the default log filter based on verbosity
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
