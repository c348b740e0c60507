//! Command-line entry point for morphtag

use anyhow::Result;
use clap::Parser;
use morphtag_cli::commands::Commands;
use morphtag_cli::Session;
use std::path::PathBuf;

/// Validate, analyse and enumerate positional morphological tags
#[derive(Debug, Parser)]
#[command(name = "morphtag", version, about, long_about = None)]
struct Cli {
    /// Grammar file to use instead of the built-in one
    #[arg(short, long, global = true, value_name = "FILE", env = "MORPHTAG_GRAMMAR")]
    grammar: Option<PathBuf>,

    /// Configuration file with defaults
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("Arguments: {:?}", cli);

    let session = if cli.command.needs_session() {
        Some(Session::new(
            cli.grammar.as_deref(),
            cli.config.as_deref(),
            cli.quiet,
        )?)
    } else {
        None
    };

    cli.command.execute(session.as_ref())
}
