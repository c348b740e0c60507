//! CLI command implementations

use crate::session::Session;
use anyhow::Result;
use clap::Subcommand;

pub mod check;
pub mod features;
pub mod list;
pub mod space;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check tags against the grammar and a language's restrictions
    Check(check::CheckArgs),

    /// Show the feature analysis of tags
    Features(features::FeaturesArgs),

    /// Enumerate the valid tags of a language
    Space(space::SpaceArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a grammar file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List known languages and their forbidden categories
    Languages,

    /// List feature categories and their patterns
    Categories,
}

impl Commands {
    /// Whether the command works against a loaded grammar
    pub fn needs_session(&self) -> bool {
        matches!(
            self,
            Commands::Check(_) | Commands::Features(_) | Commands::Space(_)
        )
    }

    /// Run the command
    ///
    /// `session` is only consulted by commands for which
    /// [`needs_session`](Self::needs_session) holds.
    pub fn execute(&self, session: Option<&Session>) -> Result<()> {
        let require = || session.ok_or_else(|| anyhow::anyhow!("No grammar loaded"));

        match self {
            Commands::Check(args) => args.execute(require()?),
            Commands::Features(args) => args.execute(require()?),
            Commands::Space(args) => args.execute(require()?),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Languages => list::print_languages(),
                ListCommands::Categories => list::print_categories(),
            },
            Commands::Validate(args) => args.execute(),
        }
    }
}
