use cardz::model::{Outcome, Policy};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Spaced-repetition scheduler for PDF flashcards.
///
/// Review state lives in the filenames: `<awake>-<sleep>-<title>.pdf`, both
/// stamps twelve digits of Unix seconds. Run inside the card directory, one
/// mode per invocation.
#[derive(Parser, Debug)]
#[command(name = "cardz")]
// -h records a hit, so clap's automatic help flags must go; --help stays as
// an explicit long flag below.
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(group(ArgGroup::new("mode")))]
pub struct Cli {
    /// Select the next due card (expired first, then new)
    #[arg(short = 'q', group = "mode")]
    pub query: bool,

    /// Select the next new card
    #[arg(short = 'Q', group = "mode")]
    pub query_new: bool,

    /// Record a hit on the active card
    #[arg(short = 'h', group = "mode")]
    pub hit: bool,

    /// Record a miss on the active card
    #[arg(short = 'm', group = "mode")]
    pub miss: bool,

    /// Print the schedule for all timestamped cards
    #[arg(short = 'p', group = "mode")]
    pub print: bool,

    /// Stamp initial timestamps onto plain PDFs
    #[arg(short = 'a', group = "mode")]
    pub add: bool,

    /// Strip timestamps, restoring bare filenames
    #[arg(short = 'r', group = "mode")]
    pub restore: bool,

    /// Import content-new PDFs from DIR as new cards
    #[arg(short = 'i', value_name = "DIR", group = "mode")]
    pub import: Option<PathBuf>,

    /// Like -i, but keep timestamp prefixes found on the source files
    #[arg(short = 'I', value_name = "DIR", group = "mode")]
    pub import_keep: Option<PathBuf>,

    /// Print help
    #[arg(long, action = clap::ArgAction::HelpLong)]
    pub help: Option<bool>,
}

/// The single mode one invocation runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Query(Policy),
    Review(Outcome),
    Print,
    Add,
    Restore,
    Import { dir: PathBuf, keep_stamps: bool },
}

impl Cli {
    pub fn mode(&self) -> Option<Mode> {
        if self.query {
            Some(Mode::Query(Policy::ExpiredFirst))
        } else if self.query_new {
            Some(Mode::Query(Policy::NewFirst))
        } else if self.hit {
            Some(Mode::Review(Outcome::Hit))
        } else if self.miss {
            Some(Mode::Review(Outcome::Miss))
        } else if self.print {
            Some(Mode::Print)
        } else if self.add {
            Some(Mode::Add)
        } else if self.restore {
            Some(Mode::Restore)
        } else if let Some(dir) = &self.import {
            Some(Mode::Import {
                dir: dir.clone(),
                keep_stamps: false,
            })
        } else if let Some(dir) = &self.import_keep {
            Some(Mode::Import {
                dir: dir.clone(),
                keep_stamps: true,
            })
        } else {
            None
        }
    }
}
