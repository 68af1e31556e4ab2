//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// What fonts can we describe for you today?
///
/// Also the configuration of a run: built once by clap and read-only from
/// then on.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(about = "copy fonts into specimen directories and describe them with font-anatomy")]
pub struct Args {
    /// Font files, or directories to search for fonts. Flags and paths may
    /// appear in any order.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Directory specimens are written under.
    #[arg(long, default_value = "specimen")]
    pub specimen_dir: PathBuf,

    /// Mark fonts that fail to process and continue, instead of aborting the run.
    #[arg(long)]
    pub skip_failures: bool,

    /// Leave already-materialized specimens untouched.
    #[arg(long)]
    pub skip_existing: bool,

    /// Optional path to write out results (as json)
    #[arg(short = 'o', long = "out")]
    pub out_path: Option<PathBuf>,
}

impl Args {
    /// Manual construction for callers that aren't a command line, e.g. tests.
    pub fn new(specimen_dir: &std::path::Path, paths: Vec<PathBuf>) -> Args {
        Args {
            paths,
            specimen_dir: specimen_dir.to_path_buf(),
            skip_failures: false,
            skip_existing: false,
            out_path: None,
        }
    }
}
