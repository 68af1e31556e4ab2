//! Builds font specimen fixtures by driving the font-anatomy analyzer.
//!
//! Every font file reachable from the input paths gets a specimen directory
//! under the specimen root, holding the font itself plus a json and a
//! markdown description produced by `font-anatomy`. Fonts are processed one
//! at a time, in discovery order; this is a fixture generator, not a build
//! system.

pub mod analyzer;
mod args;
mod discovery;
mod error;
mod paths;
mod report;
mod specimen;

pub use args::Args;
pub use error::Error;
pub use report::Results;

use log::warn;

use analyzer::{Analyzer, FontAnatomy};
use paths::Paths;

/// Build a specimen for every font reachable from the configured inputs.
pub fn run(args: &Args) -> Result<Results, Error> {
    run_with(args, &FontAnatomy::default())
}

/// Like [`run`], with the analyzer chosen by the caller.
pub fn run_with(args: &Args, analyzer: &dyn Analyzer) -> Result<Results, Error> {
    let fonts = discovery::discover_fonts(&args.paths)?;
    let paths = Paths::new(&args.specimen_dir);
    let mut results = Results::default();
    for font in fonts {
        if args.skip_existing && specimen::already_materialized(&paths, &font) {
            results.mark_skipped(font)?;
            continue;
        }
        match specimen::build_specimen(&paths, &font, analyzer) {
            Ok(()) => results.mark_done(font)?,
            Err(error) if args.skip_failures => {
                warn!("skipping '{}': {error}", font.display());
                results.mark_failed(font, error.to_string())?;
            }
            Err(error) => return Err(error),
        }
    }
    report::finish_stream()?;

    if let Some(out_path) = &args.out_path {
        results.save(out_path)?;
    }
    Ok(results)
}
