//! Progress markers and results of a whole run

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

const DONE_GLYPH: &str = "🟢";
const SKIPPED_GLYPH: &str = "🟡";
const FAILED_GLYPH: &str = "🔴";

/// How every font fared, in processing order.
///
/// We don't return early on per-font failure when skipping is on, so the
/// whole story of a run lives here and can be written out as json.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub done: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: BTreeMap<PathBuf, String>,
}

impl Results {
    /// Record a fully built specimen and emit its progress glyph.
    pub(crate) fn mark_done(&mut self, font: PathBuf) -> Result<(), Error> {
        self.done.push(font);
        write_glyph(DONE_GLYPH)
    }

    /// Record a font left untouched and emit its progress glyph.
    pub(crate) fn mark_skipped(&mut self, font: PathBuf) -> Result<(), Error> {
        self.skipped.push(font);
        write_glyph(SKIPPED_GLYPH)
    }

    /// Record a font that failed to process and emit its progress glyph.
    pub(crate) fn mark_failed(&mut self, font: PathBuf, why: String) -> Result<(), Error> {
        self.failed.insert(font, why);
        write_glyph(FAILED_GLYPH)
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self).map_err(|error| Error::WriteJson {
            path: path.to_path_buf(),
            error,
        })?;
        fs::write(path, json).map_err(|error| Error::WriteFile {
            path: path.to_path_buf(),
            error,
        })
    }
}

/// One glyph per font, no separators; flushed so progress is visible even
/// mid-run.
fn write_glyph(glyph: &str) -> Result<(), Error> {
    let mut stdout = io::stdout();
    stdout
        .write_all(glyph.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(Error::StdioWriteFail)
}

/// Terminate the glyph stream so the shell prompt gets its own line.
pub(crate) fn finish_stream() -> Result<(), Error> {
    write_glyph("\n")
}
