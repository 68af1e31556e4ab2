//! Where specimen artifacts go on the filesystem

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// The artifacts that make up one specimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// The copied font file
    Font,
    /// The json description
    Json,
    /// The markdown description
    Markdown,
}

/// Computes target paths under the specimen root.
///
/// Everything here is a pure function of the font path and the root; nobody
/// touches the filesystem.
#[derive(Debug, Clone)]
pub struct Paths {
    specimen_dir: PathBuf,
}

impl Paths {
    pub fn new(specimen_dir: &Path) -> Paths {
        Paths {
            specimen_dir: specimen_dir.to_path_buf(),
        }
    }

    /// The directory holding every artifact for `font`, keyed by its stem.
    pub fn font_dir(&self, font: &Path) -> PathBuf {
        self.specimen_dir.join(stem(font))
    }

    pub fn target_file(&self, font: &Path, artifact: Artifact) -> PathBuf {
        let dir = self.font_dir(font);
        match artifact {
            Artifact::Font => dir.join(file_name(font)),
            Artifact::Json => dir.join(format!("{}.json", stem(font))),
            Artifact::Markdown => dir.join(format!("{}.md", stem(font))),
        }
    }
}

// Discovery only hands us paths with a file name and extension; anything else
// is a caller bug.
fn stem(font: &Path) -> String {
    match font.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => panic!("{font:?} has no file name"),
    }
}

fn file_name(font: &Path) -> &OsStr {
    match font.file_name() {
        Some(name) => name,
        None => panic!("{font:?} has no file name"),
    }
}
