//! Materializing one specimen at a time

use std::{fs, io, path::Path};

use log::debug;

use crate::{
    analyzer::{Analyzer, OutputFormat},
    error::Error,
    paths::{Artifact, Paths},
};

/// True if any part of the specimen for `font` is already on disk.
///
/// The skip-on-existing policy treats a half-built specimen the same as a
/// complete one: anything present means hands off.
pub fn already_materialized(paths: &Paths, font: &Path) -> bool {
    paths.font_dir(font).exists()
        || [Artifact::Font, Artifact::Json, Artifact::Markdown]
            .iter()
            .any(|artifact| paths.target_file(font, *artifact).exists())
}

/// Build or rebuild the specimen for `font`.
///
/// Prior artifacts are deleted before anything is regenerated, so a stale
/// description never survives next to a fresh font copy. The analyzer runs
/// once per description format against the freshly copied bytes.
pub fn build_specimen(paths: &Paths, font: &Path, analyzer: &dyn Analyzer) -> Result<(), Error> {
    let dir = paths.font_dir(font);
    let font_target = paths.target_file(font, Artifact::Font);
    let json_target = paths.target_file(font, Artifact::Json);
    let md_target = paths.target_file(font, Artifact::Markdown);

    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|error| Error::CreateDir {
            path: dir.clone(),
            error,
        })?;
    }
    for stale in [&font_target, &json_target, &md_target] {
        remove_if_present(stale)?;
    }

    fs::copy(font, &font_target).map_err(|error| Error::CopyFile {
        from: font.to_path_buf(),
        to: font_target.clone(),
        error,
    })?;
    let bytes = fs::read(&font_target).map_err(|error| Error::ReadFile {
        path: font_target.clone(),
        error,
    })?;

    for (format, target) in [
        (OutputFormat::Json, &json_target),
        (OutputFormat::Md, &md_target),
    ] {
        let description = analyzer.describe(&bytes, format)?;
        fs::write(target, description).map_err(|error| Error::WriteFile {
            path: target.to_path_buf(),
            error,
        })?;
    }

    debug!("built specimen for '{}'", font.display());
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<(), Error> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(Error::RemoveFile {
            path: path.to_path_buf(),
            error,
        }),
    }
}
