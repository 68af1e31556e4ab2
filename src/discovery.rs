//! Finding font files under the input paths

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::Error;

/// Extensions of the font containers we build specimens for.
const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "woff", "woff2"];

/// Expand the input paths into a deduplicated list of font files.
///
/// Directories are searched depth-first in readdir order. Files whose
/// extension is not a known font container are ignored without comment, as is
/// anything that isn't a regular file. Naming the same font twice, directly
/// or via different directory routes, yields it once at its first-seen
/// position; identity is the canonicalized path.
///
/// Errors here are always fatal to the run: an input that can't be read at
/// all is a caller mistake, not a bad font.
pub fn discover_fonts(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
    let mut fonts = IndexSet::new();
    for input in inputs {
        // Symlinks are followed; walkdir turns a symlink cycle into an error
        // instead of recursing forever.
        for entry in WalkDir::new(input).follow_links(true) {
            let entry = entry.map_err(|error| Error::Walk {
                path: input.clone(),
                error,
            })?;
            if !entry.file_type().is_file() || !is_font_file(entry.path()) {
                continue;
            }
            let resolved = entry.path().canonicalize().map_err(|error| Error::Resolve {
                path: entry.path().to_path_buf(),
                error,
            })?;
            if !fonts.insert(resolved) {
                trace!("'{}' already seen", entry.path().display());
            }
        }
    }
    debug!("discovered {} fonts", fonts.len());
    Ok(fonts.into_iter().collect())
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"not really a font").unwrap();
    }

    #[rstest]
    #[case("ttf", true)]
    #[case("TTF", true)]
    #[case("otf", true)]
    #[case("woff", true)]
    #[case("woff2", true)]
    #[case("ttc", false)]
    #[case("txt", false)]
    #[case("", false)]
    fn recognizes_font_extensions(#[case] ext: &str, #[case] expected: bool) {
        let path = PathBuf::from(format!("Some-Font.{ext}"));
        assert_eq!(expected, is_font_file(&path), "{path:?}");
    }

    #[test]
    fn no_extension_is_not_a_font() {
        assert!(!is_font_file(Path::new("Makefile")));
    }

    #[test]
    fn walks_nested_directories() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("deep/deeper")).unwrap();
        touch(&root.join("A.ttf"));
        touch(&root.join("README.md"));
        touch(&root.join("deep/B.woff2"));
        touch(&root.join("deep/deeper/C.otf"));
        touch(&root.join("deep/deeper/notes.txt"));

        let found = discover_fonts(&[root.to_path_buf()]).unwrap();
        let mut names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        names.sort();
        assert_eq!(vec!["A.ttf", "B.woff2", "C.otf"], names);
    }

    #[test]
    fn same_font_via_file_and_directory_appears_once() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        let font = root.join("A.ttf");
        touch(&font);

        let found = discover_fonts(&[font.clone(), root.to_path_buf()]).unwrap();
        assert_eq!(1, found.len());
        // direct mention wins the position
        assert_eq!(font.canonicalize().unwrap(), found[0]);
    }

    #[test]
    fn duplicate_directory_arguments_collapse() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        touch(&root.join("A.ttf"));
        touch(&root.join("B.otf"));

        let once = discover_fonts(&[root.to_path_buf()]).unwrap();
        let twice = discover_fonts(&[root.to_path_buf(), root.to_path_buf()]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn directly_named_non_font_is_ignored() {
        let temp_dir = tempdir().unwrap();
        let readme = temp_dir.path().join("README.md");
        touch(&readme);

        let found = discover_fonts(&[readme]).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn missing_input_is_fatal() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("no-such-dir");
        assert!(discover_fonts(&[missing]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_font_deduplicates_with_its_target() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        let font = root.join("A.ttf");
        touch(&font);
        std::os::unix::fs::symlink(&font, root.join("alias.ttf")).unwrap();

        let found = discover_fonts(&[root.to_path_buf()]).unwrap();
        assert_eq!(1, found.len());
    }
}
