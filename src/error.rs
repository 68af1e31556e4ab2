use std::{io, path::PathBuf};

use thiserror::Error;

use crate::analyzer::AnalyzerError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to walk '{path}': {error}")]
    Walk {
        path: PathBuf,
        #[source]
        error: walkdir::Error,
    },
    #[error("Failed to resolve '{path}': {error}")]
    Resolve {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("Failed to remove '{path}': {error}")]
    RemoveFile {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("Failed to read file '{path}': {error}")]
    ReadFile {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("Failed to write file '{path}': {error}")]
    WriteFile {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("Failed to write json to '{path}': '{error}'")]
    WriteJson {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },
    #[error("failed to write to stdout or stderr: '{0}'")]
    StdioWriteFail(#[source] io::Error),
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}
