//! Talking to the external analyzer

use std::{
    fmt,
    io::{self, Write},
    process::{Command, ExitStatus, Stdio},
};

use log::debug;
use thiserror::Error;

/// The command fonts are piped through to describe them.
static FONT_ANATOMY: &str = "font-anatomy";

/// Description formats the analyzer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    /// The value passed to the analyzer's `-o` flag.
    fn flag_value(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Md => "md",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.flag_value())
    }
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to launch '{command}': {error}")]
    Launch {
        command: String,
        #[source]
        error: io::Error,
    },
    #[error("Failed to stream font bytes to '{command}': {error}")]
    WriteStdin {
        command: String,
        #[source]
        error: io::Error,
    },
    #[error("Failed to collect output of '{command}': {error}")]
    ReadOutput {
        command: String,
        #[source]
        error: io::Error,
    },
    #[error("'{command} -o {format}' exited with {status}")]
    AnalyzerFailed {
        command: String,
        format: OutputFormat,
        status: ExitStatus,
    },
}

/// Produces descriptions of a font from its raw bytes.
///
/// Implementations return the description bytes verbatim; nothing in this
/// crate interprets the font or the description on either side of the call.
pub trait Analyzer {
    fn describe(&self, font: &[u8], format: OutputFormat) -> Result<Vec<u8>, AnalyzerError>;
}

/// The real thing: `font-anatomy -o <format>` with the font bytes on stdin.
///
/// stdout is captured and becomes the artifact content, byte for byte.
/// stderr is inherited so analyzer diagnostics land on our own stderr.
/// A nonzero exit is an error even if the analyzer produced output.
#[derive(Debug, Clone)]
pub struct FontAnatomy {
    command: String,
}

impl Default for FontAnatomy {
    fn default() -> Self {
        FontAnatomy::with_command(FONT_ANATOMY)
    }
}

impl FontAnatomy {
    /// Drive something other than `font-anatomy`, e.g. a stand-in for tests.
    pub fn with_command(command: impl Into<String>) -> FontAnatomy {
        FontAnatomy {
            command: command.into(),
        }
    }
}

impl Analyzer for FontAnatomy {
    fn describe(&self, font: &[u8], format: OutputFormat) -> Result<Vec<u8>, AnalyzerError> {
        debug!("{} -o {format}, {} bytes in", self.command, font.len());
        let mut child = Command::new(&self.command)
            .arg("-o")
            .arg(format.flag_value())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|error| AnalyzerError::Launch {
                command: self.command.clone(),
                error,
            })?;

        // The analyzer reads the whole font before it writes anything, so
        // feeding stdin to completion up front cannot wedge the pipe.
        let mut stdin = child.stdin.take().expect("stdin was piped");
        stdin
            .write_all(font)
            .map_err(|error| AnalyzerError::WriteStdin {
                command: self.command.clone(),
                error,
            })?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .map_err(|error| AnalyzerError::ReadOutput {
                command: self.command.clone(),
                error,
            })?;
        if !output.status.success() {
            return Err(AnalyzerError::AnalyzerFailed {
                command: self.command.clone(),
                format,
                status: output.status,
            });
        }
        Ok(output.stdout)
    }
}
