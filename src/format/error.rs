//! Error types for formatting operations.
use crate::ooxml::error::OoxmlError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors that abort a formatting request.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The source document could not be read, parsed or saved
    #[error("Document error: {0}")]
    Document(#[from] OoxmlError),

    /// Template mode was selected without a template file
    #[error("Template mode requires a template document")]
    MissingTemplate,

    /// Template mode is declared but not available
    #[error("Formatting from template {} is not implemented", .0.display())]
    TemplateNotImplemented(PathBuf),

    #[error("Invalid formatting options: {0}")]
    InvalidOptions(String),

    /// The source path has no file name to derive the output name from
    #[error("Cannot derive an output file name from {}", .0.display())]
    InvalidSourcePath(PathBuf),
}

/// Errors from the external table-of-contents refresh step.
///
/// These never abort a formatting request; they are downgraded to warnings.
#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Errors while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error(transparent)]
    Invalid(#[from] FormatError),
}

/// An unrecognised line spacing name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown line spacing '{0}' (expected single, 1.15, 1.5 or double)")]
pub struct ParseLineSpacingError(pub String);
