//! Refreshing the table-of-contents field of a saved document.
//!
//! Word fills a TOC field in only when the field is updated. Headless setups
//! can hand the saved file to an office suite (for example LibreOffice running
//! a macro) through [`CommandRefresher`].

use crate::format::error::RefreshError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

/// Placeholder replaced by the document path in command arguments.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Something that can update the TOC field of a document on disk.
pub trait TocRefresher {
    /// Update the first table of contents in the file at `path`, in place.
    fn refresh_toc(&self, path: &Path) -> Result<(), RefreshError>;

    /// Whether a refresh will be attempted at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Leaves the TOC field for the reader's word processor to update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRefresher;

impl TocRefresher for NoopRefresher {
    fn refresh_toc(&self, _path: &Path) -> Result<(), RefreshError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Runs an external program on the saved document.
///
/// Every `{path}` in the arguments is replaced by the document path; if no
/// argument contains the placeholder, the path is appended as the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandRefresher {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandRefresher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The argument list for `path`.
    pub fn resolved_args(&self, path: &Path) -> Vec<String> {
        let path = path.to_string_lossy();
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(PATH_PLACEHOLDER, &path))
            .collect();
        if !self.args.iter().any(|arg| arg.contains(PATH_PLACEHOLDER)) {
            args.push(path.into_owned());
        }
        args
    }
}

impl TocRefresher for CommandRefresher {
    fn refresh_toc(&self, path: &Path) -> Result<(), RefreshError> {
        let args = self.resolved_args(path);
        log::debug!("Refreshing TOC: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| RefreshError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RefreshError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_substitution() {
        let refresher = CommandRefresher::new("soffice")
            .arg("--headless")
            .arg("macro:///Standard.Toc.Update({path})");
        assert_eq!(
            refresher.resolved_args(Path::new("/tmp/r.docx")),
            ["--headless", "macro:///Standard.Toc.Update(/tmp/r.docx)"]
        );
    }

    #[test]
    fn test_path_appended_without_placeholder() {
        let refresher = CommandRefresher::new("update-toc").arg("--quiet");
        assert_eq!(
            refresher.resolved_args(Path::new("out.docx")),
            ["--quiet", "out.docx"]
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let refresher = CommandRefresher::new("definitely-not-an-installed-program-4821");
        let err = refresher.refresh_toc(Path::new("x.docx")).unwrap_err();
        assert!(matches!(err, RefreshError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_checked() {
        assert!(CommandRefresher::new("true").refresh_toc(Path::new("x.docx")).is_ok());

        let err = CommandRefresher::new("false")
            .refresh_toc(Path::new("x.docx"))
            .unwrap_err();
        assert!(matches!(err, RefreshError::Failed { .. }));
    }

    #[test]
    fn test_noop_is_unavailable() {
        assert!(!NoopRefresher.is_available());
        assert!(NoopRefresher.refresh_toc(Path::new("x.docx")).is_ok());
    }
}
