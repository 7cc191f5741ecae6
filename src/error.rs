//! Error types for the unbreak-md library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`UnbreakError`] is **fatal**: the request cannot proceed at all
//!   (input file missing or not UTF-8, output not writable).
//!   Only the file surface returns it; the text-level
//!   operation [`crate::unbreak`] is total and never fails.
//!
//! * [`RuleError`] is **non-fatal**: a single rule could not run on this
//!   buffer (a lookaround matcher hit its backtracking limit). The rule is
//!   skipped, every other rule still applies, and the error is
//!   stored in [`crate::output::RepairReport::skipped`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the unbreak-md library.
#[derive(Debug, Error)]
pub enum UnbreakError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not UTF-8 text.
    #[error("File is not valid UTF-8: '{path}'")]
    InvalidUtf8 { path: PathBuf },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A non-fatal error for a single rule.
///
/// Recorded in the repair report when a rule was skipped. The buffer is left
/// exactly as it was before that rule.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
#[error("Rule '{rule}' skipped: {detail}")]
pub struct RuleError {
    /// Stable rule id, e.g. `italic-partial-double`.
    pub rule: String,
    /// Matcher error message.
    pub detail: String,
}
