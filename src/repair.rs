//! Repair entry points.
//!
//! [`unbreak`] is the one operation a streaming host needs: call it on the
//! text received so far, render the result, and call it again on the next,
//! longer snapshot. Calls share no state, so any number of streams can be
//! repaired concurrently.
//!
//! ## Pass
//!
//! Each call runs the stages once, in fixed order, over a single working
//! buffer: quote normalisation, boundary quotes, partial quotes,
//! punctuation, incomplete images. The rule set is written so its own output
//! gives no rule a new match: a span opener must follow whitespace or a
//! non-`*` character, and a repaired span always ends in a marker glued to
//! text. Repairing repaired text is therefore a no-op.

use crate::config::RepairConfig;
use crate::error::UnbreakError;
use crate::output::{RepairOutput, RepairReport};
use crate::rules::Stage;
use std::path::Path;
use tracing::{debug, info};

/// Repair a Markdown fragment with the default configuration.
///
/// Moves punctuation outside bold/italic spans and drops a dangling image
/// token at the end of the text. Never fails: text that no rule matches is
/// returned unchanged, and `""` yields `""`.
///
/// # Example
/// ```rust
/// use unbreak_md::unbreak;
///
/// assert_eq!(unbreak("**\"Some text\"**"), "\"**Some text**\"");
/// assert_eq!(unbreak("**21%** of users"), "**21**% of users");
/// assert_eq!(unbreak("Chart: ![sales](https://x.io/s"), "Chart: ");
/// ```
pub fn unbreak(markdown: &str) -> String {
    unbreak_with(markdown, &RepairConfig::default())
}

/// [`unbreak`] for input that may be absent. `None` comes back as `None`.
pub fn unbreak_opt(markdown: Option<&str>) -> Option<String> {
    markdown.map(unbreak)
}

/// Repair a Markdown fragment with an explicit configuration.
pub fn unbreak_with(markdown: &str, config: &RepairConfig) -> String {
    unbreak_with_report(markdown, config).markdown
}

/// Repair a Markdown fragment and report which rules fired.
pub fn unbreak_with_report(markdown: &str, config: &RepairConfig) -> RepairOutput {
    let mut report = RepairReport::default();
    if markdown.is_empty() {
        return RepairOutput {
            markdown: String::new(),
            report,
        };
    }

    let markdown = Stage::ALL
        .into_iter()
        .filter(|stage| stage.enabled(config))
        .fold(markdown.to_string(), |buf, stage| {
            stage.run(buf, config, &mut report)
        });

    debug!(
        rewrites = report.total_rewrites(),
        skipped = report.skipped.len(),
        "repair finished"
    );

    RepairOutput { markdown, report }
}

/// Repair a Markdown file.
///
/// Reads `input` as UTF-8, repairs it and, when `output` is given, writes
/// the result there (atomically, via a temporary sibling file). The repaired
/// text and report are returned either way.
///
/// # Errors
/// - [`UnbreakError::FileNotFound`] / [`UnbreakError::PermissionDenied`] /
///   [`UnbreakError::ReadFailed`] when `input` cannot be read
/// - [`UnbreakError::InvalidUtf8`] when `input` is not UTF-8
/// - [`UnbreakError::OutputWriteFailed`] when `output` cannot be written
pub fn repair_file(
    input: impl AsRef<Path>,
    output: Option<&Path>,
    config: &RepairConfig,
) -> Result<RepairOutput, UnbreakError> {
    let input = input.as_ref();
    info!("Repairing {}", input.display());

    let bytes = std::fs::read(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => UnbreakError::FileNotFound {
            path: input.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => UnbreakError::PermissionDenied {
            path: input.to_path_buf(),
        },
        _ => UnbreakError::ReadFailed {
            path: input.to_path_buf(),
            source: e,
        },
    })?;
    let text = String::from_utf8(bytes).map_err(|_| UnbreakError::InvalidUtf8 {
        path: input.to_path_buf(),
    })?;

    let repaired = unbreak_with_report(&text, config);

    if let Some(path) = output {
        write_markdown(path, &repaired.markdown)?;
        info!(
            "Wrote {} ({} rewrites)",
            path.display(),
            repaired.report.total_rewrites()
        );
    }

    Ok(repaired)
}

/// Write repaired Markdown to `path`.
///
/// Missing parent directories are created. The text goes to a `.md.tmp`
/// sibling first and is renamed over `path`, so a reader never sees a
/// half-written file.
pub fn write_markdown(path: &Path, contents: &str) -> Result<(), UnbreakError> {
    let write_err = |e| UnbreakError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = path.with_extension("md.tmp");
    std::fs::write(&tmp_path, contents).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)
}
