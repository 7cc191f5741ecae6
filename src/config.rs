//! Configuration types for Markdown repair.
//!
//! All repair behaviour is controlled through [`RepairConfig`], built via its
//! [`RepairConfigBuilder`]. The defaults run every stage on both emphasis
//! kinds, which is what [`crate::unbreak`] does. Switching a stage off removes
//! its whole rule group from the pass; the order of the remaining groups never
//! changes.

use crate::rules::Emphasis;
use serde::{Deserialize, Serialize};

/// Configuration for a repair run.
///
/// Built via [`RepairConfig::builder()`] or using [`RepairConfig::default()`].
///
/// # Example
/// ```rust
/// use unbreak_md::{EmphasisScope, RepairConfig};
///
/// let config = RepairConfig::builder()
///     .emphasis(EmphasisScope::BoldOnly)
///     .strip_incomplete_images(false)
///     .build();
/// assert!(config.quotes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairConfig {
    /// Map curly quotes (U+2018/2019/201C/201D) to ASCII. Default: true.
    ///
    /// Every quote-aware rule is written against ASCII quotes only; turning
    /// this off means curly-quoted spans pass through untouched.
    pub normalize_quotes: bool,

    /// Run boundary and partial quote extraction. Default: true.
    pub quotes: bool,

    /// Run link, parenthetical, percent and question-mark extraction. Default: true.
    pub punctuation: bool,

    /// Drop dangling image markup at the end of the buffer. Default: true.
    ///
    /// Disable when repairing a finished document: a final `!` is then real
    /// punctuation, not the start of a truncated `![`.
    pub strip_incomplete_images: bool,

    /// Which emphasis kinds the emphasis stages touch. Default: [`EmphasisScope::Both`].
    pub emphasis: EmphasisScope,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            normalize_quotes: true,
            quotes: true,
            punctuation: true,
            strip_incomplete_images: true,
            emphasis: EmphasisScope::default(),
        }
    }
}

impl RepairConfig {
    /// Create a new builder for `RepairConfig`.
    pub fn builder() -> RepairConfigBuilder {
        RepairConfigBuilder {
            config: Self::default(),
        }
    }

    /// Whether rules for `emphasis` are enabled.
    pub fn covers(&self, emphasis: Emphasis) -> bool {
        self.emphasis.covers(emphasis)
    }
}

/// Builder for [`RepairConfig`].
#[derive(Debug)]
pub struct RepairConfigBuilder {
    config: RepairConfig,
}

impl RepairConfigBuilder {
    pub fn normalize_quotes(mut self, v: bool) -> Self {
        self.config.normalize_quotes = v;
        self
    }

    pub fn quotes(mut self, v: bool) -> Self {
        self.config.quotes = v;
        self
    }

    pub fn punctuation(mut self, v: bool) -> Self {
        self.config.punctuation = v;
        self
    }

    pub fn strip_incomplete_images(mut self, v: bool) -> Self {
        self.config.strip_incomplete_images = v;
        self
    }

    pub fn emphasis(mut self, scope: EmphasisScope) -> Self {
        self.config.emphasis = scope;
        self
    }

    /// Build the configuration. Every combination of switches is valid.
    pub fn build(self) -> RepairConfig {
        self.config
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Which emphasis kinds the quote and punctuation stages rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisScope {
    /// Bold (`**`) and italic (`*`) spans. (default)
    #[default]
    Both,
    /// Bold spans only.
    BoldOnly,
    /// Italic spans only.
    ItalicOnly,
}

impl EmphasisScope {
    pub fn covers(self, emphasis: Emphasis) -> bool {
        matches!(
            (self, emphasis),
            (EmphasisScope::Both, _)
                | (EmphasisScope::BoldOnly, Emphasis::Bold)
                | (EmphasisScope::ItalicOnly, Emphasis::Italic)
        )
    }
}
