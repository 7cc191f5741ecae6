//! Rewrite rules and the ordered stages that apply them.
//!
//! Each submodule owns one stage of the pass. A stage is an ordered rule
//! list; a rule is a compiled pattern plus a `$N` replacement template.
//!
//! ## Data Flow
//!
//! ```text
//! normalise ──▶ boundary ──▶ partial ──▶ punctuation ──▶ images
//! (curly→ASCII)  (**"X"**)    (**a "X"**)  (link ( ) % ?)   (dangling ![)
//! ```
//!
//! 1. [`quotes`]      : curly quotes to ASCII, then quotes that wrap a whole
//!    emphasis span are lifted outside it
//! 2. [`partial`]     : quotes that cover only the tail of a span; seven
//!    sub-rules per emphasis kind, most specific first
//! 3. [`punctuation`] : link brackets, trailing parentheticals, `%` and `?`
//! 4. [`images`]      : remove a truncated image token at the end of the buffer
//!
//! ## Ordering contract
//!
//! Quote-bearing rules live only in stages 1–2. No pattern in
//! [`punctuation`] or [`images`] contains a quote character, so the later
//! stages cannot re-match a span the quote stages already settled. This is
//! checked by a unit test below rather than filtered at call time.
//!
//! ## Engines
//!
//! Bold and cleanup patterns compile with `regex` (linear time). Italic
//! patterns must not fire inside a `**` run and need `(?<!\*)` / `(?!\*)`,
//! so they compile with `fancy-regex`. See [`Matcher`].
//!
//! The italic boundary rules open on `(^|\s)\*` like their bold
//! counterparts: a `*` glued to a word or a quote is a closing marker.
//! Without that, `'*a*' and '*b*'` would read `*' and '*` as a new span.

pub mod images;
pub mod partial;
pub mod punctuation;
pub mod quotes;

use crate::config::RepairConfig;
use crate::error::RuleError;
use crate::output::RepairReport;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, warn};

// ── Rule model ───────────────────────────────────────────────────────────

/// Emphasis kind a rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
}

/// What a rule moves or removes. Used for reporting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Curly quote to ASCII quote.
    QuoteNormalization,
    /// Quotes wrapping a whole emphasis span.
    Quote,
    /// Quotes wrapping only part of an emphasis span.
    PartialQuote,
    /// `**[text](url)**` to `[**text**](url)`.
    Link,
    /// Trailing `(…)` moved out of the span.
    Parenthetical,
    /// Trailing `%` moved out of the span.
    Percent,
    /// Trailing `?` moved out of the span.
    Question,
    /// Truncated image markup removed.
    IncompleteImage,
}

/// How many matches a rule rewrites per application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Every non-overlapping match, left to right.
    Global,
    /// The leftmost match only (end-anchored cleanup patterns).
    First,
}

/// Backtracking budget of one lookaround search.
///
/// Italic content classes exclude `*`, so a search stops at the next marker;
/// the budget only has to cover long lines of stray asterisks.
pub const BACKTRACK_LIMIT: usize = 20_000_000;

/// A compiled pattern on one of the two regex engines.
#[derive(Debug)]
pub enum Matcher {
    /// Linear-time `regex` pattern.
    Plain(regex::Regex),
    /// Backtracking `fancy-regex` pattern; used only where lookaround is needed.
    Lookaround(fancy_regex::Regex),
}

impl Matcher {
    /// Compile a pattern without lookaround. Panics on an invalid pattern;
    /// every caller passes a literal from a rule table.
    pub fn plain(pattern: &str) -> Self {
        Matcher::Plain(
            regex::Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid rule pattern {pattern:?}: {e}")),
        )
    }

    /// Compile a pattern that uses lookaround, with [`BACKTRACK_LIMIT`].
    pub fn lookaround(pattern: &str) -> Self {
        Matcher::Lookaround(
            fancy_regex::RegexBuilder::new(pattern)
                .backtrack_limit(BACKTRACK_LIMIT)
                .build()
                .unwrap_or_else(|e| panic!("invalid rule pattern {pattern:?}: {e}")),
        )
    }

    /// Source text of the pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Plain(re) => re.as_str(),
            Matcher::Lookaround(re) => re.as_str(),
        }
    }

    /// Replace up to `limit` matches (0 = all) with the expanded `template`.
    ///
    /// Returns the new text and the number of matches rewritten. Text with
    /// no match comes back borrowed.
    fn replace<'t>(
        &self,
        text: &'t str,
        limit: usize,
        template: &str,
    ) -> Result<(Cow<'t, str>, usize), fancy_regex::Error> {
        let mut hits = 0usize;
        let out = match self {
            Matcher::Plain(re) => re.replacen(text, limit, |caps: &regex::Captures<'_>| {
                hits += 1;
                let mut dst = String::new();
                caps.expand(template, &mut dst);
                dst
            }),
            Matcher::Lookaround(re) => {
                let expander = fancy_regex::Expander::default();
                re.try_replacen(text, limit, |caps: &fancy_regex::Captures<'_>| {
                    hits += 1;
                    expander.expansion(template, caps)
                })?
            }
        };
        Ok((out, hits))
    }
}

/// One pattern/replacement pair with its identity and classification.
#[derive(Debug)]
pub struct Rule {
    /// Stable kebab-case id used in logs and reports.
    pub id: &'static str,
    /// `None` for rules that are not tied to an emphasis kind.
    pub emphasis: Option<Emphasis>,
    pub category: Category,
    pub matcher: Matcher,
    /// Replacement template; `$1`, `$2`, … refer to capture groups.
    pub replacement: &'static str,
    pub reach: Reach,
}

impl Rule {
    /// A `**` rule on the linear engine.
    pub fn bold(
        id: &'static str,
        category: Category,
        pattern: &str,
        replacement: &'static str,
    ) -> Self {
        Self {
            id,
            emphasis: Some(Emphasis::Bold),
            category,
            matcher: Matcher::plain(pattern),
            replacement,
            reach: Reach::Global,
        }
    }

    /// A `*` rule; italic patterns open on `(?<!\*)\*` or `(^|\s)\*`.
    pub fn italic(
        id: &'static str,
        category: Category,
        pattern: &str,
        replacement: &'static str,
    ) -> Self {
        Self {
            id,
            emphasis: Some(Emphasis::Italic),
            category,
            matcher: Matcher::lookaround(pattern),
            replacement,
            reach: Reach::Global,
        }
    }

    /// An end-of-buffer cleanup rule that deletes its single match.
    pub fn cleanup(id: &'static str, category: Category, pattern: &str) -> Self {
        Self {
            id,
            emphasis: None,
            category,
            matcher: Matcher::plain(pattern),
            replacement: "",
            reach: Reach::First,
        }
    }

    /// Apply this rule once to `text`.
    pub fn rewrite<'t>(&self, text: &'t str) -> Result<(Cow<'t, str>, usize), fancy_regex::Error> {
        let limit = match self.reach {
            Reach::Global => 0,
            Reach::First => 1,
        };
        self.matcher.replace(text, limit, self.replacement)
    }

    fn enabled(&self, config: &RepairConfig) -> bool {
        self.emphasis.is_none_or(|e| config.covers(e))
    }
}

// ── Stages ───────────────────────────────────────────────────────────────

/// The fixed stage order of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NormalizeQuotes,
    BoundaryQuotes,
    PartialQuotes,
    Punctuation,
    IncompleteImages,
}

impl Stage {
    /// All stages in pass order.
    pub const ALL: [Stage; 5] = [
        Stage::NormalizeQuotes,
        Stage::BoundaryQuotes,
        Stage::PartialQuotes,
        Stage::Punctuation,
        Stage::IncompleteImages,
    ];

    /// Rule table of this stage. Quote normalisation is a character map, not
    /// a pattern table, and returns an empty slice.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Stage::NormalizeQuotes => &[],
            Stage::BoundaryQuotes => quotes::BOUNDARY_RULES.as_slice(),
            Stage::PartialQuotes => partial::RULES.as_slice(),
            Stage::Punctuation => punctuation::RULES.as_slice(),
            Stage::IncompleteImages => images::RULES.as_slice(),
        }
    }

    pub fn enabled(self, config: &RepairConfig) -> bool {
        match self {
            Stage::NormalizeQuotes => config.normalize_quotes,
            Stage::BoundaryQuotes | Stage::PartialQuotes => config.quotes,
            Stage::Punctuation => config.punctuation,
            Stage::IncompleteImages => config.strip_incomplete_images,
        }
    }

    /// Run this stage over the working buffer.
    pub(crate) fn run(
        self,
        buf: String,
        config: &RepairConfig,
        report: &mut RepairReport,
    ) -> String {
        match self {
            Stage::NormalizeQuotes => {
                let (out, count) = quotes::normalize(buf);
                if count > 0 {
                    debug!(count, "normalised curly quotes");
                    report.record(
                        quotes::NORMALIZE_ID,
                        Category::QuoteNormalization,
                        None,
                        count,
                    );
                }
                out
            }
            Stage::IncompleteImages => {
                // A removed token can leave another one dangling at the end.
                // Every removal shortens the buffer.
                let mut buf = buf;
                loop {
                    let before = buf.len();
                    buf = apply_rules(self.rules(), buf, config, report);
                    if buf.len() == before {
                        break buf;
                    }
                }
            }
            _ => apply_rules(self.rules(), buf, config, report),
        }
    }
}

/// Apply `rules` in order, each over the previous rule's full output.
fn apply_rules(
    rules: &[Rule],
    mut buf: String,
    config: &RepairConfig,
    report: &mut RepairReport,
) -> String {
    for rule in rules.iter().filter(|r| r.enabled(config)) {
        let next = match rule.rewrite(&buf) {
            Ok((Cow::Owned(s), hits)) if hits > 0 => {
                debug!(rule = rule.id, hits, "rule applied");
                report.record(rule.id, rule.category, rule.emphasis, hits);
                s
            }
            Ok(_) => continue,
            Err(e) => {
                warn!(rule = rule.id, error = %e, "rule skipped");
                report.skipped.push(RuleError {
                    rule: rule.id.to_string(),
                    detail: e.to_string(),
                });
                continue;
            }
        };
        buf = next;
    }
    buf
}

/// Run a single stage with the default configuration. Stage-level tests use
/// this to check one rule group in isolation.
#[cfg(test)]
pub(crate) fn run_stage(stage: Stage, input: &str) -> String {
    let mut report = RepairReport::default();
    stage.run(input.to_string(), &RepairConfig::default(), &mut report)
}
