//! Output types: the repaired Markdown plus a report of what changed.

use crate::error::RuleError;
use crate::rules::{Category, Emphasis};
use serde::{Deserialize, Serialize};

/// Result of [`crate::unbreak_with_report`] and [`crate::repair_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairOutput {
    /// The repaired Markdown.
    pub markdown: String,
    /// What the rules did to produce it.
    pub report: RepairReport,
}

/// Per-run statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairReport {
    /// Rules that fired, in first-fired order.
    pub hits: Vec<RuleHit>,

    /// Rules that could not run. Empty in all but pathological cases.
    pub skipped: Vec<RuleError>,
}

/// How often one rule rewrote the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: String,
    pub category: Category,
    pub emphasis: Option<Emphasis>,
    /// Number of matches rewritten.
    pub count: usize,
}

impl RepairReport {
    pub(crate) fn record(
        &mut self,
        rule: &str,
        category: Category,
        emphasis: Option<Emphasis>,
        count: usize,
    ) {
        match self.hits.iter_mut().find(|h| h.rule == rule) {
            Some(hit) => hit.count += count,
            None => self.hits.push(RuleHit {
                rule: rule.to_string(),
                category,
                emphasis,
                count,
            }),
        }
    }

    /// Total matches rewritten by all rules.
    pub fn total_rewrites(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }

    /// Matches rewritten by the rule with this id.
    pub fn count(&self, rule: &str) -> usize {
        self.hits
            .iter()
            .find(|h| h.rule == rule)
            .map_or(0, |h| h.count)
    }

    /// Matches rewritten by rules of this category.
    pub fn count_category(&self, category: Category) -> usize {
        self.hits
            .iter()
            .filter(|h| h.category == category)
            .map(|h| h.count)
            .sum()
    }

    /// `true` when no rule changed the input.
    pub fn is_unchanged(&self) -> bool {
        self.hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sums_repeated_hits() {
        let mut r = RepairReport::default();
        r.record("bold-percent", Category::Percent, Some(Emphasis::Bold), 2);
        r.record("italic-percent", Category::Percent, Some(Emphasis::Italic), 1);
        r.record("bold-percent", Category::Percent, Some(Emphasis::Bold), 1);
        assert_eq!(r.hits.len(), 2);
        assert_eq!(r.count("bold-percent"), 3);
        assert_eq!(r.count_category(Category::Percent), 4);
        assert_eq!(r.total_rewrites(), 4);
        assert_eq!(r.count("bold-link"), 0);
    }

    #[test]
    fn report_serialises_snake_case() {
        let mut r = RepairReport::default();
        r.record("trailing-bang", Category::IncompleteImage, None, 1);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"incomplete_image\""), "got: {json}");
        assert!(json.contains("\"emphasis\":null"), "got: {json}");
    }
}
