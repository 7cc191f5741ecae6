//! Link, parenthetical, percent and question-mark extraction.
//!
//! Narrows an emphasis span so trailing punctuation sits outside it:
//!
//! ```text
//! **[text](url)**       → [**text**](url)
//! **text (note)**       → **text** (note)
//! **text(note)**        → **text**(note)
//! **text (note)**suffix → **text** (note)suffix
//! **21%**               → **21**%
//! **text?**             → **text**?        (bold only)
//! ```
//!
//! None of these patterns mention a quote character. Quote-bearing spans
//! were settled by the quote stages, and repeating that work here would
//! double-transform them.
//!
//! Parenthetical and percent content never crosses a newline, so a stray
//! `**` in one paragraph cannot pair with one several lines later. The
//! percent content must also be non-empty and `%`-free: `**%**` stays as is
//! instead of collapsing into an empty `****`.
//!
//! Percent and question content never holds `*` and never ends in `)` or
//! `%`. Moving the mark out of `**a (b)?**` would leave `**a (b)**` for the
//! parenthetical rules, which already ran; such spans are left alone. The
//! `*` exclusion also stops a search at the next marker instead of scanning
//! the rest of a long line.

use crate::rules::{Category, Rule};
use once_cell::sync::Lazy;

/// Bold rules, then italic rules.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // ── Bold ─────────────────────────────────────────────────────────
        Rule::bold(
            "bold-link",
            Category::Link,
            r"\*\*\[([^\]]+)\]\(([^)]+)\)\*\*",
            "[**$1**]($2)",
        ),
        Rule::bold(
            "bold-paren-spaced",
            Category::Parenthetical,
            r"\*\*([^*\n]+?)\s+(\([^*\n]+?\))\*\*",
            "**$1** $2",
        ),
        Rule::bold(
            "bold-paren-attached",
            Category::Parenthetical,
            r"\*\*([^*\n]+?)(\([^*\n]+?\))\*\*",
            "**$1**$2",
        ),
        Rule::bold(
            "bold-paren-spaced-suffix",
            Category::Parenthetical,
            r"\*\*([^*\n]+?)\s+(\([^*\n]+?\))\*\*([^\s*]+)",
            "**$1** $2$3",
        ),
        Rule::bold(
            "bold-paren-attached-suffix",
            Category::Parenthetical,
            r"\*\*([^*\n]+?)(\([^*\n]+?\))\*\*([^\s*]+)",
            "**$1**$2$3",
        ),
        Rule::bold(
            "bold-percent",
            Category::Percent,
            r"\*\*([^*%\n]*?[^*%)\n])%\*\*",
            "**$1**%",
        ),
        Rule::bold(
            "bold-question",
            Category::Question,
            r"\*\*([^*?\n]*?[^*?%)\n])\?\*\*",
            "**$1**?",
        ),
        // ── Italic ───────────────────────────────────────────────────────
        Rule::italic(
            "italic-link",
            Category::Link,
            r"(?<!\*)\*\[([^\]]+)\]\(([^)]+)\)\*(?!\*)",
            "[*$1*]($2)",
        ),
        Rule::italic(
            "italic-paren-spaced",
            Category::Parenthetical,
            r"(?<!\*)\*([^*\n]+?)\s+(\([^*\n]+?\))\*(?!\*)",
            "*$1* $2",
        ),
        Rule::italic(
            "italic-paren-attached",
            Category::Parenthetical,
            r"(?<!\*)\*([^*\n]+?)(\([^*\n]+?\))\*(?!\*)",
            "*$1*$2",
        ),
        Rule::italic(
            "italic-paren-spaced-suffix",
            Category::Parenthetical,
            r"(?<!\*)\*([^*\n]+?)\s+(\([^*\n]+?\))\*([^\s*]+)",
            "*$1* $2$3",
        ),
        Rule::italic(
            "italic-paren-attached-suffix",
            Category::Parenthetical,
            r"(?<!\*)\*([^*\n]+?)(\([^*\n]+?\))\*([^\s*]+)",
            "*$1*$2$3",
        ),
        Rule::italic(
            "italic-percent",
            Category::Percent,
            r"(?<!\*)\*([^*%\n]*?[^*%)\n])%\*(?!\*)",
            "*$1*%",
        ),
    ]
});
