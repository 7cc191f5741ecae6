//! Quote normalisation and boundary quote extraction.
//!
//! `**"X"**` renders with the quote marks in bold, which reads wrong next
//! to un-emphasised quotes in the same paragraph. The boundary rules lift
//! the quotes out: `**"X"**` → `"**X**"`, `*'X'*` → `'*X*'`.
//!
//! Every boundary rule only fires when the opening marker follows whitespace
//! or the start of input. `"**X**"` already has its quotes outside, and its
//! closing `"**` must not be read as the opening of a new `**"…"**` span.
//! The same holds for italic: in `'*a*' and '*b*'` the `*' and '*` between
//! two repaired spans is not a quoted span.

use crate::rules::{Category, Rule};
use once_cell::sync::Lazy;

/// Report id of the curly-quote character map.
pub const NORMALIZE_ID: &str = "normalize-curly-quotes";

const CURLY_SINGLE: [char; 2] = ['\u{2018}', '\u{2019}'];
const CURLY_DOUBLE: [char; 2] = ['\u{201C}', '\u{201D}'];

/// Replace curly quotes with ASCII quotes.
///
/// Returns the buffer and the number of characters replaced. The buffer is
/// handed back untouched when it holds no curly quote.
pub fn normalize(buf: String) -> (String, usize) {
    let count = buf
        .chars()
        .filter(|c| CURLY_SINGLE.contains(c) || CURLY_DOUBLE.contains(c))
        .count();
    if count == 0 {
        return (buf, 0);
    }
    let out = buf.replace(CURLY_SINGLE, "'").replace(CURLY_DOUBLE, "\"");
    (out, count)
}

/// Boundary rules, bold before italic, double quote before single.
pub static BOUNDARY_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::bold(
            "bold-boundary-double",
            Category::Quote,
            r#"(^|\s)\*\*"([^"]+)"\*\*"#,
            r#"$1"**$2**""#,
        ),
        Rule::bold(
            "bold-boundary-single",
            Category::Quote,
            r"(^|\s)\*\*'([^']+)'\*\*",
            "$1'**$2**'",
        ),
        Rule::italic(
            "italic-boundary-double",
            Category::Quote,
            r#"(^|\s)\*"([^"]+)"\*(?!\*)"#,
            r#"$1"*$2*""#,
        ),
        Rule::italic(
            "italic-boundary-single",
            Category::Quote,
            r"(^|\s)\*'([^']+)'\*(?!\*)",
            "$1'*$2*'",
        ),
    ]
});
