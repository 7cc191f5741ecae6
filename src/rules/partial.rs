//! Partial quote extraction.
//!
//! Handles spans where the quotes cover only the tail of the emphasised
//! text, optionally with a parenthetical inside the quotes:
//!
//! ```text
//! **text 'quote'**              → text '**quote**'
//! **text "quote (note)"**       → text "**quote** (note)"
//! **'quote(note)'**             → '**quote**(note)'
//! ```
//!
//! The leading plain text leaves the span, the quote marks stay outside
//! it, and only the quoted phrase stays emphasised.
//!
//! ## Rule Order
//!
//! The seven sub-rules per emphasis kind run from most to least specific.
//! A general rule run first would consume the input the specific rule needs:
//! `**text "quote (note)"**` would become `text "**quote (note)**"` under
//! rule 7 instead of `text "**quote** (note)"` under rule 2. Do not reorder.
//!
//! | # | Shape |
//! |---|-------|
//! | 1 | `'…'` with spaced `(…)` right after an unquoted lead (nested in `"…"` upstream) |
//! | 2 | lead + `"… (…)"` |
//! | 3 | `'…(…)'` with no lead |
//! | 4 | lead + `'…(…)'` |
//! | 5 | lead + `"…(…)"` |
//! | 6 | lead + `'…'` |
//! | 7 | lead + `"…"` |

use crate::rules::{Category, Rule};
use once_cell::sync::Lazy;

/// Bold sub-rules 1–7, then italic sub-rules 1–7.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let bold = [
        (
            "bold-partial-nested-paren",
            r"\*\*([^*']+?)'([^'(]+?)\s+\(([^)]+?)\)'\*\*",
            "$1'**$2** ($3)'",
        ),
        (
            "bold-partial-double-paren-spaced",
            r#"\*\*([^*]+?)\s+"([^"]+?)\s+\(([^)]+?)\)"\*\*"#,
            r#"$1 "**$2** ($3)""#,
        ),
        (
            "bold-partial-single-paren-bare",
            r"\*\*'([^']+?)\(([^)]+?)\)'\*\*",
            "'**$1**($2)'",
        ),
        (
            "bold-partial-single-paren",
            r"\*\*([^*]+?)\s+'([^']+?)\(([^)]+?)\)'\*\*",
            "$1 '**$2**($3)'",
        ),
        (
            "bold-partial-double-paren",
            r#"\*\*([^*]+?)\s+"([^"]+?)\(([^)]+?)\)"\*\*"#,
            r#"$1 "**$2**($3)""#,
        ),
        (
            "bold-partial-single",
            r"\*\*([^*]+?)\s+'([^']+?)'\*\*",
            "$1 '**$2**'",
        ),
        (
            "bold-partial-double",
            r#"\*\*([^*]+?)\s+"([^"]+?)"\*\*"#,
            r#"$1 "**$2**""#,
        ),
    ];
    let italic = [
        (
            "italic-partial-nested-paren",
            r"(?<!\*)\*([^*']+?)'([^'(]+?)\s+\(([^)]+?)\)'\*(?!\*)",
            "$1'*$2* ($3)'",
        ),
        (
            "italic-partial-double-paren-spaced",
            r#"(?<!\*)\*([^*]+?)\s+"([^"]+?)\s+\(([^)]+?)\)"\*(?!\*)"#,
            r#"$1 "*$2* ($3)""#,
        ),
        (
            "italic-partial-single-paren-bare",
            r"(?<!\*)\*'([^']+?)\(([^)]+?)\)'\*(?!\*)",
            "'*$1*($2)'",
        ),
        (
            "italic-partial-single-paren",
            r"(?<!\*)\*([^*]+?)\s+'([^']+?)\(([^)]+?)\)'\*(?!\*)",
            "$1 '*$2*($3)'",
        ),
        (
            "italic-partial-double-paren",
            r#"(?<!\*)\*([^*]+?)\s+"([^"]+?)\(([^)]+?)\)"\*(?!\*)"#,
            r#"$1 "*$2*($3)""#,
        ),
        (
            "italic-partial-single",
            r"(?<!\*)\*([^*]+?)\s+'([^']+?)'\*(?!\*)",
            "$1 '*$2*'",
        ),
        (
            "italic-partial-double",
            r#"(?<!\*)\*([^*]+?)\s+"([^"]+?)"\*(?!\*)"#,
            r#"$1 "*$2*""#,
        ),
    ];

    bold.into_iter()
        .map(|(id, pat, rep)| Rule::bold(id, Category::PartialQuote, pat, rep))
        .chain(
            italic
                .into_iter()
                .map(|(id, pat, rep)| Rule::italic(id, Category::PartialQuote, pat, rep)),
        )
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{run_stage, Stage};

    fn partial(input: &str) -> String {
        run_stage(Stage::PartialQuotes, input)
    }

    #[test]
    fn seven_rules_per_emphasis() {
        assert_eq!(RULES.len(), 14);
        assert!(RULES[..7].iter().all(|r| r.id.starts_with("bold-")));
        assert!(RULES[7..].iter().all(|r| r.id.starts_with("italic-")));
    }

    #[test]
    fn nested_single_quote_with_spaced_paren() {
        assert_eq!(
            partial("**solution 'MailMaster (MailMaster)'**"),
            "solution '**MailMaster** (MailMaster)'"
        );
    }

    #[test]
    fn double_quote_with_spaced_paren() {
        assert_eq!(
            partial(r#"**Berkeley 학생의 "장학금 앱 (Scholar GPT)"**: app"#),
            r#"Berkeley 학생의 "**장학금 앱** (Scholar GPT)": app"#
        );
    }

    #[test]
    fn single_quote_with_attached_paren_and_no_lead() {
        assert_eq!(
            partial("바로 **'확장되지 않는 일(Do Things That Don't Scale)'**입니다."),
            "바로 '**확장되지 않는 일**(Do Things That Don't Scale)'입니다."
        );
    }

    #[test]
    fn single_quote_with_attached_paren_and_lead() {
        assert_eq!(
            partial("AI가 **역량을 끌어올리는 '바닥 올리기(floor raiser)'**인지"),
            "AI가 역량을 끌어올리는 '**바닥 올리기**(floor raiser)'인지"
        );
    }

    #[test]
    fn double_quote_with_attached_paren_and_lead() {
        assert_eq!(
            partial(r#"**the so-called "Growth Buyout(GBO)"**"#),
            r#"the so-called "**Growth Buyout**(GBO)""#
        );
    }

    #[test]
    fn plain_partial_quotes() {
        assert_eq!(
            partial("**Slow Ventures의 'Growth Buyout(GBO) 논리'**"),
            "Slow Ventures의 '**Growth Buyout(GBO) 논리**'"
        );
        assert_eq!(
            partial(r#"**call it "the floor"** today"#),
            r#"call it "**the floor**" today"#
        );
    }

    #[test]
    fn specific_rule_wins_over_general_one() {
        // Rule 2 must see this before rule 7, which would keep the
        // parenthetical inside the emphasis.
        let out = partial(r#"**an app "Scholar (GPT)"**"#);
        assert_eq!(out, r#"an app "**Scholar** (GPT)""#);
        assert_ne!(out, r#"an app "**Scholar (GPT)**""#);
    }

    #[test]
    fn italic_partial_quotes() {
        assert_eq!(
            partial("*Slow Ventures의 'Growth Buyout(GBO) 논리'*"),
            "Slow Ventures의 '*Growth Buyout(GBO) 논리*'"
        );
        assert_eq!(
            partial(r#"*an app "Scholar (GPT)"*"#),
            r#"an app "*Scholar* (GPT)""#
        );
    }

    #[test]
    fn italic_rules_skip_bold_runs() {
        // Glued bold span with a quote the bold rules cannot place either:
        // the italic rules must not split it into `*` pieces.
        let input = r#"x**a"b"**"#;
        assert_eq!(partial(input), input);
    }

    #[test]
    fn unquoted_span_is_untouched() {
        let input = "**bold (note)** and *italic*";
        assert_eq!(partial(input), input);
    }
}
