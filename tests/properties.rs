//! Property tests for the repair pass.
//!
//! Two input families:
//!
//! * documents built from emphasis spans of the shapes the rules target,
//!   joined by ordinary separators, to check that one call is enough and
//!   that neighbouring spans never interact;
//! * short strings drawn from the characters the rules react to, so most
//!   cases contain several overlapping or unbalanced markers.
//!
//! Run with:
//!   cargo test --test properties

use proptest::prelude::*;
use unbreak_md::{unbreak, unbreak_with, unbreak_with_report, EmphasisScope, RepairConfig};

// ── Strategies ───────────────────────────────────────────────────────────────

const WORDS: &[&str] = &[
    "Text", "a", "b c", "21", "GBO", "장학금 앱", "住吉の長屋", "the floor", "x-y",
];

const QUOTES: &[(&str, &str)] = &[
    ("\"", "\""),
    ("'", "'"),
    ("\u{201C}", "\u{201D}"),
    ("\u{2018}", "\u{2019}"),
];

/// Text glued to a closing marker. Empty twice as often as the others.
const SUFFIXES: &[&str] = &["", "", "suffix", "은", ":"];

const SEPARATORS: &[&str] = &[" ", " and ", ", ", "\n", "\n\n", ". "];

/// Markup-heavy pieces. `](` is one piece so link shapes show up often.
const MARKUP: &[&str] = &[
    "a", "b", " ", "\n", "*", "**", "\"", "'", "(", ")", "%", "?", "!", "[", "]", "](",
];

/// [`MARKUP`] plus curly quotes and non-Latin text.
const MIXED: &[&str] = &[
    "a", " ", "\n", "*", "**", "\"", "'", "(", ")", "%", "?", "!", "[", "]", "](",
    "\u{201C}", "\u{201D}", "\u{2018}", "\u{2019}", "가", "の",
];

/// Text without any character a rule can move or delete.
const INERT: &[&str] = &[
    "a", "b", " ", "\n", "\"", "'", "(", ")", "%", "?", "[", "]", "가", ".",
];

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(WORDS)
}

/// Text between the markers of one emphasis span. The `?` shape is only
/// generated for bold, the only emphasis with a question-mark rule.
fn span_content(bold: bool) -> impl Strategy<Value = String> {
    let forms = if bold { 10 } else { 9 };
    (
        0..forms,
        word(),
        word(),
        word(),
        prop::sample::select(QUOTES),
        any::<bool>(),
        0..9u8,
    )
        .prop_map(|(form, w, w2, w3, (open, close), spaced, n)| {
            let sp = if spaced { " " } else { "" };
            match form {
                0 => w.to_string(),
                1 => format!("{open}{w}{close}"),
                2 => format!("{w}{sp}({w2})"),
                3 => format!("{w}%"),
                4 => format!("[{w}](https://u.io/{n})"),
                5 => format!("{w} {open}{w2}{close}"),
                6 => format!("{w} {open}{w2}{sp}({w3}){close}"),
                7 => format!("{open}{w}({w2}){close}"),
                8 => format!("{w}'{w2} ({w3})'"),
                _ => format!("{w}?"),
            }
        })
}

/// One emphasis span with an optional glued suffix, or plain text.
fn item() -> impl Strategy<Value = String> {
    let plain = (word(), word(), 0..6usize).prop_map(|(w, w2, form)| match form {
        0 => w.to_string(),
        1 => format!("\"{w}\""),
        2 => format!("'{w}'"),
        3 => format!("{w} ({w2})"),
        4 => format!("{w}%"),
        _ => format!("{w}?"),
    });
    let bold = (span_content(true), prop::sample::select(SUFFIXES))
        .prop_map(|(c, suffix)| format!("**{c}**{suffix}"));
    let italic = (span_content(false), prop::sample::select(SUFFIXES))
        .prop_map(|(c, suffix)| format!("*{c}*{suffix}"));
    prop_oneof![plain, bold, italic]
}

/// One to five items and the separators between them.
fn document() -> impl Strategy<Value = (Vec<String>, Vec<&'static str>)> {
    prop::collection::vec(item(), 1..=5).prop_flat_map(|items| {
        let gaps = items.len() - 1;
        (
            Just(items),
            prop::collection::vec(prop::sample::select(SEPARATORS), gaps),
        )
    })
}

fn join(items: &[String], separators: &[&str]) -> String {
    let mut out = items[0].clone();
    for (sep, item) in separators.iter().zip(&items[1..]) {
        out.push_str(sep);
        out.push_str(item);
    }
    out
}

fn text_from(pieces: &'static [&'static str], max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(pieces), 0..=max).prop_map(|v| v.concat())
}

fn markup_text() -> impl Strategy<Value = String> {
    text_from(MARKUP, 32)
}

fn mixed_text() -> impl Strategy<Value = String> {
    text_from(MIXED, 24)
}

fn scope() -> impl Strategy<Value = EmphasisScope> {
    prop_oneof![
        Just(EmphasisScope::Both),
        Just(EmphasisScope::BoldOnly),
        Just(EmphasisScope::ItalicOnly),
    ]
}

fn non_whitespace_sorted(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    chars.sort_unstable();
    chars
}

// ── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    #[test]
    fn prop_one_call_is_enough((items, seps) in document()) {
        let doc = join(&items, &seps);
        let once = unbreak(&doc);
        prop_assert_eq!(unbreak(&once), once);
    }

    #[test]
    fn prop_neighbouring_spans_repair_independently((items, seps) in document()) {
        let whole = unbreak(&join(&items, &seps));
        let parts: Vec<String> = items.iter().map(|item| unbreak(item)).collect();
        prop_assert_eq!(whole, join(&parts, &seps));
    }

    #[test]
    fn prop_no_rule_is_skipped(s in mixed_text()) {
        let out = unbreak_with_report(&s, &RepairConfig::default());
        prop_assert!(out.report.skipped.is_empty(), "{:?}", out.report.skipped);
    }

    #[test]
    fn prop_rewrites_only_move_characters(s in markup_text(), scope in scope()) {
        // With image stripping off, every rule is a reordering plus
        // whitespace collapse.
        let config = RepairConfig::builder()
            .normalize_quotes(false)
            .strip_incomplete_images(false)
            .emphasis(scope)
            .build();
        let out = unbreak_with(&s, &config);
        prop_assert_eq!(non_whitespace_sorted(&out), non_whitespace_sorted(&s));
    }

    #[test]
    fn prop_text_without_markers_is_unchanged(s in text_from(INERT, 48)) {
        prop_assert_eq!(unbreak(&s), s);
    }

    #[test]
    fn prop_bold_only_ignores_text_without_double_asterisk(s in markup_text()) {
        prop_assume!(!s.contains("**"));
        let config = RepairConfig::builder()
            .emphasis(EmphasisScope::BoldOnly)
            .strip_incomplete_images(false)
            .build();
        prop_assert_eq!(unbreak_with(&s, &config), s);
    }

    #[test]
    fn prop_output_never_grows(s in "\\PC{0,64}") {
        let out = unbreak(&s);
        prop_assert!(out.len() <= s.len(), "{:?} -> {:?}", s, out);
    }
}
