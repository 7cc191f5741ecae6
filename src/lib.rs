//! # unbreak-md
//!
//! Repair Markdown that is still streaming in from an LLM.
//!
//! ## Why this crate?
//!
//! Models emit emphasis with the punctuation on the wrong side of the
//! markers: `**"Quote"**`, `**Text (note)**`, `**21%**`. Many renderers
//! (CommonMark's flanking rules in particular) then refuse to treat the
//! markers as emphasis, and the reader sees raw asterisks. While a response
//! is still streaming, a half-received image (`![chart](https://…`) also
//! shows up as literal text until the closing `)` arrives.
//!
//! [`unbreak`] fixes both with an ordered list of regex rewrites. It is a
//! pure `&str → String` function: no parser, no document tree, no state
//! between calls.
//!
//! ## Pipeline Overview
//!
//! ```text
//! fragment
//!  │
//!  ├─ 1. Normalise   curly quotes → ASCII
//!  ├─ 2. Boundary    **"X"**           → "**X**"
//!  ├─ 3. Partial     **text 'X (n)'**  → text '**X** (n)'
//!  ├─ 4. Punctuation **[t](u)** **t (n)** **21%** **t?**
//!  └─ 5. Images      drop trailing ![alt](par…
//! ```
//!
//! One pass is enough: repairing already repaired text changes nothing.
//!
//! ## Quick Start
//!
//! ```rust
//! use unbreak_md::unbreak;
//!
//! let fixed = unbreak("**Bold (text)** and *Italic (text)*");
//! assert_eq!(fixed, "**Bold** (text) and *Italic* (text)");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `unbreak` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! unbreak-md = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod repair;
pub mod rules;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{EmphasisScope, RepairConfig, RepairConfigBuilder};
pub use error::{RuleError, UnbreakError};
pub use output::{RepairOutput, RepairReport, RuleHit};
pub use repair::{
    repair_file, unbreak, unbreak_opt, unbreak_with, unbreak_with_report, write_markdown,
};
pub use rules::{Category, Emphasis, Stage};

/// Alias of [`unbreak`] under its descriptive name.
pub use repair::unbreak as validate_markdown;
