//! Incomplete image stripping.
//!
//! A token-by-token renderer sees `![alt](http://x.com/im` before the
//! closing `)` arrives, and most renderers show that as literal text that
//! then flickers into an image. These rules drop the dangling tail so the
//! partial render stays clean. Only the end of the buffer is touched; a
//! complete `![alt](url)` anywhere is preserved.
//!
//! The rules run in order, each deleting at most one match, and the list is
//! repeated until nothing matches:
//!
//! 1. `![alt](partial-url` : destination still open
//! 2. `![partial-alt`      : alt text still open
//! 3. `![`                 : bare opener
//! 4. `!`, `!!`, …         : a trailing run of `!` that may start an image
//!
//! Rule 4 takes the whole run so a second call has nothing left to strip.
//! The repeat covers a removal that exposes an earlier open token:
//! `x ![a](![b)c ![d` loses `![b)c ![d` to rule 2, which leaves `![a](` open.

use crate::rules::{Category, Rule};
use once_cell::sync::Lazy;

pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::cleanup(
            "image-open-destination",
            Category::IncompleteImage,
            r"!\[[^\]]*\]\([^)]*$",
        ),
        Rule::cleanup("image-open-alt", Category::IncompleteImage, r"!\[[^\]]*$"),
        Rule::cleanup("image-open-bracket", Category::IncompleteImage, r"!\[$"),
        Rule::cleanup("trailing-bang", Category::IncompleteImage, r"!+$"),
    ]
});
