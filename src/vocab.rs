//! Friendly-name vocabulary tables
//!
//! Closed lookup tables mapping tag names to nouns a novice recognizes.
//! Lookups are pure; absence from the table is not an error, callers fall
//! back to the quoted literal tag so nothing is ever silently dropped.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Tag name to friendly noun. Covers the HTML tags that show up in the
/// selectors novices actually paste in.
static TYPE_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("p", "paragraph"),
        ("div", "container"),
        ("span", "text span"),
        ("strong", "bolded text segment"),
        ("em", "emphasized text segment"),
        ("b", "bolded text segment"),
        ("i", "italicized text segment"),
        ("a", "link"),
        ("img", "image"),
        ("pre", "preformatted text block"),
        ("code", "code snippet"),
        ("table", "table"),
        ("tr", "row"),
        ("td", "cell"),
        ("th", "header cell"),
        ("ul", "bulleted list"),
        ("ol", "numbered list"),
        ("li", "list item"),
        ("h1", "top-level heading"),
        ("h2", "second-level heading"),
        ("h3", "third-level heading"),
        ("form", "form"),
        ("input", "input field"),
        ("button", "button"),
        ("body", "document body"),
    ])
});

/// Look up the friendly noun for a tag name
pub fn type_noun(tag: &str) -> Option<&'static str> {
    TYPE_NOUNS.get(tag).copied()
}

/// Wrap a literal token in single quotes for display
pub fn quoted(text: &str) -> String {
    format!("'{}'", text)
}
