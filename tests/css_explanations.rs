//! End-to-end explanation tests for the CSS grammar

use qex::{explain, ExplainError, Grammar};
use rstest::rstest;

fn sentence(input: &str) -> String {
    let map = explain(input, Grammar::Css).expect("should explain");
    map.get(input)
        .unwrap_or_else(|| panic!("no entry keyed by {:?}, got {:?}", input, map.keys()))
        .description
        .clone()
}

#[rstest]
#[case(
    ".watch-view-count",
    "The '.watch-view-count' selector chooses elements of class 'watch-view-count'."
)]
#[case("div.klazz", "The 'div.klazz' selector chooses containers of class 'klazz'.")]
#[case("div p", "The 'div p' selector chooses paragraphs from containers.")]
#[case(
    "div > p",
    "The 'div > p' selector chooses paragraphs that are children of containers."
)]
#[case(
    "table tr td",
    "The 'table tr td' selector chooses cells from rows from tables."
)]
#[case("#main", "The '#main' selector chooses elements with ID 'main'.")]
#[case("*", "The '*' selector chooses all elements.")]
#[case(
    "a[href^='https']",
    "The 'a[href^='https']' selector chooses links with a 'href' attribute that begins with 'https'."
)]
#[case(
    "a[href='x']",
    "The 'a[href='x']' selector chooses links with a 'href' attribute that equals 'x'."
)]
#[case(
    "a[rel~='nofollow']",
    "The 'a[rel~='nofollow']' selector chooses links with a 'rel' attribute \
     that contains the word 'nofollow'."
)]
#[case(
    "a[lang|='en']",
    "The 'a[lang|='en']' selector chooses links with a 'lang' attribute that starts with 'en'."
)]
#[case(
    "a[href$='.pdf']",
    "The 'a[href$='.pdf']' selector chooses links with a 'href' attribute that ends with '.pdf'."
)]
#[case(
    "a[href*='example']",
    "The 'a[href*='example']' selector chooses links with a 'href' attribute \
     that contains 'example'."
)]
#[case(
    "a:hover",
    "The 'a:hover' selector chooses links that are being hovered over."
)]
#[case(
    "li:first-child",
    "The 'li:first-child' selector chooses list items that are the first child of their parent."
)]
#[case(
    "li:last-child",
    "The 'li:last-child' selector chooses list items that are the last child of their parent."
)]
#[case(
    "a:focus",
    "The 'a:focus' selector chooses links that match the ':focus' pseudo-class."
)]
#[case(
    "p:lang(en)",
    "The 'p:lang(en)' selector chooses paragraphs that match the ':lang(en)' pseudo-class."
)]
#[case(
    "li:nth-child(2)",
    "The 'li:nth-child(2)' selector chooses list items that are child number 2 of their parent."
)]
fn explains_selector(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(sentence(input), expected);
}

#[rstest]
#[case("div", "container")]
#[case("p", "paragraph")]
#[case("img", "image")]
#[case("strong", "bolded text segment")]
fn known_tags_use_friendly_nouns(#[case] tag: &str, #[case] noun: &str) {
    assert!(sentence(tag).contains(noun));
}

#[test]
fn unknown_tags_keep_the_literal_tag() {
    let text = sentence("customtag");
    assert!(text.contains("'customtag'"));
}

#[test]
fn sibling_combinators_mention_appearance_order() {
    assert!(sentence("div ~ p").contains("eventually appear after"));
    assert!(sentence("div + p").contains("appear right after"));
}

#[test]
fn selector_groups_produce_one_entry_per_selector() {
    let map = explain("div > p, a:hover", Grammar::Css).expect("should explain");
    assert_eq!(map.len(), 2);
    assert!(map.contains_key("div > p"));
    assert!(map.contains_key("a:hover"));
}

#[test]
fn surrounding_whitespace_is_not_part_of_the_key() {
    let map = explain("  div > p  ", Grammar::Css).expect("should explain");
    assert!(map.contains_key("div > p"));
}

#[rstest]
#[case("invalid....selector")]
#[case("div >")]
#[case("")]
fn malformed_selectors_fail(#[case] input: &str) {
    let err = explain(input, Grammar::Css).expect_err("should fail");
    assert_eq!(
        err.to_string(),
        format!("'{}' could not be explained as a CSS selector", input)
    );
    assert!(matches!(err, ExplainError::Parse { .. } | ExplainError::Empty { .. }));
}
