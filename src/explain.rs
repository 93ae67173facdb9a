//! Top-level explanation driver
//!
//! Parses an input under the caller's chosen grammar, explains each
//! top-level alternative (comma-separated selectors, `|`-separated paths),
//! and returns the realized sentences keyed by the exact matched substring.
//!
//! A parse failure fails the whole call. A walk that produces no phrase for
//! one alternative is contained: the alternative is skipped with a warning
//! and the rest of the map is returned. The call only fails when nothing at
//! all could be explained.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::css;
use crate::nlg::realize;
use crate::xpath;

/// Which grammar to parse the input under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Css,
    XPath,
}

impl Grammar {
    /// The grammar's name as it appears in user-facing messages
    pub fn description(&self) -> &'static str {
        match self {
            Grammar::Css => "a CSS selector",
            Grammar::XPath => "an XPath expression",
        }
    }
}

/// One explained subexpression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// The exact substring of the input this explanation covers
    pub matched_text: String,
    /// The full explanation sentence
    pub description: String,
}

/// Explanations keyed by matched substring; one entry per top-level
/// alternative in the input
pub type ExplanationMap = HashMap<String, Explanation>;

/// Failure to explain an input. Both variants render the same user-facing
/// message; parse detail goes to the log, not to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplainError {
    /// The input did not parse under the chosen grammar
    Parse { input: String, grammar: Grammar },
    /// The input parsed but no alternative produced a phrase
    Empty { input: String, grammar: Grammar },
}

impl fmt::Display for ExplainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (input, grammar) = match self {
            ExplainError::Parse { input, grammar } | ExplainError::Empty { input, grammar } => {
                (input, grammar)
            }
        };
        write!(
            f,
            "'{}' could not be explained as {}",
            input,
            grammar.description()
        )
    }
}

impl std::error::Error for ExplainError {}

/// Explain an input string under a grammar
pub fn explain(input: &str, grammar: Grammar) -> Result<ExplanationMap, ExplainError> {
    let mut map = ExplanationMap::new();
    match grammar {
        Grammar::Css => {
            let group = css::parser::parse(input).map_err(|err| {
                tracing::warn!(input, error = %err, "selector failed to parse");
                ExplainError::Parse {
                    input: input.to_string(),
                    grammar,
                }
            })?;
            for selector in &group.selectors {
                let text = &input[selector.span.clone()];
                match css::explain::explain_selector(selector) {
                    Some(phrase) => {
                        let sentence =
                            format!("The '{}' selector chooses {}.", text, realize(&phrase));
                        insert(&mut map, text, sentence);
                    }
                    None => tracing::warn!(selector = text, "selector produced no phrase"),
                }
            }
        }
        Grammar::XPath => {
            let alternatives = xpath::parser::parse(input).map_err(|err| {
                tracing::warn!(input, error = %err, "xpath failed to parse");
                ExplainError::Parse {
                    input: input.to_string(),
                    grammar,
                }
            })?;
            for alternative in &alternatives {
                let text = &input[alternative.span.clone()];
                match xpath::explain::explain_expr(&alternative.node) {
                    Some(phrase) => {
                        let sentence =
                            format!("The '{}' xpath chooses {}.", text, realize(&phrase));
                        insert(&mut map, text, sentence);
                    }
                    None => tracing::warn!(xpath = text, "expression produced no phrase"),
                }
            }
        }
    }
    if map.is_empty() {
        return Err(ExplainError::Empty {
            input: input.to_string(),
            grammar,
        });
    }
    Ok(map)
}

fn insert(map: &mut ExplanationMap, text: &str, description: String) {
    map.insert(
        text.to_string(),
        Explanation {
            matched_text: text.to_string(),
            description,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_selector() {
        let map = explain(".watch-view-count", Grammar::Css).expect("should explain");
        let entry = &map[".watch-view-count"];
        assert_eq!(entry.matched_text, ".watch-view-count");
        assert_eq!(
            entry.description,
            "The '.watch-view-count' selector chooses elements of class 'watch-view-count'."
        );
    }

    #[test]
    fn test_css_selector_group_keys_each_alternative() {
        let map = explain("div > p, a:hover", Grammar::Css).expect("should explain");
        assert_eq!(map.len(), 2);
        assert_eq!(
            map["div > p"].description,
            "The 'div > p' selector chooses paragraphs that are children of containers."
        );
        assert_eq!(
            map["a:hover"].description,
            "The 'a:hover' selector chooses links that are being hovered over."
        );
    }

    #[test]
    fn test_xpath_sentence_frame() {
        let map = explain("//div", Grammar::XPath).expect("should explain");
        assert_eq!(
            map["//div"].description,
            "The '//div' xpath chooses containers that are descendants of the root node."
        );
    }

    #[test]
    fn test_xpath_union_keys_each_alternative() {
        let map = explain("//a | //img", Grammar::XPath).expect("should explain");
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("//a"));
        assert!(map.contains_key("//img"));
    }

    #[test]
    fn test_css_parse_failure_message() {
        let err = explain("invalid....selector", Grammar::Css).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "'invalid....selector' could not be explained as a CSS selector"
        );
    }

    #[test]
    fn test_xpath_parse_failure_message() {
        let err = explain("//div[", Grammar::XPath).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "'//div[' could not be explained as an XPath expression"
        );
    }

    #[test]
    fn test_unexplainable_expression_is_empty_not_panic() {
        // Arithmetic parses but produces no phrase
        let err = explain("1 + 2", Grammar::XPath).expect_err("should fail");
        assert!(matches!(err, ExplainError::Empty { .. }));
    }

    #[test]
    fn test_one_dead_alternative_does_not_discard_the_rest() {
        let map = explain("//div | 1 + 2", Grammar::XPath).expect("should explain");
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("//div"));
    }

    #[test]
    fn test_keys_are_exact_substrings() {
        let input = "  div > p  ";
        let map = explain(input, Grammar::Css).expect("should explain");
        for key in map.keys() {
            assert!(input.contains(key.as_str()));
        }
    }
}
