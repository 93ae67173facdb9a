//! # qex
//!
//! Explains CSS selectors and XPath location paths in plain English.
//!
//! The pipeline is: lex the input with a grammar-specific token enum, parse
//! it into a closed AST, walk the AST building phrase-structure values
//! (nouns, verbs, prepositions, coordinated clauses with number agreement),
//! and linearize each phrase into a sentence. One explanation is produced
//! per top-level matched subexpression, keyed by the exact matched substring
//! of the input.
//!
//! ```text
//! div > p   =>   The 'div > p' selector chooses paragraphs that are
//!                children of containers.
//! ```

pub mod compose;
pub mod css;
pub mod explain;
pub mod nlg;
pub mod vocab;
pub mod xpath;

pub use explain::{explain, ExplainError, Explanation, ExplanationMap, Grammar};
