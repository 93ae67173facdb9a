//! Closed AST for CSS selector groups
//!
//! One variant per grammar production the explainer handles, so an
//! unhandled production is a compile-time gap rather than a silent no-op.
//! Selectors carry the byte span of their matched text so explanations can
//! be keyed by the exact substring of the input.

use std::ops::Range;

/// A comma-separated group of selectors, e.g. `div p, a.external`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorGroup {
    pub selectors: Vec<Selector>,
}

/// One selector: a flattened, ordered chain of sequences and combinators
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub parts: Vec<SelectorPart>,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectorPart {
    Sequence(SimpleSelectorSequence),
    Combinator(Combinator),
}

/// A single, non-combined unit of a selector: optional type selector plus
/// class/id/attribute/pseudo suffixes
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleSelectorSequence {
    pub type_selector: Option<TypeSelector>,
    pub suffixes: Vec<SelectorSuffix>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeSelector {
    Universal,
    Tag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectorSuffix {
    Class(String),
    Id(String),
    Attribute {
        name: String,
        op: Option<AttrOp>,
        value: Option<String>,
    },
    Pseudo {
        name: String,
        arg: Option<String>,
    },
}

/// A symbol joining two sequences and defining their structural relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace between sequences
    Descendant,
    /// `>`
    Child,
    /// `~`
    GeneralSibling,
    /// `+`
    AdjacentSibling,
}

/// Attribute value match operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOp {
    Equals,
    Includes,
    DashMatch,
    Prefix,
    Suffix,
    Substring,
}

impl AttrOp {
    /// The verb used when explaining the operator; the first word inflects
    /// for number during realization
    pub fn verb(&self) -> &'static str {
        match self {
            AttrOp::Equals => "equal",
            AttrOp::Includes => "contain the word",
            AttrOp::DashMatch => "start with",
            AttrOp::Prefix => "begin with",
            AttrOp::Suffix => "end with",
            AttrOp::Substring => "contain",
        }
    }
}
