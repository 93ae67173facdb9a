//! CSS selector grammar and explainer

pub mod ast;
pub mod explain;
pub mod lexer;
pub mod parser;
pub mod tokens;

pub use ast::{Combinator, Selector, SelectorGroup, SimpleSelectorSequence};
pub use parser::{parse, ParseError};
pub use tokens::Token;
