//! XPath grammar and explainer

pub mod ast;
pub mod explain;
pub mod lexer;
pub mod parser;
pub mod tokens;

pub use ast::{Axis, Expr, LocationPath, NodeTest, Step};
pub use parser::{parse, ParseError};
pub use tokens::Token;
