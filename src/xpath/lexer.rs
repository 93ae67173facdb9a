//! Tokenization with byte ranges for the XPath grammar

use crate::xpath::tokens::Token;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// A character the grammar has no token for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected character at byte {}", self.position)
    }
}

impl std::error::Error for LexError {}

/// Tokenize source text, failing on the first unrecognized character.
/// Whitespace tokens are dropped here; XPath treats them as insignificant.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(Token::Space) => continue,
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError {
                    position: lexer.span().start,
                })
            }
        }
    }
    Ok(tokens)
}
