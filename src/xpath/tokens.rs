//! Token definitions for the XPath grammar
//!
//! Tokens are defined with the logos derive macro. Unlike the CSS grammar,
//! whitespace is insignificant here and is filtered out before parsing.
//! The `and`/`or`/`div`/`mod` operators lex as names; the parser decides
//! from context whether a name is an operator, an axis, or a node test.

use logos::Logos;

/// All tokens of the XPath grammar
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("//")]
    DoubleSlash,
    #[token("/")]
    Slash,
    #[token("::")]
    AxisMarker,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("@")]
    At,
    #[token("..")]
    ParentStep,
    #[token(".")]
    SelfStep,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("=")]
    Equals,
    #[token("!=")]
    NotEquals,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("$")]
    Dollar,

    #[regex(r"[ \t\r\n]+")]
    Space,

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    #[regex(r#""[^"]*""#, |lex| strip_quotes(lex.slice()))]
    #[regex(r"'[^']*'", |lex| strip_quotes(lex.slice()))]
    Literal(String),

    // NCName with the dots and dashes XPath allows inside names
    #[regex(r"[_a-zA-Z][-_a-zA-Z0-9.]*", |lex| lex.slice().to_string())]
    Name(String),
}

fn strip_quotes(slice: &str) -> String {
    slice[1..slice.len() - 1].to_string()
}
