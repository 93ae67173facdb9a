//! Token definitions for the CSS selector grammar
//!
//! Tokens are defined with the logos derive macro. Whitespace is a real
//! token here, not trivia: a run of spaces between two sequences is the
//! descendant combinator.

use logos::Logos;

/// All tokens of the CSS selector grammar
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    #[token(">")]
    Greater,
    #[token("+")]
    Plus,
    #[token("~")]
    Tilde,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("#")]
    Hash,
    #[token("*")]
    Star,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(":")]
    Colon,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Attribute match operators; multi-character forms win over their
    // single-character prefixes by longest match
    #[token("=")]
    Equals,
    #[token("~=")]
    Includes,
    #[token("|=")]
    DashMatch,
    #[token("^=")]
    PrefixMatch,
    #[token("$=")]
    SuffixMatch,
    #[token("*=")]
    SubstringMatch,

    #[regex(r"[ \t\r\n]+")]
    Space,

    #[regex(r"-?[_a-zA-Z][-_a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    #[regex(r#""[^"]*""#, |lex| strip_quotes(lex.slice()))]
    #[regex(r"'[^']*'", |lex| strip_quotes(lex.slice()))]
    Str(String),
}

fn strip_quotes(slice: &str) -> String {
    slice[1..slice.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    fn lex_ok(source: &str) -> Vec<Token> {
        Token::lexer(source).map(|r| r.expect("lex error")).collect()
    }

    #[test]
    fn test_simple_class_selector() {
        assert_eq!(
            lex_ok(".watch-view-count"),
            vec![Token::Dot, Token::Ident("watch-view-count".to_string())]
        );
    }

    #[test]
    fn test_combinators_and_spaces() {
        assert_eq!(
            lex_ok("div > p"),
            vec![
                Token::Ident("div".to_string()),
                Token::Space,
                Token::Greater,
                Token::Space,
                Token::Ident("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_attribute_operators_prefer_longest_match() {
        assert_eq!(
            lex_ok("[href^='x']"),
            vec![
                Token::LBracket,
                Token::Ident("href".to_string()),
                Token::PrefixMatch,
                Token::Str("x".to_string()),
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn test_star_equals_is_substring_match() {
        assert_eq!(
            lex_ok("*="),
            vec![Token::SubstringMatch]
        );
    }
}
