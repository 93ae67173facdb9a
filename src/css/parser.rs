//! Parser for CSS selector groups, built with chumsky combinators
//!
//! The parser runs over `(Token, byte-range)` pairs from the lexer so that
//! every selector can report the exact span of input text it matched.
//! Whitespace is handled here rather than discarded: a run of spaces
//! between two sequences is the descendant combinator.

use chumsky::prelude::*;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::css::ast::{
    AttrOp, Combinator, Selector, SelectorGroup, SelectorPart, SelectorSuffix,
    SimpleSelectorSequence, TypeSelector,
};
use crate::css::lexer::{self, LexError};
use crate::css::tokens::Token;

/// Type alias for token with location
type TokenLocation = (Token, Range<usize>);

/// Type alias for parser error
type ParserError = Simple<TokenLocation>;

/// Errors that can occur while parsing a selector group
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Lex(LexError),
    Syntax { message: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "lex error: {}", e),
            ParseError::Syntax { message } => write!(f, "syntax error: {}", message),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl ParseError {
    fn from_chumsky(errors: &[ParserError]) -> Self {
        let message = match errors.first().and_then(|e| e.found()) {
            Some((token, range)) => format!("unexpected {:?} at byte {}", token, range.start),
            None => "unexpected end of input".to_string(),
        };
        ParseError::Syntax { message }
    }
}

/// Parse a selector group from source text
pub fn parse(source: &str) -> Result<SelectorGroup, ParseError> {
    let tokens = lexer::tokenize(source)?;
    selector_group_parser(Arc::new(source.to_string()))
        .parse(tokens)
        .map_err(|errors| ParseError::from_chumsky(&errors))
}

/// Helper: match a specific token, yielding its byte range
fn token(t: Token) -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenLocation| tok == &t).map(|(_, range)| range)
}

/// Helper: match any identifier, yielding its text and byte range
fn ident() -> impl Parser<TokenLocation, (String, Range<usize>), Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenLocation| match tok {
        Token::Ident(name) => Ok((name, range)),
        _ => Err(Simple::custom(span, "expected identifier")),
    })
}

/// Helper: match an attribute value (identifier, string, or number)
fn attr_value() -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter_map(|span, (tok, _): TokenLocation| match tok {
        Token::Ident(v) | Token::Str(v) | Token::Number(v) => Ok(v),
        _ => Err(Simple::custom(span, "expected attribute value")),
    })
}

/// Helper: compute span bounds from byte ranges
fn range_bounds(ranges: &[Range<usize>]) -> Range<usize> {
    if ranges.is_empty() {
        return 0..0;
    }
    let start = ranges.iter().map(|r| r.start).min().unwrap_or(0);
    let end = ranges.iter().map(|r| r.end).max().unwrap_or(0);
    start..end
}

fn selector_group_parser(
    source: Arc<String>,
) -> impl Parser<TokenLocation, SelectorGroup, Error = ParserError> {
    let ws = token(Token::Space).ignored();

    let type_sel = ident()
        .map(|(name, range)| (TypeSelector::Tag(name), range))
        .or(token(Token::Star).map(|range| (TypeSelector::Universal, range)));

    let class_suffix = token(Token::Dot)
        .then(ident())
        .map(|(dot, (name, range))| (SelectorSuffix::Class(name), dot.start..range.end));

    let id_suffix = token(Token::Hash)
        .then(ident())
        .map(|(hash, (name, range))| (SelectorSuffix::Id(name), hash.start..range.end));

    let attr_op = choice((
        token(Token::Equals).to(AttrOp::Equals),
        token(Token::Includes).to(AttrOp::Includes),
        token(Token::DashMatch).to(AttrOp::DashMatch),
        token(Token::PrefixMatch).to(AttrOp::Prefix),
        token(Token::SuffixMatch).to(AttrOp::Suffix),
        token(Token::SubstringMatch).to(AttrOp::Substring),
    ));

    let attr_suffix = token(Token::LBracket)
        .then_ignore(ws.clone().or_not())
        .then(ident())
        .then(
            ws.clone()
                .or_not()
                .ignore_then(attr_op)
                .then(ws.clone().or_not().ignore_then(attr_value()))
                .or_not(),
        )
        .then_ignore(ws.clone().or_not())
        .then(token(Token::RBracket))
        .map(|(((lbracket, (name, _)), op_value), rbracket)| {
            let (op, value) = match op_value {
                Some((op, value)) => (Some(op), Some(value)),
                None => (None, None),
            };
            (
                SelectorSuffix::Attribute { name, op, value },
                lbracket.start..rbracket.end,
            )
        });

    let pseudo_source = source;
    let pseudo_suffix = token(Token::Colon)
        .then_ignore(token(Token::Colon).or_not())
        .then(ident())
        .then(
            token(Token::OpenParen)
                .ignore_then(
                    filter(|(tok, _): &TokenLocation| !matches!(tok, Token::CloseParen))
                        .repeated(),
                )
                .then(token(Token::CloseParen))
                .or_not(),
        )
        .map(move |((colon, (name, name_range)), arg)| match arg {
            Some((arg_tokens, rparen)) => {
                let ranges: Vec<Range<usize>> =
                    arg_tokens.into_iter().map(|(_, range)| range).collect();
                let arg_text = pseudo_source[range_bounds(&ranges)].trim().to_string();
                let arg = if arg_text.is_empty() {
                    None
                } else {
                    Some(arg_text)
                };
                (
                    SelectorSuffix::Pseudo { name, arg },
                    colon.start..rparen.end,
                )
            }
            None => (
                SelectorSuffix::Pseudo { name, arg: None },
                colon.start..name_range.end,
            ),
        });

    let suffix = choice((class_suffix, id_suffix, attr_suffix, pseudo_suffix));

    let sequence = type_sel
        .then(suffix.clone().repeated())
        .map(|((type_selector, type_range), suffixes)| {
            let mut span = type_range;
            let mut collected = Vec::new();
            for (s, range) in suffixes {
                span.end = range.end;
                collected.push(s);
            }
            (
                SimpleSelectorSequence {
                    type_selector: Some(type_selector),
                    suffixes: collected,
                },
                span,
            )
        })
        .or(suffix.repeated().at_least(1).map(|suffixes| {
            let mut span = suffixes[0].1.clone();
            let mut collected = Vec::new();
            for (s, range) in suffixes {
                span.end = range.end;
                collected.push(s);
            }
            (
                SimpleSelectorSequence {
                    type_selector: None,
                    suffixes: collected,
                },
                span,
            )
        }));

    let explicit_combinator = choice((
        token(Token::Greater).to(Combinator::Child),
        token(Token::Plus).to(Combinator::AdjacentSibling),
        token(Token::Tilde).to(Combinator::GeneralSibling),
    ));
    let combinator = ws
        .clone()
        .or_not()
        .ignore_then(explicit_combinator)
        .then_ignore(ws.clone().or_not())
        .or(ws.clone().to(Combinator::Descendant));

    let selector = sequence
        .clone()
        .then(combinator.then(sequence).repeated())
        .map(|((first, first_span), rest)| {
            let mut parts = vec![SelectorPart::Sequence(first)];
            let mut span = first_span;
            for (comb, (seq, seq_span)) in rest {
                parts.push(SelectorPart::Combinator(comb));
                parts.push(SelectorPart::Sequence(seq));
                span.end = seq_span.end;
            }
            Selector { parts, span }
        });

    let separator = ws
        .clone()
        .or_not()
        .ignore_then(token(Token::Comma))
        .then_ignore(ws.clone().or_not())
        .ignored();

    ws.clone()
        .or_not()
        .ignore_then(selector.separated_by(separator).at_least(1))
        .then_ignore(ws.or_not())
        .then_ignore(end())
        .map(|selectors| SelectorGroup { selectors })
}
