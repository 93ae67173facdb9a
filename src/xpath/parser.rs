//! Hand-written recursive-descent parser for XPath expressions
//!
//! One function per precedence level, descending or → and → equality →
//! relational → additive → multiplicative → unary → path. Because a
//! production with a single operand returns that operand's node directly,
//! unary precedence chains never show up in the AST and the walker never
//! sees them.
//!
//! The entry point splits the input at top-level `|` so each union
//! alternative becomes its own spanned expression; explanations are keyed
//! per alternative.

use std::fmt;
use std::ops::Range;

use crate::xpath::ast::{
    AdditiveOp, Axis, EqualityOp, Expr, LocationPath, MultiplicativeOp, NodeTest, NodeType,
    RelationalOp, Spanned, Step,
};
use crate::xpath::lexer::{self, LexError};
use crate::xpath::tokens::Token;

/// Errors that can occur while parsing an XPath expression
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

/// Parse an XPath input into its top-level union alternatives, each with
/// the byte span of the text it matched
pub fn parse(source: &str) -> Result<Vec<Spanned<Expr>>, ParseError> {
    let tokens = lexer::tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::Syntax {
            message: "empty expression".to_string(),
        });
    }

    let mut alternatives = Vec::new();
    for group in split_top_level_union(&tokens)? {
        let span = group[0].1.start..group[group.len() - 1].1.end;
        let mut parser = Parser {
            tokens: group,
            pos: 0,
        };
        let expr = parser.parse_expr()?;
        parser.expect_end()?;
        alternatives.push(Spanned { node: expr, span });
    }
    Ok(alternatives)
}

/// Split the token stream at `|` tokens outside parentheses and brackets
fn split_top_level_union(
    tokens: &[(Token, Range<usize>)],
) -> Result<Vec<&[(Token, Range<usize>)]>, ParseError> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (index, (token, range)) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen | Token::LBracket => depth += 1,
            Token::CloseParen | Token::RBracket => depth = depth.saturating_sub(1),
            Token::Pipe if depth == 0 => {
                if start == index {
                    return Err(ParseError::Syntax {
                        message: format!("empty union arm at byte {}", range.start),
                    });
                }
                groups.push(&tokens[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    if start == tokens.len() {
        return Err(ParseError::Syntax {
            message: "empty union arm at end of input".to_string(),
        });
    }
    groups.push(&tokens[start..]);
    Ok(groups)
}

struct Parser<'t> {
    tokens: &'t [(Token, Range<usize>)],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn peek_second(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<(Token, Range<usize>)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token, what: &str) -> Result<(), ParseError> {
        if self.eat(&token) {
            Ok(())
        } else {
            Err(self.error_here(&format!("expected {}", what)))
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.tokens.get(self.pos) {
            None => Ok(()),
            Some((token, range)) => Err(ParseError::Syntax {
                message: format!("unexpected {:?} at byte {}", token, range.start),
            }),
        }
    }

    fn error_here(&self, message: &str) -> ParseError {
        let detail = match self.tokens.get(self.pos) {
            Some((token, range)) => {
                format!("{}, found {:?} at byte {}", message, token, range.start)
            }
            None => format!("{} at end of input", message),
        };
        ParseError::Syntax { message: detail }
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(Token::Name(name)) if name == keyword)
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.at_keyword("or") {
            self.pos += 1;
            let right = self.parse_and()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while self.at_keyword("and") {
            self.pos += 1;
            let right = self.parse_equality()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.peek() {
                Some(Token::Equals) => EqualityOp::Eq,
                Some(Token::NotEquals) => EqualityOp::Ne,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_relational()?;
            left = Expr::Equality(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek() {
                Some(Token::Less) => RelationalOp::Lt,
                Some(Token::Greater) => RelationalOp::Gt,
                Some(Token::LessEqual) => RelationalOp::Le,
                Some(Token::GreaterEqual) => RelationalOp::Ge,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_additive()?;
            left = Expr::Relational(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => AdditiveOp::Add,
                Some(Token::Minus) => AdditiveOp::Subtract,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_multiplicative()?;
            left = Expr::Additive(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            // A name or `*` after a complete operand can only be an operator
            let op = if self.peek() == Some(&Token::Star) {
                MultiplicativeOp::Multiply
            } else if self.at_keyword("div") {
                MultiplicativeOp::Div
            } else if self.at_keyword("mod") {
                MultiplicativeOp::Mod
            } else {
                break;
            };
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expr::Multiplicative(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Minus) {
            let operand = self.parse_unary()?;
            return Ok(Expr::Negative(Box::new(operand)));
        }
        self.parse_path_expr()
    }

    /// Nested unions (inside parentheses or predicates) are handled here;
    /// top-level unions were already split by the entry point
    fn parse_path_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_path_or_primary()?;
        while self.eat(&Token::Pipe) {
            let right = self.parse_path_or_primary()?;
            left = Expr::Union(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_path_or_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(
                Token::Slash
                | Token::DoubleSlash
                | Token::At
                | Token::SelfStep
                | Token::ParentStep
                | Token::Star,
            ) => self.parse_location_path(),
            Some(Token::Name(name)) => {
                if self.peek_second() == Some(&Token::OpenParen)
                    && NodeType::from_keyword(name).is_none()
                {
                    self.parse_function_call()
                } else {
                    self.parse_location_path()
                }
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_location_path(&mut self) -> Result<Expr, ParseError> {
        let mut steps = Vec::new();
        let absolute = match self.peek() {
            Some(Token::Slash) => {
                self.pos += 1;
                true
            }
            Some(Token::DoubleSlash) => {
                self.pos += 1;
                steps.push(Step::descendant_or_self());
                true
            }
            _ => false,
        };

        // A lone `/` selects the document root
        if absolute && steps.is_empty() && !self.starts_step() {
            return Ok(Expr::Path(LocationPath { absolute, steps }));
        }

        loop {
            steps.push(self.parse_step()?);
            if self.eat(&Token::Slash) {
                continue;
            }
            if self.eat(&Token::DoubleSlash) {
                steps.push(Step::descendant_or_self());
                continue;
            }
            break;
        }
        Ok(Expr::Path(LocationPath { absolute, steps }))
    }

    fn starts_step(&self) -> bool {
        matches!(
            self.peek(),
            Some(
                Token::At | Token::SelfStep | Token::ParentStep | Token::Star | Token::Name(_)
            )
        )
    }

    fn parse_step(&mut self) -> Result<Step, ParseError> {
        if self.eat(&Token::SelfStep) {
            return Ok(Step {
                axis: Axis::SelfAxis,
                node_test: NodeTest::NodeType(NodeType::Node),
                predicates: self.parse_predicates()?,
            });
        }
        if self.eat(&Token::ParentStep) {
            return Ok(Step {
                axis: Axis::Parent,
                node_test: NodeTest::NodeType(NodeType::Node),
                predicates: self.parse_predicates()?,
            });
        }

        let axis = if self.eat(&Token::At) {
            Axis::Attribute
        } else if self.peek_second() == Some(&Token::AxisMarker) {
            match self.advance() {
                Some((Token::Name(keyword), range)) => {
                    self.pos += 1; // the axis marker
                    Axis::from_keyword(&keyword).ok_or_else(|| ParseError::Syntax {
                        message: format!(
                            "unknown axis '{}' at byte {}",
                            keyword, range.start
                        ),
                    })?
                }
                _ => return Err(self.error_here("expected axis name")),
            }
        } else {
            // No axis specifier means the child axis
            Axis::Child
        };

        let node_test = self.parse_node_test()?;
        let predicates = self.parse_predicates()?;
        Ok(Step {
            axis,
            node_test,
            predicates,
        })
    }

    fn parse_node_test(&mut self) -> Result<NodeTest, ParseError> {
        if self.eat(&Token::Star) {
            return Ok(NodeTest::Wildcard);
        }
        match self.advance() {
            Some((Token::Name(name), _)) => {
                if self.peek() == Some(&Token::OpenParen) {
                    match NodeType::from_keyword(&name) {
                        Some(node_type) => {
                            self.pos += 1;
                            // processing-instruction() takes an optional target
                            if matches!(self.peek(), Some(Token::Literal(_))) {
                                self.pos += 1;
                            }
                            self.expect(Token::CloseParen, "')' after node type test")?;
                            Ok(NodeTest::NodeType(node_type))
                        }
                        None => Err(ParseError::Syntax {
                            message: format!("'{}' is not a node type", name),
                        }),
                    }
                } else {
                    Ok(NodeTest::Name(name))
                }
            }
            _ => Err(self.error_here("expected node test")),
        }
    }

    fn parse_predicates(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut predicates = Vec::new();
        while self.eat(&Token::LBracket) {
            let expr = self.parse_expr()?;
            self.expect(Token::RBracket, "']' after predicate")?;
            predicates.push(expr);
        }
        Ok(predicates)
    }

    fn parse_function_call(&mut self) -> Result<Expr, ParseError> {
        let name = match self.advance() {
            Some((Token::Name(name), _)) => name,
            _ => return Err(self.error_here("expected function name")),
        };
        self.expect(Token::OpenParen, "'(' after function name")?;
        let mut args = Vec::new();
        if self.peek() != Some(&Token::CloseParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect(Token::CloseParen, "')' after function arguments")?;
        Ok(Expr::FunctionCall { name, args })
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.advance() {
            Some((Token::OpenParen, _)) => {
                let expr = self.parse_expr()?;
                self.expect(Token::CloseParen, "closing ')'")?;
                Ok(expr)
            }
            Some((Token::Literal(value), _)) => Ok(Expr::Literal(value)),
            Some((Token::Number(value), _)) => Ok(Expr::Number(value)),
            Some((Token::Dollar, _)) => match self.advance() {
                Some((Token::Name(name), _)) => Ok(Expr::VariableRef(name)),
                _ => Err(self.error_here("expected variable name after '$'")),
            },
            Some((token, range)) => Err(ParseError::Syntax {
                message: format!("unexpected {:?} at byte {}", token, range.start),
            }),
            None => Err(ParseError::Syntax {
                message: "unexpected end of input".to_string(),
            }),
        }
    }
}
