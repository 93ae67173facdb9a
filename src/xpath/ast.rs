//! Closed AST for XPath expressions and location paths
//!
//! One variant per grammar production the explainer handles. Operator
//! enums carry their English glosses so the walker's dispatch stays a
//! plain exhaustive match.

use std::ops::Range;

/// A node paired with the byte span of input text it matched
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Range<usize>,
}

/// An XPath expression, one variant per precedence level actually handled
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Or(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Equality(EqualityOp, Box<Expr>, Box<Expr>),
    Relational(RelationalOp, Box<Expr>, Box<Expr>),
    Additive(AdditiveOp, Box<Expr>, Box<Expr>),
    Multiplicative(MultiplicativeOp, Box<Expr>, Box<Expr>),
    Negative(Box<Expr>),
    Union(Box<Expr>, Box<Expr>),
    Path(LocationPath),
    Literal(String),
    Number(String),
    FunctionCall { name: String, args: Vec<Expr> },
    VariableRef(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualityOp {
    Eq,
    Ne,
}

impl EqualityOp {
    pub fn gloss(&self) -> &'static str {
        match self {
            EqualityOp::Eq => "equals",
            EqualityOp::Ne => "does not equal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOp {
    Lt,
    Gt,
    Le,
    Ge,
}

impl RelationalOp {
    pub fn gloss(&self) -> &'static str {
        match self {
            RelationalOp::Lt => "less than",
            RelationalOp::Gt => "greater than",
            RelationalOp::Le => "less than or equal to",
            RelationalOp::Ge => "greater than or equal to",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditiveOp {
    Add,
    Subtract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplicativeOp {
    Multiply,
    Div,
    Mod,
}

/// A location path: a chain of steps, rooted or relative
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPath {
    pub absolute: bool,
    pub steps: Vec<Step>,
}

/// One path step: axis, node test, and any predicates
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub axis: Axis,
    pub node_test: NodeTest,
    pub predicates: Vec<Expr>,
}

impl Step {
    /// The step form that `//` abbreviates
    pub fn descendant_or_self() -> Self {
        Step {
            axis: Axis::DescendantOrSelf,
            node_test: NodeTest::NodeType(NodeType::Node),
            predicates: Vec::new(),
        }
    }
}

/// The relation of a step's node test to the context node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Child,
    Ancestor,
    AncestorOrSelf,
    Attribute,
    Descendant,
    DescendantOrSelf,
    Following,
    FollowingSibling,
    Namespace,
    Parent,
    Preceding,
    PrecedingSibling,
    SelfAxis,
}

impl Axis {
    /// Map an axis keyword to its variant; the table is closed
    pub fn from_keyword(keyword: &str) -> Option<Axis> {
        match keyword {
            "child" => Some(Axis::Child),
            "ancestor" => Some(Axis::Ancestor),
            "ancestor-or-self" => Some(Axis::AncestorOrSelf),
            "attribute" => Some(Axis::Attribute),
            "descendant" => Some(Axis::Descendant),
            "descendant-or-self" => Some(Axis::DescendantOrSelf),
            "following" => Some(Axis::Following),
            "following-sibling" => Some(Axis::FollowingSibling),
            "namespace" => Some(Axis::Namespace),
            "parent" => Some(Axis::Parent),
            "preceding" => Some(Axis::Preceding),
            "preceding-sibling" => Some(Axis::PrecedingSibling),
            "self" => Some(Axis::SelfAxis),
            _ => None,
        }
    }
}

/// Either a named-tag test or a wildcard/type test
#[derive(Debug, Clone, PartialEq)]
pub enum NodeTest {
    Name(String),
    Wildcard,
    NodeType(NodeType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Node,
    Text,
    Comment,
    ProcessingInstruction,
}

impl NodeType {
    pub fn from_keyword(keyword: &str) -> Option<NodeType> {
        match keyword {
            "node" => Some(NodeType::Node),
            "text" => Some(NodeType::Text),
            "comment" => Some(NodeType::Comment),
            "processing-instruction" => Some(NodeType::ProcessingInstruction),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_keywords_round_trip() {
        assert_eq!(Axis::from_keyword("child"), Some(Axis::Child));
        assert_eq!(
            Axis::from_keyword("descendant-or-self"),
            Some(Axis::DescendantOrSelf)
        );
        assert_eq!(Axis::from_keyword("bogus"), None);
    }

    #[test]
    fn test_operator_glosses() {
        assert_eq!(EqualityOp::Eq.gloss(), "equals");
        assert_eq!(EqualityOp::Ne.gloss(), "does not equal");
        assert_eq!(RelationalOp::Le.gloss(), "less than or equal to");
    }
}
