//! Builds phrase structures for parsed XPath expressions
//!
//! Location paths fold left like CSS selector chains: each step builds a
//! noun phrase for its node test and takes the accumulated phrase as its
//! complement, with the axis deciding the linking relation. Absolute paths
//! seed the accumulator with "the root node", relative paths with "the
//! current node".
//!
//! Arithmetic subexpressions yield `None`: they add nothing a novice needs
//! in the sentence, and a missing side of a coordination collapses to the
//! other side rather than failing the walk.

use crate::compose::{relate, Relation};
use crate::nlg::phrase::{CoordinatedPhrase, NounPhrase, Phrase, PrepositionPhrase};
use crate::vocab;
use crate::xpath::ast::{Axis, Expr, LocationPath, NodeTest, NodeType, Step};

/// Explain one expression. `None` means the expression contributes nothing
/// to the sentence, which is not an error.
pub fn explain_expr(expr: &Expr) -> Option<Phrase> {
    match expr {
        Expr::Or(left, right) => coordinate("or", explain_expr(left), explain_expr(right)),
        Expr::And(left, right) => coordinate("and", explain_expr(left), explain_expr(right)),
        Expr::Equality(op, left, right) => {
            coordinate(op.gloss(), explain_expr(left), explain_expr(right))
        }
        Expr::Relational(op, left, right) => {
            coordinate(op.gloss(), explain_expr(left), explain_expr(right))
        }
        Expr::Additive(..) | Expr::Multiplicative(..) | Expr::Negative(_) => None,
        Expr::Union(left, right) => coordinate("or", explain_expr(left), explain_expr(right)),
        Expr::Path(path) => Some(explain_path(path)),
        Expr::Literal(value) => Some(Phrase::Word(vocab::quoted(value))),
        Expr::Number(value) => Some(Phrase::Word(value.clone())),
        Expr::FunctionCall { name, .. } => Some(function_phrase(name)),
        Expr::VariableRef(name) => Some(
            NounPhrase::singular("variable")
                .premodifier("the")
                .complement(Phrase::Word(vocab::quoted(&format!("${}", name))))
                .into(),
        ),
    }
}

/// Explain a location path by folding its steps against the context node
pub fn explain_path(path: &LocationPath) -> Phrase {
    let mut accumulated = context_phrase(path.absolute);
    // A `//` abbreviation step is deferred so "//div" reads "containers
    // that are descendants of ..." instead of naming the intermediate
    // descendant-or-self step
    let mut pending_descendants = false;
    for step in &path.steps {
        if is_descendant_abbreviation(step) {
            if pending_descendants {
                accumulated = all_descendants(accumulated);
            }
            pending_descendants = true;
            continue;
        }
        let descendants = if step.axis == Axis::Child {
            std::mem::take(&mut pending_descendants)
        } else {
            if pending_descendants {
                accumulated = all_descendants(accumulated);
                pending_descendants = false;
            }
            false
        };
        accumulated = step_phrase(step, accumulated, descendants);
    }
    if pending_descendants {
        accumulated = all_descendants(accumulated);
    }
    accumulated
}

fn is_descendant_abbreviation(step: &Step) -> bool {
    step.axis == Axis::DescendantOrSelf
        && step.node_test == NodeTest::NodeType(NodeType::Node)
        && step.predicates.is_empty()
}

fn step_phrase(step: &Step, accumulated: Phrase, descendants: bool) -> Phrase {
    // "." leaves the accumulated phrase untouched
    if step.axis == Axis::SelfAxis
        && step.node_test == NodeTest::NodeType(NodeType::Node)
        && step.predicates.is_empty()
    {
        return accumulated;
    }
    let mut np = match step.axis {
        Axis::Attribute => attribute_phrase(&step.node_test, accumulated),
        Axis::Parent if step.node_test == NodeTest::NodeType(NodeType::Node) => {
            NounPhrase::singular("parent")
                .premodifier("the")
                .complement(PrepositionPhrase::new("of", accumulated).into())
        }
        axis => {
            let relation = if descendants {
                Relation::DescendantOf
            } else {
                axis_relation(axis)
            };
            node_test_phrase(&step.node_test).complement(relate(relation, accumulated))
        }
    };
    for predicate in &step.predicates {
        if let Some(phrase) = explain_expr(predicate) {
            np.complements
                .push(PrepositionPhrase::new("where", phrase).into());
        }
    }
    np.into()
}

fn axis_relation(axis: Axis) -> Relation {
    match axis {
        Axis::Child => Relation::ChildOf,
        Axis::Ancestor => Relation::AncestorOf,
        Axis::AncestorOrSelf => Relation::SelfAndAncestors,
        Axis::Attribute => Relation::AttributeOf,
        Axis::Descendant => Relation::DescendantOf,
        Axis::DescendantOrSelf => Relation::SelfAndDescendants,
        Axis::Following => Relation::After,
        Axis::FollowingSibling => Relation::SiblingAfter { immediate: false },
        Axis::Namespace => Relation::NamespaceOf,
        Axis::Parent => Relation::ParentOf,
        Axis::Preceding => Relation::Before,
        Axis::PrecedingSibling => Relation::SiblingBefore,
        Axis::SelfAxis => Relation::SelfNode,
    }
}

/// Attribute steps name the attribute directly: "'href' attributes of ..."
fn attribute_phrase(node_test: &NodeTest, accumulated: Phrase) -> NounPhrase {
    let np = match node_test {
        NodeTest::Name(name) => {
            NounPhrase::plural("attribute").premodifier(&vocab::quoted(name))
        }
        _ => NounPhrase::plural("attribute").premodifier("all"),
    };
    np.complement(PrepositionPhrase::new("of", accumulated).into())
}

fn node_test_phrase(node_test: &NodeTest) -> NounPhrase {
    match node_test {
        NodeTest::Name(name) => match vocab::type_noun(name) {
            Some(noun) => NounPhrase::plural(noun),
            None => NounPhrase::plural("node").premodifier(&vocab::quoted(name)),
        },
        NodeTest::Wildcard | NodeTest::NodeType(NodeType::Node) => {
            NounPhrase::plural("node").premodifier("all")
        }
        NodeTest::NodeType(NodeType::Text) => NounPhrase::plural("node").premodifier("text"),
        NodeTest::NodeType(NodeType::Comment) => {
            NounPhrase::plural("node").premodifier("comment")
        }
        NodeTest::NodeType(NodeType::ProcessingInstruction) => {
            NounPhrase::plural("node").premodifier("processing instruction")
        }
    }
}

fn context_phrase(absolute: bool) -> Phrase {
    let adjective = if absolute { "root" } else { "current" };
    NounPhrase::singular("node")
        .premodifier("the")
        .premodifier(adjective)
        .into()
}

fn all_descendants(accumulated: Phrase) -> Phrase {
    NounPhrase::plural("node")
        .premodifier("all")
        .complement(relate(Relation::DescendantOf, accumulated))
        .into()
}

fn coordinate(conjunction: &str, left: Option<Phrase>, right: Option<Phrase>) -> Option<Phrase> {
    match (left, right) {
        (Some(left), Some(right)) => Some(
            CoordinatedPhrase::new(conjunction)
                .coordinate(left)
                .coordinate(right)
                .into(),
        ),
        (Some(phrase), None) | (None, Some(phrase)) => Some(phrase),
        (None, None) => None,
    }
}

fn function_phrase(name: &str) -> Phrase {
    NounPhrase::singular("value")
        .premodifier("the")
        .complement(
            PrepositionPhrase::new(
                "of",
                NounPhrase::singular("function")
                    .premodifier("the")
                    .premodifier(&vocab::quoted(name))
                    .into(),
            )
            .into(),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlg::realize;
    use crate::xpath::parser::parse;

    fn explained(source: &str) -> String {
        let alternatives = parse(source).expect("should parse");
        let phrase = explain_expr(&alternatives[0].node).expect("should produce a phrase");
        realize(&phrase)
    }

    fn no_phrase(source: &str) -> bool {
        let alternatives = parse(source).expect("should parse");
        explain_expr(&alternatives[0].node).is_none()
    }

    #[test]
    fn test_double_slash_reads_as_descendants() {
        assert_eq!(
            explained("//div"),
            "containers that are descendants of the root node"
        );
    }

    #[test]
    fn test_relative_child_chain() {
        assert_eq!(
            explained("div/p"),
            "paragraphs that are children of containers that are children of the current node"
        );
    }

    #[test]
    fn test_explicit_axis() {
        assert_eq!(
            explained("ancestor::table"),
            "tables that are ancestors of the current node"
        );
    }

    #[test]
    fn test_attribute_step_names_the_attribute() {
        assert_eq!(
            explained("//a/@href"),
            "'href' attributes of links that are descendants of the root node"
        );
    }

    #[test]
    fn test_attribute_directly_after_double_slash() {
        assert_eq!(
            explained("//@href"),
            "'href' attributes of all nodes that are descendants of the root node"
        );
    }

    #[test]
    fn test_parent_abbreviation() {
        assert_eq!(explained(".."), "the parent of the current node");
    }

    #[test]
    fn test_self_abbreviation_is_transparent() {
        assert_eq!(explained("."), "the current node");
    }

    #[test]
    fn test_wildcard_step() {
        assert_eq!(
            explained("//*"),
            "all nodes that are descendants of the root node"
        );
    }

    #[test]
    fn test_text_node_test() {
        assert_eq!(
            explained("//p/text()"),
            "text nodes that are children of paragraphs that are descendants of the root node"
        );
    }

    #[test]
    fn test_equality_predicate() {
        assert_eq!(
            explained("//div[@class='header']"),
            "containers that are descendants of the root node \
             where 'class' attributes of the current node equals 'header'"
        );
    }

    #[test]
    fn test_relational_predicate_with_function_call() {
        assert_eq!(
            explained("//tr[position() < 3]"),
            "rows that are descendants of the root node \
             where the value of the 'position' function less than 3"
        );
    }

    #[test]
    fn test_or_predicate() {
        assert_eq!(
            explained("//div[@a or @b]"),
            "containers that are descendants of the root node \
             where 'a' attributes of the current node or 'b' attributes of the current node"
        );
    }

    #[test]
    fn test_unexplainable_coordination_side_collapses() {
        assert_eq!(
            explained("//div[a + b or @x]"),
            "containers that are descendants of the root node \
             where 'x' attributes of the current node"
        );
    }

    #[test]
    fn test_arithmetic_yields_no_phrase() {
        assert!(no_phrase("1 + 2"));
        assert!(no_phrase("6 * 7"));
        assert!(no_phrase("-1"));
    }

    #[test]
    fn test_function_call() {
        assert_eq!(
            explained("contains(a, 'x')"),
            "the value of the 'contains' function"
        );
    }

    #[test]
    fn test_variable_reference() {
        assert_eq!(explained("$foo"), "the variable '$foo'");
    }
}
