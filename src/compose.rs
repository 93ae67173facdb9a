//! Structural relations between selector parts
//!
//! CSS combinators and XPath axes both describe how one set of matched
//! nodes relates to the set matched so far. Both explainers reduce their
//! connective to a [`Relation`] and fold it against the accumulated phrase:
//! the earlier phrase becomes a restriction on the later one ("rows from
//! tables", never "tables from rows"). This is what lets a chain of N
//! sequences produce one right-nested sentence instead of N independent
//! sentences.

use crate::nlg::phrase::{
    Clause, CoordinatedPhrase, NounPhrase, Number, Phrase, PrepositionPhrase, VerbPhrase,
};

/// The structural relation a combinator or axis expresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Descendant combinator; realized as a bare "from" restriction
    Within,
    ChildOf,
    DescendantOf,
    AncestorOf,
    ParentOf,
    AttributeOf,
    NamespaceOf,
    /// The node itself (self axis)
    SelfNode,
    /// self-or-descendant: the node and its descendants
    SelfAndDescendants,
    SelfAndAncestors,
    /// Anywhere after/before in document order (following/preceding axes)
    After,
    Before,
    /// Sibling appearing after; `immediate` distinguishes `+` from `~`
    SiblingAfter { immediate: bool },
    SiblingBefore,
}

/// Fold a relation against the accumulated phrase, producing the phrase
/// that the next sequence in the chain will take as its complement
pub fn relate(relation: Relation, accumulated: Phrase) -> Phrase {
    match relation {
        Relation::Within => PrepositionPhrase::new("from", accumulated).into(),
        Relation::ChildOf => membership_clause("child", Number::Plural, accumulated).into(),
        Relation::DescendantOf => {
            membership_clause("descendant", Number::Plural, accumulated).into()
        }
        Relation::AncestorOf => membership_clause("ancestor", Number::Plural, accumulated).into(),
        Relation::ParentOf => Clause::new(VerbPhrase::new("be"), Number::Plural)
            .object(
                NounPhrase::singular("parent")
                    .premodifier("the")
                    .complement(PrepositionPhrase::new("of", accumulated).into())
                    .into(),
            )
            .into(),
        Relation::AttributeOf => {
            membership_clause("attribute", Number::Plural, accumulated).into()
        }
        Relation::NamespaceOf => Clause::new(VerbPhrase::new("be"), Number::Plural)
            .object(
                NounPhrase::plural("node")
                    .complement(
                        PrepositionPhrase::new(
                            "in",
                            NounPhrase::singular("namespace")
                                .premodifier("the")
                                .complement(PrepositionPhrase::new("of", accumulated).into())
                                .into(),
                        )
                        .into(),
                    )
                    .into(),
            )
            .into(),
        Relation::SelfNode => Clause::new(VerbPhrase::new("be"), Number::Plural)
            .object(accumulated)
            .into(),
        Relation::SelfAndDescendants => CoordinatedPhrase::new("and")
            .coordinate(
                Clause::new(VerbPhrase::new("be"), Number::Plural)
                    .object(accumulated.clone())
                    .into(),
            )
            .coordinate(membership_clause("descendant", Number::Plural, accumulated).into())
            .into(),
        Relation::SelfAndAncestors => CoordinatedPhrase::new("and")
            .coordinate(
                Clause::new(VerbPhrase::new("be"), Number::Plural)
                    .object(accumulated.clone())
                    .into(),
            )
            .coordinate(membership_clause("ancestor", Number::Plural, accumulated).into())
            .into(),
        Relation::After => appearance_clause("after", accumulated, false, false).into(),
        Relation::Before => appearance_clause("before", accumulated, false, false).into(),
        Relation::SiblingAfter { immediate } => CoordinatedPhrase::new("and")
            .coordinate(
                membership_clause("sibling", Number::Plural, accumulated.clone()).into(),
            )
            .coordinate(appearance_clause("after", accumulated, !immediate, immediate).into())
            .into(),
        Relation::SiblingBefore => CoordinatedPhrase::new("and")
            .coordinate(
                membership_clause("sibling", Number::Plural, accumulated.clone()).into(),
            )
            .coordinate(appearance_clause("before", accumulated, true, false).into())
            .into(),
    }
}

/// "are <noun>s of <accumulated>"
fn membership_clause(noun: &str, number: Number, accumulated: Phrase) -> Clause {
    Clause::new(VerbPhrase::new("be"), Number::Plural).object(
        NounPhrase::new(noun, number)
            .complement(PrepositionPhrase::new("of", accumulated).into())
            .into(),
    )
}

/// "eventually appear after <accumulated>" / "appear right after <accumulated>"
fn appearance_clause(
    preposition: &str,
    accumulated: Phrase,
    eventually: bool,
    right: bool,
) -> Clause {
    let mut pp = PrepositionPhrase::new(preposition, accumulated);
    if right {
        pp = pp.premodifier("right");
    }
    let mut verb = VerbPhrase::new("appear");
    if eventually {
        verb = verb.premodifier("eventually");
    }
    Clause::new(verb.complement(pp.into()), Number::Plural)
}
