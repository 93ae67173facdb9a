//! Builds phrase structures for parsed CSS selectors
//!
//! A selector chain is explained with a left fold: each sequence builds a
//! noun phrase and takes the accumulated phrase as its complement, and each
//! combinator rewrites the accumulator into the relation it expresses. The
//! later sequence is always the head ("paragraphs from containers", never
//! "containers from paragraphs").

use crate::compose::{relate, Relation};
use crate::css::ast::{
    Combinator, Selector, SelectorPart, SelectorSuffix, SimpleSelectorSequence, TypeSelector,
};
use crate::nlg::phrase::{Clause, NounPhrase, Number, Phrase, PrepositionPhrase, VerbPhrase};
use crate::vocab;

/// Explain one selector chain. Returns `None` for a chain with no
/// explainable content (an empty parts list cannot come out of the parser,
/// but the walk does not assume that).
pub fn explain_selector(selector: &Selector) -> Option<Phrase> {
    let mut accumulated: Option<Phrase> = None;
    for part in &selector.parts {
        match part {
            SelectorPart::Sequence(sequence) => {
                let mut np = sequence_phrase(sequence);
                if let Some(previous) = accumulated.take() {
                    np.complements.push(previous);
                }
                accumulated = Some(np.into());
            }
            SelectorPart::Combinator(combinator) => {
                accumulated = accumulated.map(|acc| relate(combinator_relation(combinator), acc));
            }
        }
    }
    accumulated
}

fn combinator_relation(combinator: &Combinator) -> Relation {
    match combinator {
        Combinator::Descendant => Relation::Within,
        Combinator::Child => Relation::ChildOf,
        Combinator::GeneralSibling => Relation::SiblingAfter { immediate: false },
        Combinator::AdjacentSibling => Relation::SiblingAfter { immediate: true },
    }
}

/// Build the noun phrase for one simple selector sequence
fn sequence_phrase(sequence: &SimpleSelectorSequence) -> NounPhrase {
    let mut np = match &sequence.type_selector {
        Some(TypeSelector::Tag(tag)) => match vocab::type_noun(tag) {
            Some(noun) => NounPhrase::plural(noun),
            // Unknown tag: fall back to the quoted literal as an adjective
            // on a generic head rather than dropping the selector
            None => NounPhrase::plural("node").premodifier(&vocab::quoted(tag)),
        },
        Some(TypeSelector::Universal) => NounPhrase::plural("element").premodifier("all"),
        None => NounPhrase::plural("element"),
    };
    for suffix in &sequence.suffixes {
        np.complements.push(suffix_phrase(suffix));
    }
    np
}

fn suffix_phrase(suffix: &SelectorSuffix) -> Phrase {
    match suffix {
        SelectorSuffix::Class(class) => PrepositionPhrase::new(
            "of",
            NounPhrase::singular("class")
                .complement(Phrase::Word(vocab::quoted(class)))
                .into(),
        )
        .into(),
        SelectorSuffix::Id(id) => PrepositionPhrase::new(
            "with",
            NounPhrase::singular("ID")
                .complement(Phrase::Word(vocab::quoted(id)))
                .into(),
        )
        .into(),
        SelectorSuffix::Attribute { name, op, value } => {
            let mut attribute = NounPhrase::singular("attribute")
                .premodifier("a")
                .premodifier(&vocab::quoted(name));
            if let (Some(op), Some(value)) = (op, value) {
                attribute.complements.push(
                    Clause::new(VerbPhrase::new(op.verb()), Number::Singular)
                        .object(Phrase::Word(vocab::quoted(value)))
                        .into(),
                );
            }
            PrepositionPhrase::new("with", attribute.into()).into()
        }
        SelectorSuffix::Pseudo { name, arg } => pseudo_phrase(name, arg.as_deref()),
    }
}

/// Fixed wordings for the common pseudo-classes; anything else names the
/// pseudo-class literally so nothing is silently dropped
fn pseudo_phrase(name: &str, arg: Option<&str>) -> Phrase {
    let wording = match (name, arg) {
        ("hover", _) => "that are being hovered over".to_string(),
        ("first-child", _) => "that are the first child of their parent".to_string(),
        ("last-child", _) => "that are the last child of their parent".to_string(),
        ("nth-child", Some(n)) => format!("that are child number {} of their parent", n),
        (name, Some(arg)) => format!("that match the ':{}({})' pseudo-class", name, arg),
        (name, None) => format!("that match the ':{}' pseudo-class", name),
    };
    Phrase::Word(wording)
}
