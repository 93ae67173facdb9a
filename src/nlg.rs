//! Phrase-structure representation and surface realization
//!
//! This module holds the intermediate representation between the tree walk
//! and the final English sentence. The walkers and composers build [`Phrase`]
//! values describing the *meaning* of a subtree; the realizer linearizes a
//! completed phrase into text, applying number agreement and conjunction
//! wording. The phrase shapes are deliberately narrow: no tense, no case
//! beyond singular/plural, because that is all a selector explanation needs.

pub mod phrase;
pub mod realizer;

pub use phrase::{Clause, CoordinatedPhrase, NounPhrase, Number, Phrase, PrepositionPhrase, VerbPhrase};
pub use realizer::realize;
