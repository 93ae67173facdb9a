//! Typed phrase-structure values
//!
//! Every phrase has exactly one lexical head. A noun phrase's `number`
//! carries singular/plural agreement; a clause carries its own number, which
//! drives verb inflection when the clause is realized. Insertion order of
//! coordinates and modifiers is linguistic order and is significant.

/// Grammatical number for noun and verb agreement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

/// The intermediate representation produced by the explanation walk
#[derive(Debug, Clone, PartialEq)]
pub enum Phrase {
    Noun(NounPhrase),
    Preposition(PrepositionPhrase),
    Clause(Clause),
    Coordinated(CoordinatedPhrase),
    /// A literal word or fixed wording, realized verbatim
    Word(String),
}

/// A phrase built around a noun head, e.g. "paragraphs from containers"
#[derive(Debug, Clone, PartialEq)]
pub struct NounPhrase {
    pub head: String,
    pub number: Number,
    pub premodifiers: Vec<Phrase>,
    /// Ordered complements following the head. A clause complement is
    /// rendered as a relative clause ("paragraphs *that are children of*...").
    pub complements: Vec<Phrase>,
}

impl NounPhrase {
    pub fn new(head: &str, number: Number) -> Self {
        NounPhrase {
            head: head.to_string(),
            number,
            premodifiers: Vec::new(),
            complements: Vec::new(),
        }
    }

    /// A plural noun phrase, the default for sets of matched nodes
    pub fn plural(head: &str) -> Self {
        NounPhrase::new(head, Number::Plural)
    }

    pub fn singular(head: &str) -> Self {
        NounPhrase::new(head, Number::Singular)
    }

    pub fn premodifier(mut self, word: &str) -> Self {
        self.premodifiers.push(Phrase::Word(word.to_string()));
        self
    }

    pub fn complement(mut self, complement: Phrase) -> Self {
        self.complements.push(complement);
        self
    }
}

impl From<NounPhrase> for Phrase {
    fn from(np: NounPhrase) -> Self {
        Phrase::Noun(np)
    }
}

/// A verb with premodifiers and an optional complement, e.g. "eventually
/// appear after containers". Verbs only occur inside a [`Clause`], which
/// supplies the number for agreement.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbPhrase {
    pub verb: String,
    pub premodifiers: Vec<String>,
    pub complement: Option<Box<Phrase>>,
}

impl VerbPhrase {
    pub fn new(verb: &str) -> Self {
        VerbPhrase {
            verb: verb.to_string(),
            premodifiers: Vec::new(),
            complement: None,
        }
    }

    pub fn premodifier(mut self, word: &str) -> Self {
        self.premodifiers.push(word.to_string());
        self
    }

    pub fn complement(mut self, complement: Phrase) -> Self {
        self.complement = Some(Box::new(complement));
        self
    }
}

/// A preposition and its complement, e.g. "from containers"
#[derive(Debug, Clone, PartialEq)]
pub struct PrepositionPhrase {
    pub preposition: String,
    /// Premodifiers on the preposition itself ("right" in "right after")
    pub premodifiers: Vec<String>,
    pub complement: Box<Phrase>,
}

impl PrepositionPhrase {
    pub fn new(preposition: &str, complement: Phrase) -> Self {
        PrepositionPhrase {
            preposition: preposition.to_string(),
            premodifiers: Vec::new(),
            complement: Box::new(complement),
        }
    }

    pub fn premodifier(mut self, word: &str) -> Self {
        self.premodifiers.push(word.to_string());
        self
    }
}

impl From<PrepositionPhrase> for Phrase {
    fn from(pp: PrepositionPhrase) -> Self {
        Phrase::Preposition(pp)
    }
}

/// A verb plus optional object, realized as a relative clause when it
/// modifies a noun ("that are children of containers")
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub verb: VerbPhrase,
    pub object: Option<Box<Phrase>>,
    pub number: Number,
}

impl Clause {
    pub fn new(verb: VerbPhrase, number: Number) -> Self {
        Clause {
            verb,
            object: None,
            number,
        }
    }

    pub fn object(mut self, object: Phrase) -> Self {
        self.object = Some(Box::new(object));
        self
    }
}

impl From<Clause> for Phrase {
    fn from(clause: Clause) -> Self {
        Phrase::Clause(clause)
    }
}

/// Two or more phrases joined by a conjunction; the conjunction may be an
/// operator gloss ("equals", "less than") as well as "and"/"or"
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatedPhrase {
    pub conjunction: String,
    pub coordinates: Vec<Phrase>,
}

impl CoordinatedPhrase {
    pub fn new(conjunction: &str) -> Self {
        CoordinatedPhrase {
            conjunction: conjunction.to_string(),
            coordinates: Vec::new(),
        }
    }

    pub fn coordinate(mut self, phrase: Phrase) -> Self {
        self.coordinates.push(phrase);
        self
    }
}

impl From<CoordinatedPhrase> for Phrase {
    fn from(cp: CoordinatedPhrase) -> Self {
        Phrase::Coordinated(cp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_phrase_builder() {
        let np = NounPhrase::plural("node").premodifier("all");
        assert_eq!(np.head, "node");
        assert_eq!(np.number, Number::Plural);
        assert_eq!(np.premodifiers, vec![Phrase::Word("all".to_string())]);
        assert!(np.complements.is_empty());
    }

    #[test]
    fn test_coordinated_phrase_preserves_order() {
        let cp = CoordinatedPhrase::new("or")
            .coordinate(Phrase::Word("a".to_string()))
            .coordinate(Phrase::Word("b".to_string()));
        assert_eq!(
            cp.coordinates,
            vec![
                Phrase::Word("a".to_string()),
                Phrase::Word("b".to_string())
            ]
        );
    }

    #[test]
    fn test_verb_phrase_premodifier_order() {
        let vp = VerbPhrase::new("appear").premodifier("eventually");
        assert_eq!(vp.verb, "appear");
        assert_eq!(vp.premodifiers, vec!["eventually".to_string()]);
    }
}
