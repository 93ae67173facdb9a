//! Rule-based surface realization
//!
//! Linearizes a completed [`Phrase`] into English text: premodifiers before
//! heads, heads before complements, singular/plural agreement on nouns and
//! verbs, and coordinations rendered as `A <conjunction> B <conjunction> C`.
//! Clause complements of noun phrases are introduced with "that", so a
//! clause built for a child combinator reads "paragraphs that are children
//! of containers".

use crate::nlg::phrase::{
    Clause, CoordinatedPhrase, NounPhrase, Number, Phrase, PrepositionPhrase, VerbPhrase,
};

/// Realize a phrase as English text
pub fn realize(phrase: &Phrase) -> String {
    match phrase {
        Phrase::Noun(np) => realize_noun(np),
        Phrase::Preposition(pp) => realize_preposition(pp),
        Phrase::Clause(clause) => realize_clause(clause),
        Phrase::Coordinated(cp) => realize_coordinated(cp),
        Phrase::Word(word) => word.clone(),
    }
}

fn realize_noun(np: &NounPhrase) -> String {
    let mut parts: Vec<String> = Vec::new();
    for premodifier in &np.premodifiers {
        parts.push(realize(premodifier));
    }
    parts.push(inflect_noun(&np.head, np.number));
    for complement in &np.complements {
        if needs_relative_marker(complement) {
            parts.push(format!("that {}", realize(complement)));
        } else {
            parts.push(realize(complement));
        }
    }
    parts.join(" ")
}

fn realize_verb(vp: &VerbPhrase, number: Number) -> String {
    let mut parts: Vec<String> = vp.premodifiers.clone();
    parts.push(inflect_verb(&vp.verb, number));
    if let Some(complement) = &vp.complement {
        parts.push(realize(complement));
    }
    parts.join(" ")
}

fn realize_preposition(pp: &PrepositionPhrase) -> String {
    let mut parts: Vec<String> = pp.premodifiers.clone();
    parts.push(pp.preposition.clone());
    parts.push(realize(&pp.complement));
    parts.join(" ")
}

fn realize_clause(clause: &Clause) -> String {
    let mut parts = vec![realize_verb(&clause.verb, clause.number)];
    if let Some(object) = &clause.object {
        parts.push(realize(object));
    }
    parts.join(" ")
}

fn realize_coordinated(cp: &CoordinatedPhrase) -> String {
    let realized: Vec<String> = cp.coordinates.iter().map(realize).collect();
    realized.join(&format!(" {} ", cp.conjunction))
}

/// A complement that reads as a predicate needs "that" in front of it when
/// it modifies a noun
fn needs_relative_marker(phrase: &Phrase) -> bool {
    match phrase {
        Phrase::Clause(_) => true,
        Phrase::Coordinated(cp) => cp
            .coordinates
            .first()
            .map(needs_relative_marker)
            .unwrap_or(false),
        _ => false,
    }
}

/// Inflect a noun head for number. Multiword heads ("bolded text segment")
/// pluralize their final word; quoted literals are left untouched.
fn inflect_noun(head: &str, number: Number) -> String {
    if number == Number::Singular || head.contains('\'') {
        return head.to_string();
    }
    match head.rsplit_once(' ') {
        Some((rest, last)) => format!("{} {}", rest, pluralize(last)),
        None => pluralize(head),
    }
}

fn pluralize(word: &str) -> String {
    match word {
        "child" => return "children".to_string(),
        "person" => return "people".to_string(),
        _ => {}
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        format!("{}es", word)
    } else if word.ends_with('y') && !ends_with_vowel_y(word) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{}s", word)
    }
}

fn ends_with_vowel_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    chars.next();
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

/// Inflect the first word of a (possibly multiword) verb for number
fn inflect_verb(verb: &str, number: Number) -> String {
    let (first, rest) = match verb.split_once(' ') {
        Some((first, rest)) => (first, Some(rest)),
        None => (verb, None),
    };
    let inflected = if first == "be" {
        match number {
            Number::Singular => "is".to_string(),
            Number::Plural => "are".to_string(),
        }
    } else {
        match number {
            Number::Singular => {
                if first.ends_with('s')
                    || first.ends_with('x')
                    || first.ends_with('z')
                    || first.ends_with("ch")
                    || first.ends_with("sh")
                {
                    format!("{}es", first)
                } else {
                    format!("{}s", first)
                }
            }
            Number::Plural => first.to_string(),
        }
    };
    match rest {
        Some(rest) => format!("{} {}", inflected, rest),
        None => inflected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn containers() -> Phrase {
        NounPhrase::plural("container").into()
    }

    #[test]
    fn test_realize_plural_noun_with_complement() {
        let phrase: Phrase = NounPhrase::plural("paragraph")
            .complement(PrepositionPhrase::new("from", containers()).into())
            .into();
        assert_eq!(realize(&phrase), "paragraphs from containers");
    }

    #[test]
    fn test_realize_clause_complement_gets_relative_marker() {
        let clause = Clause::new(VerbPhrase::new("be"), Number::Plural).object(
            NounPhrase::plural("child")
                .complement(PrepositionPhrase::new("of", containers()).into())
                .into(),
        );
        let phrase: Phrase = NounPhrase::plural("paragraph")
            .complement(clause.into())
            .into();
        assert_eq!(
            realize(&phrase),
            "paragraphs that are children of containers"
        );
    }

    #[test]
    fn test_realize_coordinated_clauses() {
        let siblings = Clause::new(VerbPhrase::new("be"), Number::Plural).object(
            NounPhrase::plural("sibling")
                .complement(PrepositionPhrase::new("of", containers()).into())
                .into(),
        );
        let appearance = Clause::new(
            VerbPhrase::new("appear")
                .premodifier("eventually")
                .complement(PrepositionPhrase::new("after", containers()).into()),
            Number::Plural,
        );
        let phrase: Phrase = CoordinatedPhrase::new("and")
            .coordinate(siblings.into())
            .coordinate(appearance.into())
            .into();
        assert_eq!(
            realize(&phrase),
            "are siblings of containers and eventually appear after containers"
        );
    }

    #[test]
    fn test_singular_verb_agreement() {
        let clause = Clause::new(VerbPhrase::new("equal"), Number::Singular)
            .object(Phrase::Word("'x'".to_string()));
        assert_eq!(realize(&Phrase::Clause(clause)), "equals 'x'");
    }

    #[test]
    fn test_singular_be() {
        let clause = Clause::new(VerbPhrase::new("be"), Number::Singular)
            .object(Phrase::Word("'x'".to_string()));
        assert_eq!(realize(&Phrase::Clause(clause)), "is 'x'");
    }

    #[test]
    fn test_multiword_verb_inflects_first_word() {
        assert_eq!(inflect_verb("begin with", Number::Singular), "begins with");
        assert_eq!(inflect_verb("begin with", Number::Plural), "begin with");
    }

    #[test]
    fn test_pluralize_rules() {
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("class"), "classes");
        assert_eq!(pluralize("entry"), "entries");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("row"), "rows");
    }

    #[test]
    fn test_multiword_head_pluralizes_last_word() {
        assert_eq!(
            inflect_noun("bolded text segment", Number::Plural),
            "bolded text segments"
        );
    }

    #[test]
    fn test_quoted_heads_are_left_alone() {
        assert_eq!(inflect_noun("'foo'", Number::Plural), "'foo'");
    }

    #[test]
    fn test_preposition_premodifier() {
        let pp = PrepositionPhrase::new("after", containers()).premodifier("right");
        assert_eq!(
            realize(&Phrase::Preposition(pp)),
            "right after containers"
        );
    }
}
