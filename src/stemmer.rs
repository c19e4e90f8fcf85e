//! Token normalization and a small suffix-stripping stemmer.
//!
//! The stemmer is a simplified, English-only reduction in three passes
//! (plurals, verb forms, derivational suffixes). Each pass is an ordered
//! rule table: the first rule whose suffix matches is selected and no other
//! rule of that pass is tried, even if the selected rule's length guard
//! keeps it from firing. Index keys depend on these exact rules.

use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref STRIPPED_CHARS: HashSet<char> = ['\'', ',', '.'].iter().copied().collect();
}

/// What a matching rule does to the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the word as it is.
    Keep,
    /// Drop this many trailing characters.
    Drop(usize),
    /// Drop this many trailing characters, then append the replacement.
    Replace(usize, &'static str),
}

/// A single suffix rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub suffix: &'static str,
    /// The action only fires when the word is longer than this many chars.
    pub longer_than: usize,
    pub action: Action,
}

impl Rule {
    const fn new(suffix: &'static str, action: Action) -> Self {
        Self {
            suffix,
            longer_than: 0,
            action,
        }
    }

    const fn guarded(suffix: &'static str, longer_than: usize, action: Action) -> Self {
        Self {
            suffix,
            longer_than,
            action,
        }
    }
}

/// Pass 1: plural forms.
pub const PLURALS: &[Rule] = &[
    Rule::new("sses", Action::Drop(2)),
    Rule::new("ies", Action::Drop(2)),
    Rule::new("ss", Action::Keep),
    Rule::new("s", Action::Drop(1)),
];

/// Pass 2: past tense and gerunds, guarded against over-stemming short words.
pub const VERB_FORMS: &[Rule] = &[
    Rule::guarded("eed", 4, Action::Drop(1)),
    Rule::guarded("ed", 4, Action::Drop(2)),
    Rule::guarded("ing", 5, Action::Drop(3)),
];

/// Pass 3: derivational suffixes.
pub const DERIVATIONAL: &[Rule] = &[
    Rule::new("ational", Action::Replace(5, "e")),
    Rule::new("tion", Action::Replace(4, "t")),
    Rule::new("ness", Action::Drop(4)),
    Rule::new("ment", Action::Drop(4)),
    Rule::new("able", Action::Drop(4)),
    Rule::new("ible", Action::Drop(4)),
    Rule::new("ful", Action::Drop(3)),
    Rule::new("ous", Action::Drop(3)),
    Rule::new("ive", Action::Drop(3)),
    Rule::new("ly", Action::Drop(2)),
];

/// Remove apostrophes, commas and periods anywhere in the token, then lowercase.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Normalize a token and reduce it to its stem.
pub fn stem(token: &str) -> String {
    let word = normalize(token);
    let word = apply_pass(&word, PLURALS);
    let word = apply_pass(&word, VERB_FORMS);
    apply_pass(&word, DERIVATIONAL)
}

/// Apply at most one rule of `rules` to `word`.
pub fn apply_pass(word: &str, rules: &[Rule]) -> String {
    let Some(rule) = rules.iter().find(|r| word.ends_with(r.suffix)) else {
        return word.to_string();
    };

    if word.chars().count() <= rule.longer_than {
        return word.to_string();
    }

    // Suffixes are ASCII, so dropping them never splits a multi-byte char.
    match rule.action {
        Action::Keep => word.to_string(),
        Action::Drop(n) => word[..word.len() - n].to_string(),
        Action::Replace(n, replacement) => format!("{}{}", &word[..word.len() - n], replacement),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Beauty's,"), "beautys");
        assert_eq!(normalize("o'er."), "oer");
        assert_eq!(normalize("Thee;"), "thee;");
        assert_eq!(normalize("Sonnet"), "sonnet");
    }

    #[test]
    fn test_stem_examples() {
        assert_eq!(stem("Sonnets"), "sonnet");
        assert_eq!(stem("loving"), "lov");
        // The apostrophe goes first, which exposes a plural "s".
        assert_eq!(stem("beauty's"), "beauty");
    }

    #[test]
    fn test_plurals() {
        assert_eq!(apply_pass("caresses", PLURALS), "caress");
        assert_eq!(apply_pass("ponies", PLURALS), "poni");
        assert_eq!(apply_pass("caress", PLURALS), "caress");
        assert_eq!(apply_pass("cats", PLURALS), "cat");
        assert_eq!(apply_pass("cat", PLURALS), "cat");
    }

    #[test]
    fn test_verb_forms() {
        assert_eq!(apply_pass("agreed", VERB_FORMS), "agree");
        assert_eq!(apply_pass("feed", VERB_FORMS), "feed");
        assert_eq!(apply_pass("plastered", VERB_FORMS), "plaster");
        assert_eq!(apply_pass("bled", VERB_FORMS), "bled");
        assert_eq!(apply_pass("motoring", VERB_FORMS), "motor");
        assert_eq!(apply_pass("sing", VERB_FORMS), "sing");
        assert_eq!(apply_pass("bring", VERB_FORMS), "bring");
    }

    #[test]
    fn test_derivational() {
        assert_eq!(apply_pass("relational", DERIVATIONAL), "relate");
        assert_eq!(apply_pass("creation", DERIVATIONAL), "creat");
        assert_eq!(apply_pass("sweetness", DERIVATIONAL), "sweet");
        assert_eq!(apply_pass("ornament", DERIVATIONAL), "orna");
        assert_eq!(apply_pass("hopeful", DERIVATIONAL), "hope");
        assert_eq!(apply_pass("famous", DERIVATIONAL), "fam");
        assert_eq!(apply_pass("massive", DERIVATIONAL), "mass");
        assert_eq!(apply_pass("sweetly", DERIVATIONAL), "sweet");
        assert_eq!(apply_pass("rose", DERIVATIONAL), "rose");
    }

    #[test]
    fn test_passes_chain() {
        // plural, then derivational
        assert_eq!(stem("Creations"), "creat");
        // gerund, then derivational
        assert_eq!(stem("hopefully"), "hopeful");
        assert_eq!(stem("increase"), "increase");
        assert_eq!(stem("1:"), "1:");
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(stem("Éclairs"), "éclair");
        assert_eq!(stem("naïveness"), "naïve");
    }
}
