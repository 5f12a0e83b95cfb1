//! Compiled patterns for [`StringManager::sanitize`](super::StringManager::sanitize).

use regex::Regex;
use std::sync::OnceLock;

/// Accented and special Latin characters and the ASCII letter they fold to.
///
/// Applied after lowercasing, in this order.
pub const FOLD_TABLE: [(&str, &str); 6] = [
    ("[áàâãåäæª]", "a"),
    ("[éèêëЄ€]", "e"),
    ("[íìîï]", "i"),
    ("[óòôõöøº]", "o"),
    ("[úùûü]", "u"),
    ("[ç¢©]", "c"),
];

pub(crate) struct Patterns {
    pub whitespace: Regex,
    pub folds: Vec<(Regex, &'static str)>,
    pub non_word: Regex,
    pub underscores: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        let folds = FOLD_TABLE
            .iter()
            .map(|(class, base)| Regex::new(class).map(|re| (re, *base)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            whitespace: Regex::new(r"\s+")?,
            folds,
            non_word: Regex::new(r"[^a-z0-9\-]")?,
            underscores: Regex::new(r"_+")?,
        })
    }

    /// Compiled once per process.
    pub fn get() -> Result<&'static Patterns, &'static regex::Error> {
        static PATTERNS: OnceLock<Result<Patterns, regex::Error>> = OnceLock::new();
        PATTERNS.get_or_init(Patterns::compile).as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        let patterns = Patterns::get().unwrap();
        assert_eq!(patterns.folds.len(), FOLD_TABLE.len());
    }

    #[test]
    fn test_every_fold_class_matches_its_members() {
        let patterns = Patterns::get().unwrap();
        for ((class, base), (re, folded)) in FOLD_TABLE.iter().zip(&patterns.folds) {
            assert_eq!(base, folded);
            let members = class.trim_start_matches('[').trim_end_matches(']');
            assert_eq!(re.replace_all(members, *folded), base.repeat(members.chars().count()));
        }
    }
}
