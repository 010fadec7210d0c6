//! Multi-language word stemming
//!
//! Snowball-family stemmers for English, Spanish, French, Russian,
//! Swedish and Norwegian, built on the engine in `stemma-core`. The
//! per-language plugins live here together with the language registry
//! and the public [`stem`] / [`stem_all`] entry points.

mod english;
mod french;
mod norwegian;
mod russian;
mod spanish;
mod swedish;

pub use english::English;
pub use french::French;
pub use norwegian::Norwegian;
pub use russian::Russian;
pub use spanish::Spanish;
pub use swedish::Swedish;

pub use stemma_core::{stem_with, StepOutcome, Stemmer, StopWords, WordBuffer};

use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum StemError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Supported stemming languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    Russian,
    Swedish,
    Norwegian,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Russian,
        Language::Swedish,
        Language::Norwegian,
    ];

    /// Parse a language from its English name or ISO 639-1 code.
    pub fn parse(name: &str) -> Option<Language> {
        match name.to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "es" | "spanish" => Some(Language::Spanish),
            "fr" | "french" => Some(Language::French),
            "ru" | "russian" => Some(Language::Russian),
            "sv" | "swedish" => Some(Language::Swedish),
            "no" | "norwegian" => Some(Language::Norwegian),
            _ => None,
        }
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Russian => "ru",
            Language::Swedish => "sv",
            Language::Norwegian => "no",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(plugin(*self).name())
    }
}

/// Language registry, built once and immutable afterwards. Adding a
/// language means registering its plugin here.
static REGISTRY: Lazy<HashMap<Language, &'static dyn Stemmer>> = Lazy::new(|| {
    let mut plugins: HashMap<Language, &'static dyn Stemmer> = HashMap::new();
    plugins.insert(Language::English, &English);
    plugins.insert(Language::Spanish, &Spanish);
    plugins.insert(Language::French, &French);
    plugins.insert(Language::Russian, &Russian);
    plugins.insert(Language::Swedish, &Swedish);
    plugins.insert(Language::Norwegian, &Norwegian);
    plugins
});

/// The registered plugin for `language`.
pub fn plugin(language: Language) -> &'static dyn Stemmer {
    REGISTRY[&language]
}

/// Stem `word` in the named language.
///
/// With `preserve_stop_words` set, known function words of the language
/// come back unstemmed. An unknown language name is the only error.
pub fn stem(word: &str, language: &str, preserve_stop_words: bool) -> Result<String, StemError> {
    let language = Language::parse(language)
        .ok_or_else(|| StemError::UnsupportedLanguage(language.to_string()))?;
    Ok(stem_language(word, language, preserve_stop_words))
}

/// Stem `word` with an already-resolved [`Language`].
pub fn stem_language(word: &str, language: Language, preserve_stop_words: bool) -> String {
    stem_with(plugin(language), word, preserve_stop_words)
}

/// Stem a batch of words in parallel. Plugins are immutable shared
/// data, so the words can be fanned out freely.
pub fn stem_all<S>(
    words: &[S],
    language: &str,
    preserve_stop_words: bool,
) -> Result<Vec<String>, StemError>
where
    S: AsRef<str> + Sync,
{
    let language = Language::parse(language)
        .ok_or_else(|| StemError::UnsupportedLanguage(language.to_string()))?;
    Ok(words
        .par_iter()
        .map(|word| stem_language(word.as_ref(), language, preserve_stop_words))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!(Language::parse("russian"), Some(Language::Russian));
        assert_eq!(Language::parse("RU"), Some(Language::Russian));
        assert_eq!(Language::parse("sv"), Some(Language::Swedish));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn test_registry_covers_all_languages() {
        for &language in Language::ALL {
            assert_eq!(plugin(language).name(), language.to_string());
        }
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let err = stem("cat", "klingon", false).unwrap_err();
        assert!(matches!(err, StemError::UnsupportedLanguage(name) if name == "klingon"));
    }

    #[test]
    fn test_stem_dispatches() {
        assert_eq!(stem("книгами", "russian", false).unwrap(), "книг");
        assert_eq!(stem("running", "en", false).unwrap(), "run");
    }

    #[test]
    fn test_stem_all() {
        let stems = stem_all(&["cats", "running", "the"], "english", true).unwrap();
        assert_eq!(stems, vec!["cat", "run", "the"]);
    }

    #[test]
    fn test_language_serde_round_trip() {
        // The enum serializes as its lowercase name, like the rest of
        // the public configuration surface.
        let language: Language = serde_json::from_str("\"russian\"").unwrap();
        assert_eq!(language, Language::Russian);
    }
}
