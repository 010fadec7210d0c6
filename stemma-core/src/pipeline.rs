//! Step Pipeline
//!
//! Ordered execution of a language's step functions with explicit
//! early-termination signaling, plus the per-word orchestration that
//! every language entry point goes through.

use crate::stemmer::Stemmer;
use crate::word::WordBuffer;

/// Signal returned by every pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Proceed with the next step.
    Continue,
    /// Terminate the pipeline for this word; later steps do not run.
    Stop,
}

/// A single mutation pass over the word buffer.
pub type StepFn = fn(&mut WordBuffer) -> StepOutcome;

/// Run `steps` in declared order, halting at the first [`StepOutcome::Stop`].
pub fn run_steps(word: &mut WordBuffer, steps: &[StepFn]) {
    for (idx, step) in steps.iter().enumerate() {
        let outcome = step(word);
        tracing::trace!(step = idx, word = %word, ?outcome, "pipeline step");
        if outcome == StepOutcome::Stop {
            break;
        }
    }
}

/// Stem a single word with `plugin`.
///
/// Input is trimmed and lowercased first, matching the behavior callers
/// expect from the language entry points. With `preserve_stop_words`
/// set, words on the plugin's stopword list are returned unstemmed.
pub fn stem_with(plugin: &dyn Stemmer, word: &str, preserve_stop_words: bool) -> String {
    let word = word.trim().to_lowercase();
    if preserve_stop_words {
        if let Some(stop_words) = plugin.stop_words() {
            if stop_words.contains(&word) {
                return word;
            }
        }
    }
    if let Some(fixed) = plugin.exception(&word) {
        return fixed.to_string();
    }

    let mut buffer = WordBuffer::new(&word);
    plugin.preprocess(&mut buffer);
    run_steps(&mut buffer, plugin.steps());
    plugin.postprocess(&mut buffer);

    let stemmed = buffer.to_string();
    tracing::debug!(language = plugin.name(), %word, %stemmed, "stemmed");
    stemmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stop_words::StopWords;

    fn drop_one(word: &mut WordBuffer) -> StepOutcome {
        word.remove_last(1);
        StepOutcome::Continue
    }

    fn drop_one_and_stop(word: &mut WordBuffer) -> StepOutcome {
        word.remove_last(1);
        StepOutcome::Stop
    }

    #[test]
    fn test_steps_run_in_order() {
        let mut word = WordBuffer::new("abcdef");
        run_steps(&mut word, &[drop_one, drop_one, drop_one]);
        assert!(word.eq_str("abc"));
    }

    #[test]
    fn test_stop_halts_pipeline() {
        let mut word = WordBuffer::new("abcdef");
        run_steps(&mut word, &[drop_one, drop_one_and_stop, drop_one]);
        assert!(word.eq_str("abcd"));
    }

    #[test]
    fn test_empty_step_list() {
        let mut word = WordBuffer::new("abc");
        run_steps(&mut word, &[]);
        assert!(word.eq_str("abc"));
    }

    struct Truncating;

    impl Stemmer for Truncating {
        fn name(&self) -> &'static str {
            "truncating"
        }

        fn exception(&self, word: &str) -> Option<&'static str> {
            (word == "irregular").then_some("irr")
        }

        fn preprocess(&self, word: &mut WordBuffer) {
            word.rv_start = 1;
        }

        fn steps(&self) -> &[StepFn] {
            &[drop_one_and_stop]
        }

        fn stop_words(&self) -> Option<&StopWords> {
            use std::sync::OnceLock;
            static STOPS: OnceLock<StopWords> = OnceLock::new();
            Some(STOPS.get_or_init(|| StopWords::from_slice(&["the"])))
        }
    }

    #[test]
    fn test_stem_with_lowercases_and_trims() {
        assert_eq!(stem_with(&Truncating, "  WordS  ", false), "word");
    }

    #[test]
    fn test_stem_with_preserves_stop_words_on_request() {
        assert_eq!(stem_with(&Truncating, "the", true), "the");
        assert_eq!(stem_with(&Truncating, "the", false), "th");
    }

    #[test]
    fn test_stem_with_exception_bypasses_pipeline() {
        assert_eq!(stem_with(&Truncating, "irregular", false), "irr");
    }

    #[test]
    fn test_stem_with_empty_word() {
        assert_eq!(stem_with(&Truncating, "", false), "");
    }
}
