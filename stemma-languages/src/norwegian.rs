//! Norwegian stemmer
//!
//! Same family as the Swedish algorithm: an R1 ending list with an
//! s-ending condition (where k counts only after a non-vowel), a t
//! deletion after d/v, and a derivational list. R1 is pushed right so
//! at least three codepoints precede it.

use once_cell::sync::Lazy;
use stemma_core::{r1_r2, StepFn, StepOutcome, Stemmer, StopWords, WordBuffer};

pub struct Norwegian;

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'æ' | 'å' | 'ø')
}

/// Letters a removable s may follow; k qualifies only when it is not
/// itself preceded by a vowel.
const S_ENDINGS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'l', 'm', 'n', 'o', 'p', 'r', 't', 'v', 'y', 'z',
];

static ENDINGS: &[&str] = &[
    "a", "e", "ede", "ande", "ende", "ane", "ene", "hetene", "en", "heten", "ar", "er",
    "heter", "as", "es", "edes", "endes", "enes", "hetenes", "ens", "hetens", "ers", "ets",
    "et", "het", "ast", "erte", "ert", "s",
];

static T_PAIRS: &[&str] = &["dt", "vt"];

static DERIVATIONAL: &[&str] = &[
    "leg", "eleg", "ig", "eig", "lig", "elig", "els", "lov", "elov", "slov", "hetslov",
];

fn valid_s_ending(word: &WordBuffer) -> bool {
    let len = word.len();
    if len < 2 {
        return false;
    }
    let before_k = len.checked_sub(3).and_then(|idx| word.char_at(idx));
    match word.char_at(len - 2) {
        Some('k') => !matches!(before_k, Some(ch) if is_vowel(ch)),
        Some(ch) => S_ENDINGS.contains(&ch),
        None => false,
    }
}

fn step1(word: &mut WordBuffer) -> StepOutcome {
    let matched = match word.first_suffix_in(word.r1_start, ENDINGS) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    match matched.text {
        "s" => {
            if valid_s_ending(word) {
                word.remove_last(1);
            }
        }
        // erte, ert -> er
        "erte" | "ert" => word.remove_last(matched.len - 2),
        _ => word.remove_last(matched.len),
    }
    StepOutcome::Continue
}

/// Delete the t of a final dt or vt.
fn step2(word: &mut WordBuffer) -> StepOutcome {
    if word.first_suffix_in(word.r1_start, T_PAIRS).is_some() {
        word.remove_last(1);
    }
    StepOutcome::Continue
}

fn step3(word: &mut WordBuffer) -> StepOutcome {
    word.remove_suffix_in(word.r1_start, DERIVATIONAL);
    StepOutcome::Continue
}

const STEPS: &[StepFn] = &[step1, step2, step3];

impl Stemmer for Norwegian {
    fn name(&self) -> &'static str {
        "norwegian"
    }

    fn preprocess(&self, word: &mut WordBuffer) {
        // Find the region R1. R2 is not used.
        let (r1, _) = r1_r2(word.chars(), is_vowel);
        word.r1_start = r1.max(3).min(word.len());
    }

    fn steps(&self) -> &[StepFn] {
        STEPS
    }

    fn stop_words(&self) -> Option<&StopWords> {
        Some(&STOP_WORDS)
    }
}

static STOP_WORDS: Lazy<StopWords> = Lazy::new(|| StopWords::from_slice(STOP_WORD_LIST));

static STOP_WORD_LIST: &[&str] = &[
    "og", "i", "jeg", "det", "at", "en", "et", "den", "til", "er", "som", "på", "de", "med",
    "han", "av", "ikke", "der", "så", "var", "meg", "seg", "men", "ett", "har", "om", "vi",
    "min", "mitt", "ha", "hadde", "hun", "nå", "over", "da", "ved", "fra", "du", "ut", "sin",
    "dem", "oss", "opp", "man", "kan", "hans", "hvor", "eller", "hva", "skal", "selv", "sjøl",
    "her", "alle", "vil", "bli", "ble", "blitt", "kunne", "inn", "når", "være", "kom", "noen",
];

#[cfg(test)]
mod tests {
    use super::*;
    use stemma_core::stem_with;

    fn stem(word: &str) -> String {
        stem_with(&Norwegian, word, false)
    }

    #[test]
    fn test_noun_endings() {
        assert_eq!(stem("huset"), "hus");
        assert_eq!(stem("bilene"), "bil");
        assert_eq!(stem("mulighetene"), "mulig");
    }

    #[test]
    fn test_erte_becomes_er() {
        assert_eq!(stem("opererte"), "operer");
    }

    #[test]
    fn test_s_ending_with_k_rule() {
        // r before k: the s goes.
        assert_eq!(stem("verks"), "verk");
        // Vowel before k: the s stays.
        assert_eq!(stem("teks"), "teks");
    }

    #[test]
    fn test_t_deletion() {
        let mut word = WordBuffer::new("behandt");
        word.r1_start = 3;
        step2(&mut word);
        assert!(word.eq_str("behand"));
    }

    #[test]
    fn test_derivational() {
        assert_eq!(stem("heldig"), "held");
    }

    #[test]
    fn test_short_words_untouched() {
        assert_eq!(stem("by"), "by");
        assert_eq!(stem(""), "");
    }
}
