//! Swedish stemmer
//!
//! Single-region algorithm: an ending list in R1 (with an s-ending
//! condition), consonant-pair shortening, and a small derivational
//! step. R1 is pushed right so at least three codepoints precede it.

use once_cell::sync::Lazy;
use stemma_core::{r1_r2, StepFn, StepOutcome, Stemmer, StopWords, WordBuffer};

pub struct Swedish;

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'ä' | 'å' | 'ö')
}

/// Letters a removable s may follow.
const S_ENDINGS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'r', 't', 'v', 'y',
];

static ENDINGS: &[&str] = &[
    "a", "arna", "erna", "heterna", "orna", "ad", "e", "ade", "ande", "arne", "are", "aste",
    "en", "anden", "aren", "heten", "ern", "ar", "er", "heter", "or", "as", "arnas", "ernas",
    "ornas", "es", "ades", "andes", "ens", "arens", "hetens", "erns", "at", "andet", "het",
    "ast", "s",
];

static CONSONANT_PAIRS: &[&str] = &["dd", "gd", "nn", "dt", "gt", "kt", "tt"];

static DERIVATIONAL: &[&str] = &["lig", "ig", "els", "löst", "fullt"];

fn step1(word: &mut WordBuffer) -> StepOutcome {
    let matched = match word.first_suffix_in(word.r1_start, ENDINGS) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    if matched.text == "s" && !word.preceded_by_any(0, matched.len, S_ENDINGS) {
        return StepOutcome::Continue;
    }
    word.remove_last(matched.len);
    StepOutcome::Continue
}

/// Shorten a final consonant pair from the fixed list by one codepoint.
fn step2(word: &mut WordBuffer) -> StepOutcome {
    if word.first_suffix_in(word.r1_start, CONSONANT_PAIRS).is_some() {
        word.remove_last(1);
    }
    StepOutcome::Continue
}

fn step3(word: &mut WordBuffer) -> StepOutcome {
    if let Some(matched) = word.first_suffix_in(word.r1_start, DERIVATIONAL) {
        match matched.text {
            // löst -> lös, fullt -> full
            "löst" | "fullt" => word.remove_last(1),
            _ => word.remove_last(matched.len),
        }
    }
    StepOutcome::Continue
}

const STEPS: &[StepFn] = &[step1, step2, step3];

impl Stemmer for Swedish {
    fn name(&self) -> &'static str {
        "swedish"
    }

    fn preprocess(&self, word: &mut WordBuffer) {
        // Only R1 is used; the region before it must hold at least
        // three codepoints.
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
    "och", "det", "att", "i", "en", "jag", "hon", "som", "han", "på", "den", "med", "var",
    "sig", "för", "så", "till", "är", "men", "ett", "om", "hade", "de", "av", "icke", "mig",
    "du", "henne", "då", "sin", "nu", "har", "inte", "hans", "honom", "skulle", "hennes",
    "där", "min", "man", "ej", "vid", "kunde", "något", "från", "ut", "när", "efter", "upp",
    "vi", "dem", "vara", "vad", "över", "än", "dig", "kan", "sina", "här", "ha",
];
