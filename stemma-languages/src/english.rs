//! English stemmer (Porter2)
//!
//! Exceptional full-word forms, the y/Y prelude, R1 prefix overrides,
//! and the classic step sequence: possessives, plural endings, ed/ing
//! with spelling repair, y -> i, the derivational tables confined to R1
//! and R2, and final e/l tidying.

use once_cell::sync::Lazy;
use stemma_core::{
    r1_r2_with_exceptions, StepFn, StepOutcome, Stemmer, StopWords, WordBuffer,
};

pub struct English;

fn is_vowel(ch: char) -> bool {
    // The marked consonant Y is deliberately absent.
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

const LI_ENDINGS: &[char] = &['c', 'd', 'e', 'g', 'h', 'k', 'm', 'n', 'r', 't'];
const DOUBLES: &[char] = &['b', 'd', 'f', 'g', 'm', 'n', 'p', 'r', 't'];

static R1_PREFIX_EXCEPTIONS: &[&str] = &["gener", "commun", "arsen"];

static APOSTROPHES: &[&str] = &["'s'", "'s", "'"];
static STEP1A_SUFFIXES: &[&str] = &["sses", "ied", "ies", "s", "us", "ss"];
static STEP1B_SUFFIXES: &[&str] = &["eedly", "ingly", "edly", "eed", "ing", "ed"];
static STEP2_SUFFIXES: &[&str] = &[
    "ization", "ational", "fulness", "ousness", "iveness", "tional", "biliti", "lessli",
    "entli", "ation", "alism", "aliti", "ousli", "iviti", "fulli", "enci", "anci", "abli",
    "izer", "ator", "alli", "bli", "ogi", "li",
];
static STEP3_SUFFIXES: &[&str] = &[
    "ational", "tional", "alize", "icate", "iciti", "ical", "ative", "ful", "ness",
];
static STEP4_SUFFIXES: &[&str] = &[
    "ement", "ance", "ence", "able", "ible", "ment", "ent", "ant", "ism", "ate", "iti",
    "ous", "ive", "ize", "ion", "al", "er", "ic",
];

/// A vowel between non-vowels (or at the start, before a non-vowel):
/// the shape that makes a final syllable short.
fn ends_short_syllable(chars: &[char]) -> bool {
    let len = chars.len();
    if len >= 3 {
        let c1 = chars[len - 3];
        let v = chars[len - 2];
        let c2 = chars[len - 1];
        if !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, 'w' | 'x' | 'Y') {
            return true;
        }
        false
    } else {
        len == 2 && is_vowel(chars[0]) && !is_vowel(chars[1])
    }
}

/// Short word: ends in a short syllable with an empty R1.
fn is_short(word: &WordBuffer) -> bool {
    word.r1_start >= word.len() && ends_short_syllable(word.chars())
}

fn ends_double(word: &WordBuffer) -> bool {
    let len = word.len();
    if len < 2 {
        return false;
    }
    let last = word.char_at(len - 1);
    last == word.char_at(len - 2) && matches!(last, Some(ch) if DOUBLES.contains(&ch))
}

/// Possessive endings.
fn step0(word: &mut WordBuffer) -> StepOutcome {
    word.remove_suffix_in(0, APOSTROPHES);
    StepOutcome::Continue
}

fn step1a(word: &mut WordBuffer) -> StepOutcome {
    let matched = match word.first_suffix_in(0, STEP1A_SUFFIXES) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    match matched.text {
        "sses" => word.remove_last(2),
        "ied" | "ies" => {
            // i after more than one letter, ie otherwise.
            if word.len() > 4 {
                word.remove_last(2);
            } else {
                word.remove_last(1);
            }
        }
        "s" => {
            let stem = &word.chars()[..word.len().saturating_sub(2)];
            if stem.iter().copied().any(is_vowel) {
                word.remove_last(1);
            }
        }
        // us, ss: keep
        _ => {}
    }
    StepOutcome::Continue
}

/// A handful of words must come out of step 1a untouched by anything
/// later.
fn step1a_invariants(word: &mut WordBuffer) -> StepOutcome {
    for invariant in [
        "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
    ] {
        if word.eq_str(invariant) {
            return StepOutcome::Stop;
        }
    }
    StepOutcome::Continue
}

fn step1b(word: &mut WordBuffer) -> StepOutcome {
    let matched = match word.first_suffix_in(0, STEP1B_SUFFIXES) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    match matched.text {
        "eed" | "eedly" => {
            if word.len() - matched.len >= word.r1_start {
                word.replace_suffix(matched.len, "ee");
            }
        }
        _ => {
            let stem = &word.chars()[..word.len() - matched.len];
            if !stem.iter().copied().any(is_vowel) {
                return StepOutcome::Continue;
            }
            word.remove_last(matched.len);
            if word.has_suffix("at") || word.has_suffix("bl") || word.has_suffix("iz") {
                word.replace_suffix(0, "e");
            } else if ends_double(word) {
                word.remove_last(1);
            } else if is_short(word) {
                word.replace_suffix(0, "e");
            }
        }
    }
    StepOutcome::Continue
}

/// y -> i after a non-vowel that is not the first letter.
fn step1c(word: &mut WordBuffer) -> StepOutcome {
    let len = word.len();
    if len > 2
        && matches!(word.char_at(len - 1), Some('y') | Some('Y'))
        && !matches!(word.char_at(len - 2), Some(ch) if is_vowel(ch))
    {
        word.set_char(len - 1, 'i');
    }
    StepOutcome::Continue
}

fn step2(word: &mut WordBuffer) -> StepOutcome {
    let matched = match word.first_suffix_in(0, STEP2_SUFFIXES) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    if word.len() - matched.len < word.r1_start {
        return StepOutcome::Continue;
    }
    match matched.text {
        "tional" => word.replace_suffix(matched.len, "tion"),
        "enci" => word.replace_suffix(matched.len, "ence"),
        "anci" => word.replace_suffix(matched.len, "ance"),
        "abli" => word.replace_suffix(matched.len, "able"),
        "entli" => word.replace_suffix(matched.len, "ent"),
        "izer" | "ization" => word.replace_suffix(matched.len, "ize"),
        "ational" | "ation" | "ator" => word.replace_suffix(matched.len, "ate"),
        "alism" | "aliti" | "alli" => word.replace_suffix(matched.len, "al"),
        "fulness" | "fulli" => word.replace_suffix(matched.len, "ful"),
        "ousli" | "ousness" => word.replace_suffix(matched.len, "ous"),
        "iveness" | "iviti" => word.replace_suffix(matched.len, "ive"),
        "biliti" | "bli" => word.replace_suffix(matched.len, "ble"),
        "lessli" => word.replace_suffix(matched.len, "less"),
        "ogi" => {
            if word.preceded_by_any(0, matched.len, &['l']) {
                word.remove_last(1);
            }
        }
        "li" => {
            if word.preceded_by_any(0, matched.len, LI_ENDINGS) {
                word.remove_last(2);
            }
        }
        _ => {}
    }
    StepOutcome::Continue
}

fn step3(word: &mut WordBuffer) -> StepOutcome {
    let matched = match word.first_suffix_in(0, STEP3_SUFFIXES) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    if word.len() - matched.len < word.r1_start {
        return StepOutcome::Continue;
    }
    match matched.text {
        "ational" => word.replace_suffix(matched.len, "ate"),
        "tional" => word.replace_suffix(matched.len, "tion"),
        "alize" => word.replace_suffix(matched.len, "al"),
        "icate" | "iciti" | "ical" => word.replace_suffix(matched.len, "ic"),
        "ful" | "ness" => word.remove_last(matched.len),
        "ative" => {
            if word.len() - matched.len >= word.r2_start {
                word.remove_last(matched.len);
            }
        }
        _ => {}
    }
    StepOutcome::Continue
}

fn step4(word: &mut WordBuffer) -> StepOutcome {
    let matched = match word.first_suffix_in(0, STEP4_SUFFIXES) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    if word.len() - matched.len < word.r2_start {
        return StepOutcome::Continue;
    }
    if matched.text == "ion" {
        if word.preceded_by_any(0, matched.len, &['s', 't']) {
            word.remove_last(matched.len);
        }
    } else {
        word.remove_last(matched.len);
    }
    StepOutcome::Continue
}

/// Final e and l tidying.
fn step5(word: &mut WordBuffer) -> StepOutcome {
    let len = word.len();
    if len == 0 {
        return StepOutcome::Continue;
    }
    match word.char_at(len - 1) {
        Some('e') => {
            let in_r2 = len - 1 >= word.r2_start;
            let in_r1 = len - 1 >= word.r1_start;
            if in_r2 || (in_r1 && !ends_short_syllable(&word.chars()[..len - 1])) {
                word.remove_last(1);
            }
        }
        Some('l') => {
            if len - 1 >= word.r2_start && word.char_at(len - 2) == Some('l') {
                word.remove_last(1);
            }
        }
        _ => {}
    }
    StepOutcome::Continue
}

const STEPS: &[StepFn] = &[
    step0,
    step1a,
    step1a_invariants,
    step1b,
    step1c,
    step2,
    step3,
    step4,
    step5,
];

impl Stemmer for English {
    fn name(&self) -> &'static str {
        "english"
    }

    fn exception(&self, word: &str) -> Option<&'static str> {
        let stemmed = match word {
            "skis" => "ski",
            "skies" => "sky",
            "dying" => "die",
            "lying" => "lie",
            "tying" => "tie",
            "idly" => "idl",
            "gently" => "gentl",
            "ugly" => "ugli",
            "early" => "earli",
            "only" => "onli",
            "singly" => "singl",
            "sky" => "sky",
            "news" => "news",
            "howe" => "howe",
            "atlas" => "atlas",
            "cosmos" => "cosmos",
            "bias" => "bias",
            "andes" => "andes",
            _ => return None,
        };
        Some(stemmed)
    }

    fn preprocess(&self, word: &mut WordBuffer) {
        // y at the start or straight after a vowel is a consonant.
        if word.char_at(0) == Some('y') {
            word.set_char(0, 'Y');
        }
        for idx in 1..word.len() {
            if word.char_at(idx) == Some('y')
                && matches!(word.char_at(idx - 1), Some(ch) if is_vowel(ch))
            {
                word.set_char(idx, 'Y');
            }
        }
        let (r1, r2) = r1_r2_with_exceptions(word.chars(), is_vowel, R1_PREFIX_EXCEPTIONS);
        word.r1_start = r1;
        word.r2_start = r2;
    }

    fn steps(&self) -> &[StepFn] {
        STEPS
    }

    fn postprocess(&self, word: &mut WordBuffer) {
        for idx in 0..word.len() {
            if word.char_at(idx) == Some('Y') {
                word.set_char(idx, 'y');
            }
        }
    }

    fn stop_words(&self) -> Option<&StopWords> {
        Some(&STOP_WORDS)
    }
}

static STOP_WORDS: Lazy<StopWords> = Lazy::new(|| StopWords::from_slice(STOP_WORD_LIST));

static STOP_WORD_LIST: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "this",
    "but", "they", "have", "had", "what", "when", "where", "who", "which", "why", "how",
    "all", "each", "every", "both", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can", "just",
    "should", "now", "or", "if", "then", "else", "do", "does", "did", "doing", "would",
    "could", "might", "must", "shall", "may", "here", "there", "am", "been", "being",
];

#[cfg(test)]
mod tests {
    use super::*;
    use stemma_core::stem_with;

    fn stem(word: &str) -> String {
        stem_with(&English, word, false)
    }

    #[test]
    fn test_plurals() {
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("gas"), "gas");
        assert_eq!(stem("this"), "this");
        assert_eq!(stem("kiwis"), "kiwi");
        assert_eq!(stem("ties"), "tie");
        assert_eq!(stem("cries"), "cri");
        assert_eq!(stem("generous"), "generous");
    }

    #[test]
    fn test_possessives() {
        assert_eq!(stem("john's"), "john");
    }

    #[test]
    fn test_ed_ing_with_repair() {
        assert_eq!(stem("hoping"), "hope");
        assert_eq!(stem("hopping"), "hop");
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("controlling"), "control");
        assert_eq!(stem("agreed"), "agre");
    }

    #[test]
    fn test_y_to_i() {
        assert_eq!(stem("poetry"), "poetri");
        assert_eq!(stem("cry"), "cri");
        assert_eq!(stem("by"), "by");
        assert_eq!(stem("say"), "say");
    }

    #[test]
    fn test_derivational_tables() {
        assert_eq!(stem("organization"), "organ");
        assert_eq!(stem("sensational"), "sensat");
        assert_eq!(stem("quickly"), "quick");
        assert_eq!(stem("fully"), "fulli");
        assert_eq!(stem("hopeful"), "hope");
        assert_eq!(stem("rational"), "ration");
        assert_eq!(stem("conditional"), "condit");
    }

    #[test]
    fn test_r2_guard() {
        assert_eq!(stem("agreement"), "agreement");
    }

    #[test]
    fn test_exceptional_forms() {
        assert_eq!(stem("skies"), "sky");
        assert_eq!(stem("dying"), "die");
        assert_eq!(stem("news"), "news");
        assert_eq!(stem("proceed"), "proceed");
        assert_eq!(stem("inning"), "inning");
    }

    #[test]
    fn test_r1_prefix_override() {
        // gener- pins R1, so "ate" in generate survives step 4.
        assert_eq!(stem("generate"), "generat");
    }

    #[test]
    fn test_step5() {
        assert_eq!(stem("cease"), "ceas");
        assert_eq!(stem("roll"), "roll");
    }
}
