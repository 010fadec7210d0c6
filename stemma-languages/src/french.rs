//! French stemmer
//!
//! The prelude marks u/i between vowels, y next to a vowel and u after
//! q as consonants (uppercase markers) so the suffix rules see them as
//! such. Suffix removal is staged: standard suffixes, then one of two
//! verb-suffix tiers when needed, then either a tidying or a residual
//! pass depending on whether the word changed. Undoubling and
//! un-accenting always run last, and the markers are lowered again in
//! postprocess.

use once_cell::sync::Lazy;
use stemma_core::{r1_r2, rv_french, StepFn, StepOutcome, Stemmer, StopWords, WordBuffer};

pub struct French;

const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'â', 'à', 'ë', 'é', 'ê', 'è', 'ï', 'î', 'ô', 'û', 'ù',
];

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

static STEP1_SUFFIXES: &[&str] = &[
    "ance", "iqUe", "isme", "able", "iste", "eux", "ances", "iqUes", "ismes", "ables",
    "istes", "atrice", "ateur", "ation", "atrices", "ateurs", "ations", "logie", "logies",
    "usion", "ution", "usions", "utions", "ence", "ences", "ement", "ements", "ité", "ités",
    "if", "ive", "ifs", "ives", "eaux", "aux", "euse", "euses", "issement", "issements",
    "amment", "emment", "ment", "ments",
];

static IC: &[&str] = &["ic"];
static IV: &[&str] = &["iv"];
static AT: &[&str] = &["at"];
static EUS: &[&str] = &["eus"];
static ABL_IQU: &[&str] = &["abl", "iqU"];
static IER_MARKED: &[&str] = &["ièr", "Ièr"];
static ABIL: &[&str] = &["abil"];

static I_VERB_SUFFIXES: &[&str] = &[
    "îmes", "ît", "îtes", "i", "ie", "ies", "ir", "ira", "irai", "iraIent", "irais", "irait",
    "iras", "irent", "irez", "iriez", "irions", "irons", "iront", "is", "issaIent", "issais",
    "issait", "issant", "issante", "issantes", "issants", "isse", "issent", "isses", "issez",
    "issiez", "issions", "issons", "it",
];

static OTHER_VERB_SUFFIXES: &[&str] = &[
    "ions", "é", "ée", "ées", "és", "èrent", "er", "era", "erai", "eraIent", "erais",
    "erait", "eras", "erez", "eriez", "erions", "erons", "eront", "ez", "iez", "âmes", "ât",
    "âtes", "a", "ai", "aIent", "ais", "ait", "ant", "ante", "antes", "ants", "as", "asse",
    "assent", "asses", "assiez", "assions",
];

static A_GROUP: &[&str] = &[
    "âmes", "ât", "âtes", "a", "ai", "aIent", "ais", "ait", "ant", "ante", "antes", "ants",
    "as", "asse", "assent", "asses", "assiez", "assions",
];

static E_ENDING: &[&str] = &["e"];

static RESIDUAL_SUFFIXES: &[&str] = &["ion", "ier", "ière", "Ier", "Ière", "e", "ë"];

static DOUBLED: &[&str] = &["enn", "onn", "ett", "ell", "eill"];

struct Step1Result {
    altered: bool,
    found_ment: bool,
}

/// Standard suffix removal. The longest candidate over the whole word
/// is selected first; its own region condition then decides, with no
/// fallback to a shorter candidate.
fn standard_suffix(word: &mut WordBuffer) -> Step1Result {
    let matched = match word.first_suffix_in(0, STEP1_SUFFIXES) {
        Some(m) => m,
        None => {
            return Step1Result {
                altered: false,
                found_ment: false,
            }
        }
    };
    let start = word.len() - matched.len;
    let in_r1 = start >= word.r1_start;
    let in_r2 = start >= word.r2_start;
    let in_rv = start >= word.rv_start;
    let mut altered = true;
    let mut found_ment = false;

    match matched.text {
        "ance" | "iqUe" | "isme" | "able" | "iste" | "eux" | "ances" | "iqUes" | "ismes"
        | "ables" | "istes" => {
            if in_r2 {
                word.remove_last(matched.len);
            } else {
                altered = false;
            }
        }
        "atrice" | "ateur" | "ation" | "atrices" | "ateurs" | "ations" => {
            if in_r2 {
                word.remove_last(matched.len);
                if let Some(ic) = word.first_suffix_in(0, IC) {
                    if word.len() - ic.len >= word.r2_start {
                        word.remove_last(ic.len);
                    } else {
                        word.replace_suffix(ic.len, "iqU");
                    }
                }
            } else {
                altered = false;
            }
        }
        "logie" | "logies" => {
            if in_r2 {
                word.replace_suffix(matched.len, "log");
            } else {
                altered = false;
            }
        }
        "usion" | "ution" | "usions" | "utions" => {
            if in_r2 {
                word.replace_suffix(matched.len, "u");
            } else {
                altered = false;
            }
        }
        "ence" | "ences" => {
            if in_r2 {
                word.replace_suffix(matched.len, "ent");
            } else {
                altered = false;
            }
        }
        "ement" | "ements" => {
            if in_rv {
                word.remove_last(matched.len);
                if word.remove_suffix_in(word.r2_start, IV).is_some() {
                    word.remove_suffix_in(word.r2_start, AT);
                } else if let Some(eus) = word.first_suffix_in(word.r1_start, EUS) {
                    if word.len() - eus.len >= word.r2_start {
                        word.remove_last(eus.len);
                    } else {
                        word.replace_suffix(eus.len, "eux");
                    }
                } else if word.remove_suffix_in(word.r2_start, ABL_IQU).is_some() {
                    // nothing further to do
                } else if let Some(ier) = word.first_suffix_in(word.rv_start, IER_MARKED) {
                    word.replace_suffix(ier.len, "i");
                }
            } else {
                altered = false;
            }
        }
        "ité" | "ités" => {
            if in_r2 {
                word.remove_last(matched.len);
                if let Some(abil) = word.first_suffix_in(0, ABIL) {
                    if word.len() - abil.len >= word.r2_start {
                        word.remove_last(abil.len);
                    } else {
                        word.replace_suffix(abil.len, "abl");
                    }
                } else if let Some(ic) = word.first_suffix_in(0, IC) {
                    if word.len() - ic.len >= word.r2_start {
                        word.remove_last(ic.len);
                    } else {
                        word.replace_suffix(ic.len, "iqU");
                    }
                } else {
                    word.remove_suffix_in(word.r2_start, IV);
                }
            } else {
                altered = false;
            }
        }
        "if" | "ive" | "ifs" | "ives" => {
            if in_r2 {
                word.remove_last(matched.len);
                if word.remove_suffix_in(word.r2_start, AT).is_some() {
                    if let Some(ic) = word.first_suffix_in(0, IC) {
                        if word.len() - ic.len >= word.r2_start {
                            word.remove_last(ic.len);
                        } else {
                            word.replace_suffix(ic.len, "iqU");
                        }
                    }
                }
            } else {
                altered = false;
            }
        }
        "eaux" => {
            // eaux -> eau
            word.remove_last(1);
        }
        "aux" => {
            if in_r1 {
                word.replace_suffix(matched.len, "al");
            } else {
                altered = false;
            }
        }
        "euse" | "euses" => {
            if in_r2 {
                word.remove_last(matched.len);
            } else if in_r1 {
                word.replace_suffix(matched.len, "eux");
            } else {
                altered = false;
            }
        }
        "issement" | "issements" => {
            let preceded_by_consonant =
                matches!(word.preceding_char(0, matched.len), Some(ch) if !is_vowel(ch));
            if in_r1 && preceded_by_consonant {
                word.remove_last(matched.len);
            } else {
                altered = false;
            }
        }
        "amment" => {
            found_ment = true;
            if in_rv {
                word.replace_suffix(matched.len, "ant");
            } else {
                altered = false;
            }
        }
        "emment" => {
            found_ment = true;
            if in_rv {
                word.replace_suffix(matched.len, "ent");
            } else {
                altered = false;
            }
        }
        _ => {
            // ment, ments: removable after a vowel in RV
            found_ment = true;
            if in_rv && word.preceded_by_any(word.rv_start, matched.len, VOWELS) {
                word.remove_last(matched.len);
            } else {
                altered = false;
            }
        }
    }

    Step1Result { altered, found_ment }
}

/// Verb suffixes beginning i, removable after a non-vowel inside RV.
fn i_verb_suffix(word: &mut WordBuffer) -> bool {
    let matched = match word.first_suffix_in(word.rv_start, I_VERB_SUFFIXES) {
        Some(m) => m,
        None => return false,
    };
    match word.preceding_char(word.rv_start, matched.len) {
        Some(ch) if !is_vowel(ch) => {
            word.remove_last(matched.len);
            true
        }
        _ => false,
    }
}

fn other_verb_suffix(word: &mut WordBuffer) -> bool {
    let matched = match word.first_suffix_in(word.rv_start, OTHER_VERB_SUFFIXES) {
        Some(m) => m,
        None => return false,
    };
    if matched.text == "ions" {
        if word.len() - matched.len >= word.r2_start {
            word.remove_last(matched.len);
            return true;
        }
        return false;
    }
    let a_group = A_GROUP.contains(&matched.text);
    word.remove_last(matched.len);
    if a_group {
        word.remove_suffix_in(word.rv_start, E_ENDING);
    }
    true
}

/// Replace a final marked Y with i and a final ç with c.
fn tidy(word: &mut WordBuffer) {
    let len = word.len();
    match word.char_at(len.wrapping_sub(1)) {
        Some('Y') => word.set_char(len - 1, 'i'),
        Some('ç') => word.set_char(len - 1, 'c'),
        _ => {}
    }
}

/// Residual endings, tried only when nothing else changed the word.
fn residual_suffix(word: &mut WordBuffer) {
    if word.has_suffix("s")
        && !word.preceded_by_any(0, 1, &['a', 'i', 'o', 'u', 'è', 's'])
    {
        word.remove_last(1);
    }
    let matched = match word.first_suffix_in(word.rv_start, RESIDUAL_SUFFIXES) {
        Some(m) => m,
        None => return,
    };
    match matched.text {
        "ion" => {
            let in_r2 = word.len() - matched.len >= word.r2_start;
            let after_s_or_t = word.preceded_by_any(word.rv_start, matched.len, &['s', 't']);
            if in_r2 && after_s_or_t {
                word.remove_last(matched.len);
            }
        }
        "ier" | "ière" | "Ier" | "Ière" => {
            word.replace_suffix(matched.len, "i");
        }
        "e" => {
            word.remove_last(matched.len);
        }
        "ë" => {
            if word.preceded_by_any(0, 1, &['u'])
                && word.len() >= 3
                && word.char_at(word.len() - 3) == Some('g')
            {
                word.remove_last(1);
            }
        }
        _ => {}
    }
}

/// Staged suffix removal: step 1; verb tiers when step 1 did nothing or
/// removed a ment ending; then tidying or the residual pass depending
/// on whether the last stage obeyed altered the word.
fn remove_suffixes(word: &mut WordBuffer) -> StepOutcome {
    let s1 = standard_suffix(word);
    let mut altered = s1.altered;
    if !s1.altered || s1.found_ment {
        altered = i_verb_suffix(word);
        if !altered {
            altered = other_verb_suffix(word);
        }
    }
    if altered {
        tidy(word);
    } else {
        residual_suffix(word);
    }
    StepOutcome::Continue
}

/// Undouble non-vowel endings.
fn undouble(word: &mut WordBuffer) -> StepOutcome {
    if word.first_suffix_in(0, DOUBLED).is_some() {
        word.remove_last(1);
    }
    StepOutcome::Continue
}

/// é or è before a trailing run of non-vowels loses its accent.
fn unaccent(word: &mut WordBuffer) -> StepOutcome {
    let mut run = 0;
    for idx in (0..word.len()).rev() {
        match word.char_at(idx) {
            Some(ch) if !is_vowel(ch) => run += 1,
            _ => break,
        }
    }
    if run >= 1 && run < word.len() {
        let idx = word.len() - run - 1;
        if matches!(word.char_at(idx), Some('é') | Some('è')) {
            word.set_char(idx, 'e');
        }
    }
    StepOutcome::Continue
}

const STEPS: &[StepFn] = &[remove_suffixes, undouble, unaccent];

impl Stemmer for French {
    fn name(&self) -> &'static str {
        "french"
    }

    fn preprocess(&self, word: &mut WordBuffer) {
        mark_vowels_as_consonants(word);
        word.rv_start = rv_french(word.chars(), is_vowel);
        let (r1, r2) = r1_r2(word.chars(), is_vowel);
        word.r1_start = r1;
        word.r2_start = r2;
    }

    fn steps(&self) -> &[StepFn] {
        STEPS
    }

    fn postprocess(&self, word: &mut WordBuffer) {
        for idx in 0..word.len() {
            let lowered = match word.char_at(idx) {
                Some('I') => 'i',
                Some('U') => 'u',
                Some('Y') => 'y',
                _ => continue,
            };
            word.set_char(idx, lowered);
        }
    }

    fn stop_words(&self) -> Option<&StopWords> {
        Some(&STOP_WORDS)
    }
}

fn mark_vowels_as_consonants(word: &mut WordBuffer) {
    for idx in 0..word.len() {
        let ch = match word.char_at(idx) {
            Some(c) => c,
            None => break,
        };
        let prev = idx.checked_sub(1).and_then(|i| word.char_at(i));
        let next = word.char_at(idx + 1);
        let prev_vowel = matches!(prev, Some(p) if is_vowel(p));
        let next_vowel = matches!(next, Some(n) if is_vowel(n));
        match ch {
            'u' | 'i' if prev_vowel && next_vowel => {
                word.set_char(idx, ch.to_ascii_uppercase());
            }
            'y' if prev_vowel || next_vowel => word.set_char(idx, 'Y'),
            'u' if prev == Some('q') => word.set_char(idx, 'U'),
            _ => {}
        }
    }
}

static STOP_WORDS: Lazy<StopWords> = Lazy::new(|| StopWords::from_slice(STOP_WORD_LIST));

static STOP_WORD_LIST: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux",
    "il", "je", "la", "le", "leur", "lui", "ma", "mais", "me", "même", "mes", "moi", "mon",
    "ne", "nos", "notre", "nous", "on", "ou", "où", "par", "pas", "pour", "qu", "que", "qui",
    "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une",
    "vos", "votre", "vous", "été", "être", "est", "sont", "sans", "si", "y",
];

#[cfg(test)]
mod tests {
    use super::*;
    use stemma_core::stem_with;

    fn stem(word: &str) -> String {
        stem_with(&French, word, false)
    }

    #[test]
    fn test_standard_suffixes() {
        assert_eq!(stem("majestueux"), "majestu");
        assert_eq!(stem("possiblement"), "possibl");
        assert_eq!(stem("continuation"), "continu");
    }

    #[test]
    fn test_ment_falls_through_to_verb_tiers() {
        assert_eq!(stem("vraiment"), "vrai");
        assert_eq!(stem("abondamment"), "abond");
    }

    #[test]
    fn test_i_verb_suffix_needs_consonant() {
        assert_eq!(stem("finissait"), "fin");
    }

    #[test]
    fn test_verb_suffix_with_undouble() {
        assert_eq!(stem("donnerait"), "don");
    }

    #[test]
    fn test_a_group_takes_preceding_e() {
        assert_eq!(stem("mangeassent"), "mang");
    }

    #[test]
    fn test_residual_ion() {
        assert_eq!(stem("émotion"), "émot");
    }

    #[test]
    fn test_y_marking_becomes_i() {
        assert_eq!(stem("payer"), "pai");
    }

    #[test]
    fn test_empty_and_short() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("y"), "y");
    }
}
