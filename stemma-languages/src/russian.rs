//! Russian stemmer
//!
//! Standard-suffix removal in RV (perfective gerund, reflexive,
//! adjectival, verb, noun classes), the и ending, derivational
//! endings in R2, and final tidying. Several ending classes are
//! "Group 1": removable only straight after а or я inside RV.

use once_cell::sync::Lazy;
use stemma_core::{
    r1_r2, rv_after_first_vowel, StepFn, StepOutcome, Stemmer, StopWords, WordBuffer,
};

pub struct Russian;

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'а' | 'е' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я')
}

const GROUP1_MARKERS: &[char] = &['а', 'я'];

static PERFECTIVE_GERUND: &[&str] = &[
    "ившись", "ывшись", "вшись", "ивши", "ывши", "вши", "ив", "ыв", "в",
];
static PERFECTIVE_GERUND_GROUP1: &[&str] = &["в", "вши", "вшись"];

static REFLEXIVE: &[&str] = &["ся", "сь"];

static ADJECTIVE: &[&str] = &[
    "ими", "ыми", "его", "ого", "ему", "ому", "ее", "ие", "ые", "ое", "ей", "ий", "ый", "ой",
    "ем", "им", "ым", "ом", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
];

static PARTICIPLE: &[&str] = &["ивш", "ывш", "ующ", "ем", "нн", "вш", "ющ", "щ"];
static PARTICIPLE_GROUP1: &[&str] = &["ем", "нн", "вш", "ющ", "щ"];

static VERB: &[&str] = &[
    "уйте", "ейте", "ыть", "ыло", "ыли", "ыла", "уют", "ует", "нно", "йте", "ишь", "ить",
    "ите", "ило", "или", "ила", "ешь", "ете", "ены", "ено", "ена", "ят", "ют", "ыт", "ым",
    "ыл", "ую", "уй", "ть", "ны", "но", "на", "ло", "ли", "ла", "ит", "им", "ил", "ет", "ен",
    "ем", "ей", "ю", "н", "л", "й",
];
static VERB_GROUP1: &[&str] = &[
    "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют", "ны", "ть",
    "ешь", "нно",
];

static NOUN: &[&str] = &[
    "иями", "ями", "иях", "иям", "ием", "ией", "ами", "ях", "ям", "ья", "ью", "ье", "ом",
    "ой", "ов", "ия", "ию", "ий", "ии", "ие", "ем", "ей", "еи", "ев", "ах", "ам", "я", "ю",
    "ь", "ы", "у", "о", "й", "и", "е", "а",
];

static SUPERLATIVE: &[&str] = &["ейше", "ейш"];
static DERIVATIONAL: &[&str] = &["ость", "ост"];
static I_ENDING: &[&str] = &["и"];
static DOUBLE_N: &[&str] = &["нн"];
static SOFT_SIGN: &[&str] = &["ь"];

/// Remove the longest candidate in RV, re-validating Group 1 endings
/// against the preceding-а/я rule. A failed validation fails the whole
/// rule; there is no fallback to a shorter candidate.
fn remove_class(word: &mut WordBuffer, candidates: &'static [&'static str], group1: &'static [&'static str]) -> bool {
    let matched = match word.first_suffix_in(word.rv_start, candidates) {
        Some(m) => m,
        None => return false,
    };
    if group1.contains(&matched.text)
        && !word.preceded_by_any(word.rv_start, matched.len, GROUP1_MARKERS)
    {
        return false;
    }
    word.remove_last(matched.len);
    true
}

/// Search for a perfective gerund ending; failing that, drop a
/// reflexive ending and try the adjectival, verb and noun classes in
/// turn, ending the step at the first class that matches.
fn step1(word: &mut WordBuffer) -> StepOutcome {
    if remove_class(word, PERFECTIVE_GERUND, PERFECTIVE_GERUND_GROUP1) {
        return StepOutcome::Stop;
    }

    word.remove_suffix_in(word.rv_start, REFLEXIVE);

    if remove_adjectival(word) {
        return StepOutcome::Stop;
    }
    if remove_class(word, VERB, VERB_GROUP1) {
        return StepOutcome::Stop;
    }
    if word.remove_suffix_in(word.rv_start, NOUN).is_some() {
        return StepOutcome::Stop;
    }
    StepOutcome::Continue
}

/// An adjective ending, then optionally a participle ending from what
/// remains; the second removal re-reads the shortened buffer.
fn remove_adjectival(word: &mut WordBuffer) -> bool {
    if word.remove_suffix_in(word.rv_start, ADJECTIVE).is_none() {
        return false;
    }
    remove_class(word, PARTICIPLE, PARTICIPLE_GROUP1);
    true
}

/// Removal of the и ending.
fn step2(word: &mut WordBuffer) -> StepOutcome {
    if word.remove_suffix_in(word.rv_start, I_ENDING).is_some() {
        StepOutcome::Stop
    } else {
        StepOutcome::Continue
    }
}

/// Derivational endings, confined to R2.
fn step3(word: &mut WordBuffer) -> StepOutcome {
    if word.remove_suffix_in(word.r2_start, DERIVATIONAL).is_some() {
        StepOutcome::Stop
    } else {
        StepOutcome::Continue
    }
}

/// Undouble нн, or remove a superlative ending (then undouble нн), or
/// drop a trailing soft sign.
fn step4(word: &mut WordBuffer) -> StepOutcome {
    if word.first_suffix_in(word.rv_start, DOUBLE_N).is_some() {
        word.remove_last(1);
        return StepOutcome::Stop;
    }
    if word.remove_suffix_in(word.rv_start, SUPERLATIVE).is_some() {
        if word.first_suffix_in(word.rv_start, DOUBLE_N).is_some() {
            word.remove_last(1);
        }
        return StepOutcome::Stop;
    }
    if word.remove_suffix_in(word.rv_start, SOFT_SIGN).is_some() {
        return StepOutcome::Stop;
    }
    StepOutcome::Continue
}

const STEPS: &[StepFn] = &[step1, step2, step3, step4];

impl Stemmer for Russian {
    fn name(&self) -> &'static str {
        "russian"
    }

    fn preprocess(&self, word: &mut WordBuffer) {
        for idx in 0..word.len() {
            if word.char_at(idx) == Some('ё') {
                word.set_char(idx, 'е');
            }
        }
        word.rv_start = rv_after_first_vowel(word.chars(), is_vowel);
        let (r1, r2) = r1_r2(word.chars(), is_vowel);
        word.r1_start = r1;
        word.r2_start = r2;
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
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет",
];
