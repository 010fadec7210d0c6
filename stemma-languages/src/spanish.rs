//! Spanish stemmer
//!
//! Attached-pronoun removal, standard suffixes with chained secondary
//! removals (mostly confined to R2), two tiers of verb suffixes in RV,
//! residual vowels, and acute-accent cleanup at the end.

use once_cell::sync::Lazy;
use stemma_core::{
    longest_suffix, r1_r2, rv_spanish, StepFn, StepOutcome, Stemmer, StopWords, WordBuffer,
};

pub struct Spanish;

fn is_vowel(ch: char) -> bool {
    matches!(
        ch,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
    )
}

static PRONOUNS: &[&str] = &[
    "me", "se", "sela", "selo", "selas", "selos", "la", "le", "lo", "las", "les", "los", "nos",
];
static ACCENTED_FORMS: &[&str] = &["iéndo", "ándo", "ár", "ér", "ír"];
static PLAIN_FORMS: &[&str] = &["ando", "iendo", "ar", "er", "ir"];
static YENDO: &[&str] = &["yendo"];

static STEP1_SUFFIXES: &[&str] = &[
    "anza", "anzas", "ico", "ica", "icos", "icas", "ismo", "ismos", "able", "ables", "ible",
    "ibles", "ista", "istas", "oso", "osa", "osos", "osas", "amiento", "amientos", "imiento",
    "imientos", "adora", "ador", "ación", "adoras", "adores", "aciones", "ante", "antes",
    "ancia", "ancias", "logía", "logías", "ución", "uciones", "encia", "encias", "amente",
    "mente", "idad", "idades", "iva", "ivo", "ivas", "ivos",
];

static IC: &[&str] = &["ic"];
static IV: &[&str] = &["iv"];
static AT: &[&str] = &["at"];
static OS_IC_AD: &[&str] = &["os", "ic", "ad"];
static ANTE_ABLE_IBLE: &[&str] = &["ante", "able", "ible"];
static ABIL_IC_IV: &[&str] = &["abil", "ic", "iv"];

static Y_VERB_SUFFIXES: &[&str] = &[
    "ya", "ye", "yan", "yen", "yeron", "yendo", "yo", "yó", "yas", "yes", "yais", "yamos",
];

static VERB_SUFFIXES: &[&str] = &[
    "arían", "arías", "arán", "arás", "aríais", "aría", "aréis", "aríamos", "aremos", "ará",
    "aré", "erían", "erías", "erán", "erás", "eríais", "ería", "eréis", "eríamos", "eremos",
    "erá", "eré", "irían", "irías", "irán", "irás", "iríais", "iría", "iréis", "iríamos",
    "iremos", "irá", "iré", "aba", "ada", "ida", "ía", "ara", "iera", "ad", "ed", "id", "ase",
    "iese", "aste", "iste", "an", "aban", "ían", "aran", "ieran", "asen", "iesen", "aron",
    "ieron", "ado", "ido", "ando", "iendo", "ió", "ar", "er", "ir", "as", "abas", "adas",
    "idas", "ías", "aras", "ieras", "ases", "ieses", "ís", "áis", "abais", "íais", "arais",
    "ierais", "aseis", "ieseis", "asteis", "isteis", "ados", "idos", "amos", "ábamos",
    "íamos", "imos", "áramos", "iéramos", "iésemos", "ásemos", "en", "es", "éis", "emos",
];

static RESIDUAL: &[&str] = &["os", "a", "o", "á", "í", "ó", "e", "é"];

fn unaccent_form(form: &str) -> &'static str {
    match form {
        "iéndo" => "iendo",
        "ándo" => "ando",
        "ár" => "ar",
        "ér" => "er",
        _ => "ir",
    }
}

/// Attached pronouns come off only after a gerund or infinitive ending
/// in RV; accented endings lose their accent in the same pass.
fn attached_pronoun(word: &mut WordBuffer) -> StepOutcome {
    let pronoun = match word.first_suffix_in(word.rv_start, PRONOUNS) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    let end = word.len() - pronoun.len;

    if let Some(form) = longest_suffix(word.chars(), word.rv_start, end, ACCENTED_FORMS) {
        word.remove_last(pronoun.len);
        word.replace_suffix(form.len, unaccent_form(form.text));
    } else if longest_suffix(word.chars(), word.rv_start, end, PLAIN_FORMS).is_some() {
        word.remove_last(pronoun.len);
    } else if longest_suffix(word.chars(), word.rv_start, end, YENDO).is_some()
        && end >= 6
        && word.char_at(end - 6) == Some('u')
    {
        word.remove_last(pronoun.len);
    }
    StepOutcome::Continue
}

/// Standard suffix removal. The longest candidate is selected over the
/// whole word and then validated against its region; a failed condition
/// fails the attempt without falling back to a shorter candidate.
fn standard_suffix(word: &mut WordBuffer) -> bool {
    let matched = match word.first_suffix_in(0, STEP1_SUFFIXES) {
        Some(m) => m,
        None => return false,
    };
    let start = word.len() - matched.len;
    let in_r1 = start >= word.r1_start;
    let in_r2 = start >= word.r2_start;

    match matched.text {
        "adora" | "ador" | "ación" | "adoras" | "adores" | "aciones" | "ante" | "antes"
        | "ancia" | "ancias" => {
            if !in_r2 {
                return false;
            }
            word.remove_last(matched.len);
            word.remove_suffix_in(word.r2_start, IC);
        }
        "logía" | "logías" => {
            if !in_r2 {
                return false;
            }
            word.replace_suffix(matched.len, "log");
        }
        "ución" | "uciones" => {
            if !in_r2 {
                return false;
            }
            word.replace_suffix(matched.len, "u");
        }
        "encia" | "encias" => {
            if !in_r2 {
                return false;
            }
            word.replace_suffix(matched.len, "ente");
        }
        "amente" => {
            if !in_r1 {
                return false;
            }
            word.remove_last(matched.len);
            if word.remove_suffix_in(word.r2_start, IV).is_some() {
                word.remove_suffix_in(word.r2_start, AT);
            } else {
                word.remove_suffix_in(word.r2_start, OS_IC_AD);
            }
        }
        "mente" => {
            if !in_r2 {
                return false;
            }
            word.remove_last(matched.len);
            word.remove_suffix_in(word.r2_start, ANTE_ABLE_IBLE);
        }
        "idad" | "idades" => {
            if !in_r2 {
                return false;
            }
            word.remove_last(matched.len);
            word.remove_suffix_in(word.r2_start, ABIL_IC_IV);
        }
        "iva" | "ivo" | "ivas" | "ivos" => {
            if !in_r2 {
                return false;
            }
            word.remove_last(matched.len);
            word.remove_suffix_in(word.r2_start, AT);
        }
        _ => {
            if !in_r2 {
                return false;
            }
            word.remove_last(matched.len);
        }
    }
    true
}

/// Verb suffixes beginning with y, removable only after u.
fn y_verb_suffix(word: &mut WordBuffer) -> bool {
    let matched = match word.first_suffix_in(word.rv_start, Y_VERB_SUFFIXES) {
        Some(m) => m,
        None => return false,
    };
    if !word.preceded_by_any(0, matched.len, &['u']) {
        return false;
    }
    word.remove_last(matched.len);
    true
}

fn other_verb_suffix(word: &mut WordBuffer) -> bool {
    let matched = match word.first_suffix_in(word.rv_start, VERB_SUFFIXES) {
        Some(m) => m,
        None => return false,
    };
    let gu_repair = matches!(matched.text, "en" | "es" | "éis" | "emos");
    word.remove_last(matched.len);
    if gu_repair && word.has_suffix("gu") {
        word.remove_last(1);
    }
    true
}

/// One verb tier only: the y tier runs when no standard suffix came
/// off, the general tier when the y tier found nothing either.
fn remove_suffixes(word: &mut WordBuffer) -> StepOutcome {
    if !standard_suffix(word) && !y_verb_suffix(word) {
        other_verb_suffix(word);
    }
    StepOutcome::Continue
}

fn residual_suffix(word: &mut WordBuffer) -> StepOutcome {
    let matched = match word.remove_suffix_in(word.rv_start, RESIDUAL) {
        Some(m) => m,
        None => return StepOutcome::Continue,
    };
    if matches!(matched.text, "e" | "é") && word.has_suffix("gu") && word.len() > word.rv_start {
        word.remove_last(1);
    }
    StepOutcome::Continue
}

const STEPS: &[StepFn] = &[attached_pronoun, remove_suffixes, residual_suffix];

impl Stemmer for Spanish {
    fn name(&self) -> &'static str {
        "spanish"
    }

    fn preprocess(&self, word: &mut WordBuffer) {
        word.rv_start = rv_spanish(word.chars(), is_vowel);
        let (r1, r2) = r1_r2(word.chars(), is_vowel);
        word.r1_start = r1;
        word.r2_start = r2;
    }

    fn steps(&self) -> &[StepFn] {
        STEPS
    }

    fn postprocess(&self, word: &mut WordBuffer) {
        for idx in 0..word.len() {
            let plain = match word.char_at(idx) {
                Some('á') => 'a',
                Some('é') => 'e',
                Some('í') => 'i',
                Some('ó') => 'o',
                Some('ú') => 'u',
                _ => continue,
            };
            word.set_char(idx, plain);
        }
    }

    fn stop_words(&self) -> Option<&StopWords> {
        Some(&STOP_WORDS)
    }
}

static STOP_WORDS: Lazy<StopWords> = Lazy::new(|| StopWords::from_slice(STOP_WORD_LIST));

static STOP_WORD_LIST: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o",
    "este", "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también",
    "me", "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos",
    "uno", "les", "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí",
    "antes", "algunos", "qué", "unos", "yo", "otro", "otras", "otra", "él",
];

#[cfg(test)]
mod tests {
    use super::*;
    use stemma_core::stem_with;

    fn stem(word: &str) -> String {
        stem_with(&Spanish, word, false)
    }

    #[test]
    fn test_standard_suffixes() {
        assert_eq!(stem("enormemente"), "enorm");
        assert_eq!(stem("capacidades"), "capac");
    }

    #[test]
    fn test_region_condition_blocks_removal() {
        // "ico" matches but starts before R2; only the residual o goes.
        assert_eq!(stem("lógico"), "logic");
    }

    #[test]
    fn test_verb_suffixes() {
        assert_eq!(stem("canciones"), "cancion");
        assert_eq!(stem("llegues"), "lleg");
    }

    #[test]
    fn test_attached_pronoun_with_accent_repair() {
        assert_eq!(stem("comiéndoselo"), "com");
    }

    #[test]
    fn test_residual_with_gu() {
        assert_eq!(stem("fatigué"), "fatig");
    }

    #[test]
    fn test_postprocess_unaccents() {
        assert_eq!(stem("canción"), "cancion");
    }

    #[test]
    fn test_empty_and_short() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("y"), "y");
    }
}
