//! Core stemming engine
//!
//! Language-independent machinery of the Snowball algorithm family:
//! the Word Buffer with its derived regions (R1, R2, RV), region
//! calculators, the region-bounded longest-match suffix matcher with
//! its conditional removal predicate, and the step pipeline protocol
//! language plugins are built from. Everything here is a total,
//! allocation-light, CPU-bound computation; the per-language suffix
//! tables and step wiring live in `stemma-languages`.

mod matcher;
mod pipeline;
mod regions;
mod stemmer;
mod stop_words;
mod word;

pub use matcher::{ends_with, longest_suffix, preceded_by_any, preceding_char, SuffixMatch};
pub use pipeline::{run_steps, stem_with, StepFn, StepOutcome};
pub use regions::{
    r1_r2, r1_r2_with_exceptions, rv_after_first_vowel, rv_french, rv_spanish,
};
pub use stemmer::Stemmer;
pub use stop_words::StopWords;
pub use word::WordBuffer;
