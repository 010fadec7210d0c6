//! Language plugin interface
//!
//! A language supplies region setup, an ordered list of step functions,
//! orthographic cleanup and its data tables. Plugins are immutable and
//! shared by reference across all concurrent invocations.

use crate::pipeline::StepFn;
use crate::stop_words::StopWords;
use crate::word::WordBuffer;

pub trait Stemmer: Send + Sync {
    /// Language name used for diagnostics.
    fn name(&self) -> &'static str;

    /// Full-word exceptional forms, consulted before the pipeline runs.
    fn exception(&self, _word: &str) -> Option<&'static str> {
        None
    }

    /// Set the region starts for `word`.
    fn preprocess(&self, word: &mut WordBuffer);

    /// Ordered step functions; the pipeline halts at the first `Stop`.
    fn steps(&self) -> &[StepFn];

    /// Orthographic cleanup after the pipeline; no region dependency.
    fn postprocess(&self, _word: &mut WordBuffer) {}

    /// Function words exempt from stemming on request.
    fn stop_words(&self) -> Option<&StopWords> {
        None
    }
}
