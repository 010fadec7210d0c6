//! Stop word sets
//!
//! Function words a language can exempt from stemming. Built once from
//! a static list and shared read-only by every invocation.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a static word list.
    pub fn from_slice(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add a single word.
    pub fn add(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Merge another collection into this one.
    pub fn merge(&mut self, other: &StopWords) {
        for word in &other.words {
            self.words.insert(word.clone());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_and_contains() {
        let sw = StopWords::from_slice(&["и", "в", "не"]);
        assert!(sw.contains("и"));
        assert!(!sw.contains("книга"));
        assert_eq!(sw.len(), 3);
    }

    #[test]
    fn test_add_and_merge() {
        let mut sw = StopWords::new();
        assert!(sw.is_empty());
        sw.add("det");
        let other = StopWords::from_slice(&["och", "det"]);
        sw.merge(&other);
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("och"));
    }
}
