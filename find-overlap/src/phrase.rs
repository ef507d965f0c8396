//! Extraction of representative phrases shared by two token sequences.
use hashbrown::HashSet;

use crate::config::OverlapConfig;
use crate::shingling::ShingleIter;

/// Finds common multi-word phrases, longest first.
///
/// Phrase lengths are tried from `max_len` down to `min_len`. A window of the target is
/// accepted if it occurs in the reference on token boundaries and neither contains nor is
/// contained in a phrase accepted before. The search stops at `max_phrases` phrases.
/// This picks examples, it does not enumerate every common substring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseFinder {
    min_len: usize,
    max_len: usize,
    max_phrases: usize,
}

impl Default for PhraseFinder {
    fn default() -> Self {
        Self::new(3, 7, 5)
    }
}

impl PhraseFinder {
    pub const fn new(min_len: usize, max_len: usize, max_phrases: usize) -> Self {
        Self {
            min_len,
            max_len,
            max_phrases,
        }
    }

    pub const fn from_config(config: &OverlapConfig) -> Self {
        Self::new(
            config.min_phrase_len,
            config.max_phrase_len,
            config.max_phrases,
        )
    }

    /// Returns at most `max_phrases` phrases of `target` also found in `reference`.
    ///
    /// # Examples
    ///
    /// ```
    /// use find_overlap::PhraseFinder;
    ///
    /// let target = ["quick", "brown", "fox", "jumps", "over", "lazy", "dog"];
    /// let reference = ["sly", "brown", "fox", "jumps", "over", "lazy", "cat"];
    /// assert_eq!(
    ///     PhraseFinder::default().find(&target, &reference),
    ///     vec!["brown fox jumps over lazy"],
    /// );
    /// ```
    pub fn find<S, T>(&self, target: &[S], reference: &[T]) -> Vec<String>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut phrases = vec![];
        if self.max_phrases == 0 || self.min_len == 0 || reference.is_empty() {
            return phrases;
        }

        // Padding with spaces restricts subsumption to whole tokens.
        let mut accepted: Vec<String> = vec![];

        for len in (self.min_len..=self.max_len).rev() {
            if len > target.len() || len > reference.len() {
                continue;
            }
            let windows: HashSet<String> = ShingleIter::new(reference, len).collect();
            for phrase in ShingleIter::new(target, len) {
                if !windows.contains(&phrase) {
                    continue;
                }
                let needle = padded(&phrase);
                if accepted
                    .iter()
                    .any(|p| p.contains(&needle) || needle.contains(p.as_str()))
                {
                    continue;
                }
                accepted.push(needle);
                phrases.push(phrase);
                if phrases.len() == self.max_phrases {
                    return phrases;
                }
            }
        }
        phrases
    }
}

fn padded(s: &str) -> String {
    format!(" {s} ")
}
