//! Configuration of the overlap pipeline.
//!
//! All limits are explicit and enforced by truncation; the amount of truncated input is
//! reported on each [`Document`](crate::Document) rather than raised as an error.

use serde::{Deserialize, Serialize};

use crate::errors::{FindOverlapError, Result};
use crate::shingling::DEFAULT_WINDOW_SIZE;

/// Configuration shared by every document of one comparison run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OverlapConfig {
    /// Number of tokens per shingle. Values outside `[2, 10]` fall back to 3.
    pub k: usize,
    /// Number of buckets of every shingle set.
    pub num_buckets: usize,
    /// Characters of raw text read per document; the rest is dropped.
    pub max_text_chars: usize,
    /// Characters kept per token; longer tokens are shortened.
    pub max_token_chars: usize,
    /// Tokens kept per document; later tokens are dropped.
    pub max_tokens: usize,
    /// Reference documents compared per run.
    pub max_references: usize,
    /// Shortest common phrase reported, in tokens.
    pub min_phrase_len: usize,
    /// Longest common phrase searched for, in tokens.
    pub max_phrase_len: usize,
    /// Common phrases reported per comparison.
    pub max_phrases: usize,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_WINDOW_SIZE,
            num_buckets: shingle_set::DEFAULT_NUM_BUCKETS,
            max_text_chars: 99_999,
            max_token_chars: 99,
            max_tokens: 10_000,
            max_references: 20,
            min_phrase_len: 3,
            max_phrase_len: 7,
            max_phrases: 5,
        }
    }
}

impl OverlapConfig {
    /// Creates a configuration with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shingle size.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the number of buckets of each shingle set.
    pub fn with_num_buckets(mut self, num_buckets: usize) -> Self {
        self.num_buckets = num_buckets;
        self
    }

    /// Sets the raw text limit per document.
    pub fn with_max_text_chars(mut self, max_text_chars: usize) -> Self {
        self.max_text_chars = max_text_chars;
        self
    }

    /// Sets the length limit per token.
    pub fn with_max_token_chars(mut self, max_token_chars: usize) -> Self {
        self.max_token_chars = max_token_chars;
        self
    }

    /// Sets the token limit per document.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the number of reference documents accepted per run.
    pub fn with_max_references(mut self, max_references: usize) -> Self {
        self.max_references = max_references;
        self
    }

    /// Sets the phrase length range, in tokens, searched by the phrase finder.
    pub fn with_phrase_lens(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_phrase_len = min_len;
        self.max_phrase_len = max_len;
        self
    }

    /// Sets the number of common phrases reported per comparison.
    pub fn with_max_phrases(mut self, max_phrases: usize) -> Self {
        self.max_phrases = max_phrases;
        self
    }

    /// Validates the limits.
    ///
    /// `k` is not checked here since an out-of-range value is replaced by the default.
    pub fn validate(&self) -> Result<()> {
        if self.num_buckets == 0 {
            return Err(FindOverlapError::input("num_buckets must not be 0."));
        }
        if self.max_text_chars == 0 {
            return Err(FindOverlapError::input("max_text_chars must not be 0."));
        }
        if self.max_token_chars == 0 {
            return Err(FindOverlapError::input("max_token_chars must not be 0."));
        }
        if self.max_tokens == 0 {
            return Err(FindOverlapError::input("max_tokens must not be 0."));
        }
        if self.max_references == 0 {
            return Err(FindOverlapError::input("max_references must not be 0."));
        }
        if self.min_phrase_len == 0 {
            return Err(FindOverlapError::input("min_phrase_len must not be 0."));
        }
        if self.min_phrase_len > self.max_phrase_len {
            return Err(FindOverlapError::input(
                "min_phrase_len must not exceed max_phrase_len.",
            ));
        }
        Ok(())
    }
}
