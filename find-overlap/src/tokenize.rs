//! Splitting normalized text into bounded token sequences.
use serde::{Deserialize, Serialize};

use crate::config::OverlapConfig;
use crate::normalize::{normalize, StopwordFilter};

/// Amount of input dropped or shortened by the tokenizer limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truncation {
    /// Raw characters past `max_text_chars`.
    pub text_chars_dropped: usize,
    /// Non-stopword tokens past `max_tokens`.
    pub tokens_dropped: usize,
    /// Tokens cut down to `max_token_chars`.
    pub tokens_shortened: usize,
}

impl Truncation {
    /// Checks if any input was lost.
    pub const fn is_truncated(&self) -> bool {
        self.text_chars_dropped != 0 || self.tokens_dropped != 0 || self.tokens_shortened != 0
    }
}

/// Output of [`Tokenizer::tokenize`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<String>,
    pub truncation: Truncation,
}

/// Turns raw text into a stopword-free token sequence.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
    max_text_chars: usize,
    max_token_chars: usize,
    max_tokens: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&OverlapConfig::default())
    }
}

impl Tokenizer {
    /// Creates an instance with the limits of `config`.
    ///
    /// Tokens are kept at least one char long even if `config.max_token_chars` is zero.
    pub fn new(config: &OverlapConfig) -> Self {
        Self {
            stopwords: StopwordFilter::english(),
            max_text_chars: config.max_text_chars,
            max_token_chars: config.max_token_chars.max(1),
            max_tokens: config.max_tokens,
        }
    }

    /// Tokenizes `text`.
    ///
    /// Tokens never contain whitespace and are never stopwords.
    /// Input past a limit is dropped and accounted for in [`Tokenized::truncation`].
    pub fn tokenize(&self, text: &str) -> Tokenized {
        let mut truncation = Truncation::default();

        let text = match text.char_indices().nth(self.max_text_chars) {
            Some((end, _)) => {
                truncation.text_chars_dropped = text[end..].chars().count();
                &text[..end]
            }
            None => text,
        };

        let normalized = normalize(text);
        let mut tokens = vec![];
        for word in normalized.split(' ').filter(|w| !w.is_empty()) {
            if self.stopwords.is_stopword(word) {
                continue;
            }
            if tokens.len() == self.max_tokens {
                truncation.tokens_dropped += 1;
                continue;
            }
            let token = match word.char_indices().nth(self.max_token_chars) {
                Some((end, _)) => {
                    truncation.tokens_shortened += 1;
                    &word[..end]
                }
                None => word,
            };
            tokens.push(token.to_string());
        }

        Tokenized { tokens, truncation }
    }
}
