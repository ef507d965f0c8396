//! Documents: a token sequence plus its shingle set.
use shingle_set::ShingleSet;
use tracing::{debug, warn};

use crate::config::OverlapConfig;
use crate::errors::Result;
use crate::report::DocumentStats;
use crate::shingling::{generate_shingles, WindowSize};
use crate::tokenize::{Tokenized, Tokenizer, Truncation};

/// A processed document, read-only after construction.
#[derive(Clone, Debug)]
pub struct Document {
    name: String,
    tokens: Vec<String>,
    shingles: ShingleSet,
    window_size: WindowSize,
    num_windows: usize,
    truncation: Truncation,
}

impl Document {
    /// Runs normalization, tokenization and shingling over `text` with the settings of `config`.
    ///
    /// # Errors
    ///
    /// An error is returned if `config` fails [`OverlapConfig::validate`].
    pub fn new<N, T>(name: N, text: T, config: &OverlapConfig) -> Result<Self>
    where
        N: Into<String>,
        T: AsRef<str>,
    {
        config.validate()?;
        let tokenizer = Tokenizer::new(config);
        Self::from_tokens(
            name,
            tokenizer.tokenize(text.as_ref()),
            WindowSize::new(config.k),
            config.num_buckets,
        )
    }

    /// Shingles an already tokenized text.
    pub fn from_tokens<N>(
        name: N,
        tokenized: Tokenized,
        window_size: WindowSize,
        num_buckets: usize,
    ) -> Result<Self>
    where
        N: Into<String>,
    {
        let name = name.into();
        let Tokenized { tokens, truncation } = tokenized;
        if truncation.is_truncated() {
            warn!(
                "Input of {name} truncated: {} chars dropped, {} tokens dropped, {} tokens shortened",
                truncation.text_chars_dropped, truncation.tokens_dropped, truncation.tokens_shortened
            );
        }

        let mut shingles = ShingleSet::with_buckets(num_buckets)?;
        let num_windows = generate_shingles(&tokens, window_size, &mut shingles);
        debug!(
            "Processed {name}: {} tokens, {} k-grams",
            tokens.len(),
            shingles.len()
        );

        Ok(Self {
            name,
            tokens,
            shingles,
            window_size,
            num_windows,
            truncation,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub const fn shingles(&self) -> &ShingleSet {
        &self.shingles
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Gets the number of distinct shingles.
    pub const fn shingle_count(&self) -> usize {
        self.shingles.len()
    }

    /// Gets the number of shingle windows, counting repeats.
    pub const fn window_count(&self) -> usize {
        self.num_windows
    }

    pub const fn truncation(&self) -> Truncation {
        self.truncation
    }

    /// Gets the window size the shingles were generated with.
    pub const fn window_size(&self) -> WindowSize {
        self.window_size
    }

    /// Summarizes this document for a report.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            filename: self.name.clone(),
            tokens: self.token_count(),
            kgrams: self.shingle_count(),
            k_value: self.window_size.get(),
            truncation: self.truncation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline() {
        let doc = Document::new(
            "fox.txt",
            "The quick brown fox jumps over the lazy dog",
            &OverlapConfig::default(),
        )
        .unwrap();
        assert_eq!(doc.name(), "fox.txt");
        assert_eq!(doc.token_count(), 7);
        assert_eq!(doc.shingle_count(), 5);
        assert_eq!(doc.window_count(), 5);
        assert!(!doc.truncation().is_truncated());
    }

    #[test]
    fn test_repeats_collapse() {
        let doc = Document::new("echo", "go team go team go team", &OverlapConfig::default().with_k(2))
            .unwrap();
        assert_eq!(doc.token_count(), 6);
        assert_eq!(doc.window_count(), 5);
        // "go team" and "team go".
        assert_eq!(doc.shingle_count(), 2);
    }

    #[test]
    fn test_clamped_k() {
        let config = OverlapConfig::default().with_k(1);
        let doc = Document::new("d", "one two three four", &config).unwrap();
        assert_eq!(doc.shingle_count(), 2);
        assert_eq!(doc.window_size().get(), 3);
        assert_eq!(doc.stats().k_value, 3);
    }

    #[test]
    fn test_k_value_from_shingling() {
        let tokenized = Tokenizer::default().tokenize("one two three four five");
        let doc = Document::from_tokens("d", tokenized, WindowSize::new(4), 31).unwrap();
        assert_eq!(doc.shingle_count(), 2);
        assert_eq!(doc.stats().k_value, 4);
    }

    #[test]
    fn test_empty() {
        let doc = Document::new("empty", "the and of", &OverlapConfig::default()).unwrap();
        assert_eq!(doc.token_count(), 0);
        assert_eq!(doc.shingle_count(), 0);
        assert_eq!(doc.window_count(), 0);
    }

    #[test]
    fn test_zero_buckets() {
        let config = OverlapConfig::default().with_num_buckets(0);
        assert!(Document::new("d", "some text here", &config).is_err());
    }

    #[test]
    fn test_invalid_limits() {
        let config = OverlapConfig::default().with_max_token_chars(0);
        assert!(Document::new("d", "alpha beta gamma delta", &config).is_err());
        let config = OverlapConfig::default().with_max_tokens(0);
        assert!(Document::new("d", "alpha beta gamma delta", &config).is_err());
    }

    #[test]
    fn test_stats() {
        let config = OverlapConfig::default().with_max_tokens(4);
        let doc = Document::new("t.txt", "alpha beta gamma delta epsilon", &config).unwrap();
        let stats = doc.stats();
        assert_eq!(stats.k_value, 3);
        assert_eq!(stats.filename, "t.txt");
        assert_eq!(stats.tokens, 4);
        assert_eq!(stats.kgrams, 2);
        assert_eq!(stats.truncation.tokens_dropped, 1);
    }
}
