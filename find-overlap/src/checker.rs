//! Comparison of one target document against reference documents.
use tracing::{info, warn};

use crate::config::OverlapConfig;
use crate::document::Document;
use crate::errors::{FindOverlapError, Result};
use crate::phrase::PhraseFinder;
use crate::report::{Comparison, Report};
use crate::shingling::WindowSize;
use crate::similarity::SimilarityScores;
use crate::tokenize::Tokenizer;

/// Compares `target` with `reference`.
///
/// This is a pure function of the two documents, so pairs can be evaluated in any order.
pub fn compare_documents(target: &Document, reference: &Document, finder: &PhraseFinder) -> Comparison {
    let scores = SimilarityScores::compute(target.shingles(), reference.shingles());
    let phrases = finder.find(target.tokens(), reference.tokens());
    Comparison::new(reference.name().to_string(), scores, phrases)
}

/// Checker of overlap between a target document and up to `max_references` references.
///
/// # Examples
///
/// ```
/// use find_overlap::{OverlapChecker, OverlapConfig};
///
/// let report = OverlapChecker::new(OverlapConfig::default().with_k(2))
///     .unwrap()
///     .target("t", "Colorless green ideas sleep furiously.")
///     .unwrap()
///     .reference("r1", "Green ideas sleep.")
///     .unwrap()
///     .reference("r2", "Nothing in common here.")
///     .unwrap()
///     .compare()
///     .unwrap();
///
/// assert_eq!(report.target_stats.kgrams, 4);
/// assert_eq!(report.comparisons[0].matching_kgrams, 2);
/// assert_eq!(report.comparisons[1].overall, 0.);
/// ```
pub struct OverlapChecker {
    config: OverlapConfig,
    tokenizer: Tokenizer,
    window_size: WindowSize,
    finder: PhraseFinder,
    target: Option<Document>,
    references: Vec<Document>,
    references_dropped: usize,
}

impl OverlapChecker {
    /// Creates an instance.
    ///
    /// # Errors
    ///
    /// An error is returned if `config` fails [`OverlapConfig::validate`].
    pub fn new(config: OverlapConfig) -> Result<Self> {
        config.validate()?;
        let window_size = WindowSize::new(config.k);
        let finder = PhraseFinder::from_config(&config);
        Ok(Self {
            tokenizer: Tokenizer::new(&config),
            config,
            window_size,
            finder,
            target: None,
            references: vec![],
            references_dropped: 0,
        })
    }

    /// Sets the target document, replacing a previous one.
    pub fn target<N, T>(mut self, name: N, text: T) -> Result<Self>
    where
        N: Into<String>,
        T: AsRef<str>,
    {
        let doc = self.build(name, text)?;
        info!(
            "Target processed: {} tokens, {} k-grams",
            doc.token_count(),
            doc.shingle_count()
        );
        self.target = Some(doc);
        Ok(self)
    }

    /// Adds a reference document. References past `max_references` are dropped
    /// with a warning and counted in [`Report::references_dropped`].
    pub fn reference<N, T>(mut self, name: N, text: T) -> Result<Self>
    where
        N: Into<String>,
        T: AsRef<str>,
    {
        let name = name.into();
        if self.references.len() >= self.config.max_references {
            warn!(
                "Too many references, limited to {}. Dropping {name}.",
                self.config.max_references
            );
            self.references_dropped += 1;
            return Ok(self);
        }
        let doc = self.build(name, text)?;
        info!(
            "Reference processed: {} tokens, {} k-grams",
            doc.token_count(),
            doc.shingle_count()
        );
        self.references.push(doc);
        Ok(self)
    }

    fn build<N, T>(&self, name: N, text: T) -> Result<Document>
    where
        N: Into<String>,
        T: AsRef<str>,
    {
        let tokenized = self.tokenizer.tokenize(text.as_ref());
        Document::from_tokens(name, tokenized, self.window_size, self.config.num_buckets)
    }

    /// Compares the target with every reference, in insertion order.
    ///
    /// # Errors
    ///
    /// An error is returned if no target was set.
    pub fn compare(&self) -> Result<Report> {
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| FindOverlapError::input("The target document must be set."))?;

        let comparisons = self
            .references
            .iter()
            .map(|reference| {
                let cmp = compare_documents(target, reference, &self.finder);
                info!(
                    "Compared with {}: {:.1}% similar",
                    cmp.filename,
                    cmp.overall * 100.
                );
                cmp
            })
            .collect();

        Ok(Report {
            target_stats: target.stats(),
            comparisons,
            references_dropped: self.references_dropped,
        })
    }

    pub const fn config(&self) -> &OverlapConfig {
        &self.config
    }

    pub const fn window_size(&self) -> WindowSize {
        self.window_size
    }

    pub const fn target_document(&self) -> Option<&Document> {
        self.target.as_ref()
    }

    pub fn references(&self) -> &[Document] {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    fn checker() -> OverlapChecker {
        OverlapChecker::new(OverlapConfig::default()).unwrap()
    }

    #[test]
    fn test_identical() {
        let report = checker()
            .target("t", FOX)
            .unwrap()
            .reference("r", FOX)
            .unwrap()
            .compare()
            .unwrap();
        assert_eq!(report.target_stats.tokens, 7);
        assert_eq!(report.target_stats.kgrams, 5);
        let cmp = &report.comparisons[0];
        assert_eq!(cmp.jaccard, 1.);
        assert_eq!(cmp.cosine, 1.);
        assert_eq!(cmp.containment, 1.);
        assert_eq!(cmp.dice, 1.);
        assert_eq!(cmp.overall, 1.);
        assert_eq!(cmp.matching_kgrams, 5);
        assert!(cmp
            .common_phrases
            .iter()
            .any(|p| p.split(' ').count() >= 5));
    }

    #[test]
    fn test_too_short() {
        let report = checker()
            .target("t", "cat")
            .unwrap()
            .reference("r", "dog")
            .unwrap()
            .compare()
            .unwrap();
        let cmp = &report.comparisons[0];
        assert_eq!(report.target_stats.kgrams, 0);
        assert_eq!(cmp.jaccard, 0.);
        assert_eq!(cmp.cosine, 0.);
        assert_eq!(cmp.containment, 0.);
        assert_eq!(cmp.dice, 0.);
        assert!(cmp.common_phrases.is_empty());
    }

    #[test]
    fn test_disjoint() {
        let report = checker()
            .target("t", "apples oranges bananas cherries grapes")
            .unwrap()
            .reference("r", "hammers nails screws bolts washers rivets")
            .unwrap()
            .compare()
            .unwrap();
        let cmp = &report.comparisons[0];
        assert_eq!(cmp.matching_kgrams, 0);
        assert_eq!(cmp.overall, 0.);
    }

    #[test]
    fn test_order_and_containment_direction() {
        let report = checker()
            .target("t", "one two three four five six")
            .unwrap()
            .reference("superset", "zero one two three four five six seven eight")
            .unwrap()
            .reference("subset", "two three four")
            .unwrap()
            .reference("unrelated", "red green blue")
            .unwrap()
            .compare()
            .unwrap();
        let names: Vec<_> = report.comparisons.iter().map(|c| c.filename.as_str()).collect();
        assert_eq!(names, vec!["superset", "subset", "unrelated"]);
        // Every target shingle is in the superset.
        assert_eq!(report.comparisons[0].containment, 1.);
        // Only one of four target shingles is in the subset.
        assert_eq!(report.comparisons[1].containment, 0.25);
        assert_eq!(report.comparisons[2].containment, 0.);
        assert_eq!(report.most_similar().unwrap().filename, "superset");
    }

    #[test]
    fn test_max_references() {
        let mut checker = OverlapChecker::new(OverlapConfig::default().with_max_references(2))
            .unwrap()
            .target("t", FOX)
            .unwrap();
        for i in 0..4 {
            checker = checker.reference(format!("r{i}"), FOX).unwrap();
        }
        assert_eq!(checker.references().len(), 2);
        let report = checker.compare().unwrap();
        assert_eq!(report.comparisons.len(), 2);
        assert_eq!(report.references_dropped, 2);
    }

    #[test]
    fn test_no_target() {
        assert!(checker().reference("r", FOX).unwrap().compare().is_err());
    }

    #[test]
    fn test_invalid_config() {
        assert!(OverlapChecker::new(OverlapConfig::default().with_num_buckets(0)).is_err());
    }

    #[test]
    fn test_clamped_k_in_report() {
        let report = OverlapChecker::new(OverlapConfig::default().with_k(11))
            .unwrap()
            .target("t", FOX)
            .unwrap()
            .compare()
            .unwrap();
        assert_eq!(report.target_stats.k_value, 3);
        assert!(report.comparisons.is_empty());
    }

    #[test]
    fn test_truncation_reported() {
        let report = OverlapChecker::new(OverlapConfig::default().with_max_tokens(3))
            .unwrap()
            .target("t", FOX)
            .unwrap()
            .compare()
            .unwrap();
        assert_eq!(report.target_stats.tokens, 3);
        assert_eq!(report.target_stats.truncation.tokens_dropped, 4);
    }
}
