//! Detects textual overlap between a target document and reference documents.
//!
//! Texts are normalized, tokenized without stopwords, and cut into word shingles.
//! Every target/reference pair is scored with Jaccard, cosine, containment and Dice
//! over the shingle sets, and shared multi-word phrases are extracted as evidence.
//!
//! # Examples
//!
//! ```
//! use find_overlap::{OverlapChecker, OverlapConfig};
//!
//! let report = OverlapChecker::new(OverlapConfig::default())
//!     .unwrap()
//!     .target("essay.txt", "The quick brown fox jumps over the lazy dog.")
//!     .unwrap()
//!     .reference("source.txt", "A quick brown fox jumps over a sleeping cat.")
//!     .unwrap()
//!     .compare()
//!     .unwrap();
//!
//! let cmp = &report.comparisons[0];
//! assert_eq!(cmp.matching_kgrams, 3);
//! assert_eq!(cmp.common_phrases, vec!["quick brown fox jumps over"]);
//! ```
pub mod checker;
pub mod config;
pub mod document;
pub mod errors;
pub mod normalize;
pub mod phrase;
pub mod report;
pub mod shingling;
pub mod similarity;
pub mod tokenize;

pub use checker::{compare_documents, OverlapChecker};
pub use config::OverlapConfig;
pub use document::Document;
pub use errors::{FindOverlapError, Result};
pub use phrase::PhraseFinder;
pub use report::{Comparison, DocumentStats, Report};
pub use shingling::WindowSize;
pub use similarity::SimilarityScores;
pub use tokenize::{Tokenized, Tokenizer, Truncation};

pub use shingle_set::ShingleSet;
