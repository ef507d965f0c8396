//! Serializable results of a comparison run.
//!
//! Ratios are serialized with four decimals.
use serde::{Deserialize, Serialize, Serializer};

use crate::similarity::SimilarityScores;
use crate::tokenize::Truncation;

/// Summary counts of one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub filename: String,
    pub tokens: usize,
    /// Distinct shingles.
    pub kgrams: usize,
    /// Effective shingle size.
    pub k_value: usize,
    pub truncation: Truncation,
}

/// Result of comparing the target with one reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Name of the reference document.
    pub filename: String,
    #[serde(serialize_with = "round4")]
    pub jaccard: f64,
    #[serde(serialize_with = "round4")]
    pub cosine: f64,
    #[serde(serialize_with = "round4")]
    pub containment: f64,
    #[serde(serialize_with = "round4")]
    pub dice: f64,
    #[serde(serialize_with = "round4")]
    pub overall: f64,
    pub matching_kgrams: usize,
    pub common_phrases: Vec<String>,
}

impl Comparison {
    pub fn new(filename: String, scores: SimilarityScores, common_phrases: Vec<String>) -> Self {
        Self {
            filename,
            jaccard: scores.jaccard,
            cosine: scores.cosine,
            containment: scores.containment,
            dice: scores.dice,
            overall: scores.overall,
            matching_kgrams: scores.matching_shingles,
            common_phrases,
        }
    }
}

/// Report of a whole run: the target summary and one comparison per reference,
/// in the order the references were added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub target_stats: DocumentStats,
    pub comparisons: Vec<Comparison>,
    /// References rejected because the reference limit was reached.
    #[serde(default)]
    pub references_dropped: usize,
}

impl Report {
    /// Gets the comparison with the highest overall score.
    pub fn most_similar(&self) -> Option<&Comparison> {
        self.comparisons
            .iter()
            .max_by(|a, b| a.overall.total_cmp(&b.overall))
    }
}

fn round4<S>(x: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((x * 1e4).round() / 1e4)
}
