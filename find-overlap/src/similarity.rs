//! Set similarities over shingle sets.
//!
//! Every measure is derived from `|A|`, `|B|` and `|A ∩ B|`, and is defined as 0
//! when an operand it divides by is empty, so all values lie in `[0, 1]`.
//! `containment` treats `A` as the subject and is the only asymmetric measure.
use shingle_set::{intersection_size, ShingleSet};

/// Computes `|A ∩ B| / |A ∪ B|`.
///
/// # Examples
///
/// ```
/// use find_overlap::similarity::jaccard;
/// use shingle_set::ShingleSet;
///
/// let a: ShingleSet = ["a b", "b c", "c d"].into_iter().collect();
/// let b: ShingleSet = ["b c", "c d", "d e"].into_iter().collect();
/// assert_eq!(jaccard(&a, &b), 0.5);
/// ```
pub fn jaccard(a: &ShingleSet, b: &ShingleSet) -> f64 {
    Cardinalities::of(a, b).jaccard()
}

/// Computes `|A ∩ B| / sqrt(|A| |B|)`.
pub fn cosine(a: &ShingleSet, b: &ShingleSet) -> f64 {
    Cardinalities::of(a, b).cosine()
}

/// Computes `|A ∩ B| / |A|`.
pub fn containment(a: &ShingleSet, b: &ShingleSet) -> f64 {
    Cardinalities::of(a, b).containment()
}

/// Computes `2 |A ∩ B| / (|A| + |B|)`.
pub fn dice(a: &ShingleSet, b: &ShingleSet) -> f64 {
    Cardinalities::of(a, b).dice()
}

#[derive(Clone, Copy, Debug)]
struct Cardinalities {
    a: usize,
    b: usize,
    intersection: usize,
}

impl Cardinalities {
    fn of(a: &ShingleSet, b: &ShingleSet) -> Self {
        Self {
            a: a.len(),
            b: b.len(),
            intersection: intersection_size(a, b),
        }
    }

    const fn either_empty(&self) -> bool {
        self.a == 0 || self.b == 0
    }

    fn jaccard(&self) -> f64 {
        if self.either_empty() {
            return 0.;
        }
        let union = self.a + self.b - self.intersection;
        self.intersection as f64 / union as f64
    }

    fn cosine(&self) -> f64 {
        if self.either_empty() {
            return 0.;
        }
        let magnitude = (self.a as f64).sqrt() * (self.b as f64).sqrt();
        // Rounding may push the identical-set case a hair above 1.
        (self.intersection as f64 / magnitude).min(1.)
    }

    fn containment(&self) -> f64 {
        if self.a == 0 {
            return 0.;
        }
        self.intersection as f64 / self.a as f64
    }

    fn dice(&self) -> f64 {
        if self.either_empty() {
            return 0.;
        }
        (2 * self.intersection) as f64 / (self.a + self.b) as f64
    }
}

/// All similarity measures of one target/reference pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimilarityScores {
    pub jaccard: f64,
    pub cosine: f64,
    pub containment: f64,
    pub dice: f64,
    /// Arithmetic mean of the four measures.
    pub overall: f64,
    /// `|A ∩ B|`.
    pub matching_shingles: usize,
}

impl SimilarityScores {
    /// Scores `target` against `reference`, computing the intersection once.
    pub fn compute(target: &ShingleSet, reference: &ShingleSet) -> Self {
        let c = Cardinalities::of(target, reference);
        let jaccard = c.jaccard();
        let cosine = c.cosine();
        let containment = c.containment();
        let dice = c.dice();
        Self {
            jaccard,
            cosine,
            containment,
            dice,
            overall: (jaccard + cosine + containment + dice) / 4.,
            matching_shingles: c.intersection,
        }
    }
}
