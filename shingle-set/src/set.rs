//! The chaining set and its set algebra.
use crate::errors::{Result, ShingleSetError};

/// Default number of buckets, a prime.
pub const DEFAULT_NUM_BUCKETS: usize = 10007;

const DJB2_INIT: u32 = 5381;

/// Computes the djb2 hash of `s` (`h = h * 33 + byte`, wrapping at 32 bits).
///
/// # Examples
///
/// ```
/// use shingle_set::djb2;
///
/// assert_eq!(djb2(""), 5381);
/// assert_eq!(djb2("a"), 5381 * 33 + 97);
/// ```
#[inline(always)]
pub fn djb2(s: &str) -> u32 {
    s.bytes().fold(DJB2_INIT, |h, b| {
        (h << 5).wrapping_add(h).wrapping_add(u32::from(b))
    })
}

/// A set of distinct strings with separate chaining over a fixed bucket table.
#[derive(Clone, Debug)]
pub struct ShingleSet {
    buckets: Vec<Vec<Box<str>>>,
    len: usize,
}

impl Default for ShingleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ShingleSet {
    /// Creates an empty set with [`DEFAULT_NUM_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self {
            buckets: vec![vec![]; DEFAULT_NUM_BUCKETS],
            len: 0,
        }
    }

    /// Creates an empty set with `num_buckets` buckets.
    ///
    /// # Errors
    ///
    /// An error is returned if `num_buckets` is 0.
    pub fn with_buckets(num_buckets: usize) -> Result<Self> {
        if num_buckets == 0 {
            return Err(ShingleSetError::input("The number of buckets must not be 0."));
        }
        Ok(Self {
            buckets: vec![vec![]; num_buckets],
            len: 0,
        })
    }

    #[inline(always)]
    fn bucket_of(&self, s: &str) -> usize {
        djb2(s) as usize % self.buckets.len()
    }

    /// Inserts `s` unless an equal string is already present.
    /// Returns `true` if it was newly inserted.
    pub fn add<S>(&mut self, s: S) -> bool
    where
        S: AsRef<str>,
    {
        let s = s.as_ref();
        let idx = self.bucket_of(s);
        let chain = &mut self.buckets[idx];
        if chain.iter().any(|e| e.as_ref() == s) {
            return false;
        }
        chain.push(s.into());
        self.len += 1;
        true
    }

    /// Checks if a string equal to `s` is in the set.
    pub fn contains(&self, s: &str) -> bool {
        self.buckets[self.bucket_of(s)]
            .iter()
            .any(|e| e.as_ref() == s)
    }

    /// Gets the number of distinct strings.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the set is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the number of buckets, fixed at construction.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Gets the length of the longest chain.
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterates over the strings in bucket order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
        }
    }
}

/// Iterator over the strings of a [`ShingleSet`], created by [`ShingleSet::iter`].
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Vec<Box<str>>>,
    chain: std::slice::Iter<'a, Box<str>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                return Some(e.as_ref());
            }
            self.chain = self.buckets.next()?.iter();
        }
    }
}

impl<'a> IntoIterator for &'a ShingleSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> Extend<S> for ShingleSet
where
    S: AsRef<str>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
    {
        for s in iter {
            self.add(s);
        }
    }
}

impl<S> FromIterator<S> for ShingleSet
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Counts the strings present in both sets.
///
/// The smaller set is scanned and probed against the larger one,
/// so the result does not depend on the argument order.
pub fn intersection_size(lhs: &ShingleSet, rhs: &ShingleSet) -> usize {
    let (outer, inner) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    outer.iter().filter(|s| inner.contains(s)).count()
}

/// Counts the strings present in either set, by inclusion–exclusion.
pub fn union_size(lhs: &ShingleSet, rhs: &ShingleSet) -> usize {
    lhs.len() + rhs.len() - intersection_size(lhs, rhs)
}
