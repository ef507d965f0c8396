//! Word shingling (w-shingling over token sequences).
use shingle_set::ShingleSet;
use tracing::warn;

/// Smallest accepted window size.
pub const MIN_WINDOW_SIZE: usize = 2;
/// Largest accepted window size.
pub const MAX_WINDOW_SIZE: usize = 10;
/// Window size used when the requested one is out of range.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Number of tokens per shingle, always in `[MIN_WINDOW_SIZE, MAX_WINDOW_SIZE]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    k: usize,
    requested: usize,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl WindowSize {
    /// Accepts `k` if in range, falling back to [`DEFAULT_WINDOW_SIZE`] otherwise.
    pub fn new(k: usize) -> Self {
        if (MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&k) {
            return Self { k, requested: k };
        }
        warn!(
            "Invalid window size {k}, must be in [{MIN_WINDOW_SIZE}, {MAX_WINDOW_SIZE}]. \
             Using default k={DEFAULT_WINDOW_SIZE}."
        );
        Self {
            k: DEFAULT_WINDOW_SIZE,
            requested: k,
        }
    }

    pub const fn get(self) -> usize {
        self.k
    }

    pub const fn requested(self) -> usize {
        self.requested
    }

    /// Checks if the requested size was replaced by the default.
    pub const fn was_clamped(self) -> bool {
        self.k != self.requested
    }
}

/// Joins tokens with single spaces.
pub fn join_tokens<S>(tokens: &[S]) -> String
where
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, t) in tokens.iter().enumerate() {
        if i != 0 {
            joined.push(' ');
        }
        joined.push_str(t.as_ref());
    }
    joined
}

/// Iterator of the space-joined windows of `window_size` consecutive tokens,
/// sliding by one token.
pub struct ShingleIter<'a, S> {
    tokens: &'a [S],
    window_size: usize,
    position: usize,
}

impl<'a, S> ShingleIter<'a, S> {
    pub const fn new(tokens: &'a [S], window_size: usize) -> Self {
        Self {
            tokens,
            window_size,
            position: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.window_size == 0 {
            return 0;
        }
        (self.tokens.len() + 1).saturating_sub(self.position + self.window_size)
    }
}

impl<'a, S> Iterator for ShingleIter<'a, S>
where
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let window = &self.tokens[self.position..self.position + self.window_size];
        self.position += 1;
        Some(join_tokens(window))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, S> ExactSizeIterator for ShingleIter<'a, S> where S: AsRef<str> {}

/// Adds every shingle of `tokens` to `shingles`, returning the number of windows.
///
/// The window count is `max(0, tokens.len() - k + 1)`; the set may grow by less
/// when windows repeat.
pub fn generate_shingles<S>(tokens: &[S], window_size: WindowSize, shingles: &mut ShingleSet) -> usize
where
    S: AsRef<str>,
{
    let mut num_windows = 0;
    for shingle in ShingleIter::new(tokens, window_size.get()) {
        shingles.add(shingle);
        num_windows += 1;
    }
    num_windows
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};

    #[test]
    fn test_q2() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 2);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some("a b".to_string()));
        assert_eq!(iter.next(), Some("b c".to_string()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_q3() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 3);
        assert_eq!(iter.next(), Some("a b c".to_string()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_q4() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 4);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_q0() {
        let tokens = vec!["a"];
        assert_eq!(ShingleIter::new(&tokens, 0).count(), 0);
    }

    #[test]
    fn test_window_size() {
        for k in 2..=10 {
            let w = WindowSize::new(k);
            assert_eq!(w.get(), k);
            assert!(!w.was_clamped());
        }
        for k in [0, 1, 11, 100] {
            let w = WindowSize::new(k);
            assert_eq!(w.get(), 3);
            assert_eq!(w.requested(), k);
            assert!(w.was_clamped());
        }
    }

    #[test]
    fn test_generate() {
        let tokens = vec!["quick", "brown", "fox", "jumps", "over", "lazy", "dog"];
        let mut set = ShingleSet::new();
        let n = generate_shingles(&tokens, WindowSize::new(3), &mut set);
        assert_eq!(n, 5);
        assert_eq!(set.len(), 5);
        assert!(set.contains("quick brown fox"));
        assert!(set.contains("over lazy dog"));
    }

    #[test]
    fn test_generate_repeated() {
        let tokens = vec!["la", "la", "la", "la", "la"];
        let mut set = ShingleSet::new();
        assert_eq!(generate_shingles(&tokens, WindowSize::new(2), &mut set), 4);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_generate_short() {
        let tokens = vec!["cat"];
        let mut set = ShingleSet::new();
        assert_eq!(generate_shingles(&tokens, WindowSize::new(3), &mut set), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_count_random() {
        let mut rng = rand_xoshiro::SplitMix64::seed_from_u64(7);
        for _ in 0..100 {
            let n: usize = rng.gen_range(0..40);
            let k = rng.gen_range(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE);
            let distinct: Vec<_> = (0..n).map(|i| format!("t{i}")).collect();
            let mut set = ShingleSet::with_buckets(61).unwrap();
            let windows = generate_shingles(&distinct, WindowSize::new(k), &mut set);
            assert_eq!(windows, (n + 1).saturating_sub(k));
            assert_eq!(set.len(), windows);

            let vocab = rng.gen_range(1..4);
            let repeated: Vec<_> = (0..n).map(|_| format!("t{}", rng.gen_range(0..vocab))).collect();
            let mut set = ShingleSet::with_buckets(61).unwrap();
            let windows = generate_shingles(&repeated, WindowSize::new(k), &mut set);
            assert_eq!(windows, (n + 1).saturating_sub(k));
            assert!(set.len() <= windows);
        }
    }

    #[test]
    fn test_join() {
        assert_eq!(join_tokens::<&str>(&[]), "");
        assert_eq!(join_tokens(&["x"]), "x");
        assert_eq!(join_tokens(&["x", "y", "z"]), "x y z");
    }
}
