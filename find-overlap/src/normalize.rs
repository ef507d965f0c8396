//! Text normalization and stopwords.
use hashbrown::HashSet;

/// English function words excluded from token sequences.
pub const ENGLISH_STOPWORDS: [&str; 58] = [
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "as", "is", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them", "this", "that", "these", "those", "my",
    "your", "his", "its", "our", "their", "am", "are",
];

/// Lowercases `text`, drops every character that is neither alphabetic, an apostrophe,
/// nor whitespace, and collapses whitespace runs into a single space.
///
/// # Examples
///
/// ```
/// use find_overlap::normalize::normalize;
///
/// assert_eq!(normalize("Don't\tPANIC -- 42 times!"), "don't panic times");
/// ```
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                normalized.push(' ');
                in_space = true;
            }
        } else if is_word_char(c) {
            // Lowercasing may expand into combining marks, e.g. 'İ' to "i\u{307}".
            normalized.extend(c.to_lowercase().filter(|&l| is_word_char(l)));
            in_space = false;
        }
    }
    normalized
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\''
}

/// Case-insensitive stopword lookup.
#[derive(Clone, Debug)]
pub struct StopwordFilter {
    words: HashSet<&'static str>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Creates a filter over [`ENGLISH_STOPWORDS`].
    pub fn english() -> Self {
        Self {
            words: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Checks if `word` is a stopword, ignoring case.
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(word.to_lowercase().as_str())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
