//! Word list loading and validation.
//!
//! A word list is an ordered sequence of distinct words. It is built once,
//! validated, and immutable afterwards, so it can be shared read-only across
//! concurrent encoding calls.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::WordListError;

/// Minimum number of usable words a list must contain.
pub const MIN_WORDS: usize = 2;

/// An ordered, immutable list of distinct words.
///
/// Duplicate detection is case-folded: `"Apple"` and `"apple"` count as the
/// same word. The stored words keep their original spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file, one word per line.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are
    /// ignored. Diceware-style lines (`12345\tword`) contribute their last
    /// whitespace-separated token.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Build a word list from an in-memory sequence.
    ///
    /// Entries are trimmed; empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self::validate(words)
    }

    /// Parse word-list file contents.
    fn parse(text: &str) -> Result<Self, WordListError> {
        let mut words = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // Diceware lists prefix each word with dice digits.
            if let Some(token) = line.split_whitespace().last() {
                words.push(token.to_string());
            }
        }
        Self::validate(words)
    }

    fn validate(words: Vec<String>) -> Result<Self, WordListError> {
        if words.len() < MIN_WORDS {
            return Err(WordListError::TooFewWords { found: words.len() });
        }
        let mut seen = HashSet::with_capacity(words.len());
        for word in &words {
            if !seen.insert(word.to_lowercase()) {
                return Err(WordListError::DuplicateWord(word.clone()));
            }
        }
        Ok(Self { words })
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty. Always false for a validated list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up the word at a 0-based index.
    ///
    /// Unreachable via correct selector arithmetic, which reduces every
    /// index modulo [`len`](Self::len).
    pub fn word_at(&self, index: usize) -> Result<&str, WordListError> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(WordListError::IndexOutOfRange {
                index,
                len: self.words.len(),
            })
    }

    /// The full word sequence, in list order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_words_reports_size() {
        let list = WordList::from_words(["alpha", "bravo", "charlie"]).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.word_at(0).unwrap(), "alpha");
        assert_eq!(list.word_at(2).unwrap(), "charlie");
    }

    #[test]
    fn test_rejects_too_few_words() {
        let result = WordList::from_words(["solo"]);
        assert!(matches!(
            result,
            Err(WordListError::TooFewWords { found: 1 })
        ));

        let result = WordList::from_words(Vec::<&str>::new());
        assert!(matches!(
            result,
            Err(WordListError::TooFewWords { found: 0 })
        ));
    }

    #[test]
    fn test_rejects_duplicates_case_folded() {
        let result = WordList::from_words(["alpha", "bravo", "Alpha"]);
        assert!(matches!(
            result,
            Err(WordListError::DuplicateWord(w)) if w == "Alpha"
        ));
    }

    #[test]
    fn test_trims_and_skips_empty_entries() {
        let list = WordList::from_words(["  alpha ", "", "bravo\n", "   "]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.word_at(0).unwrap(), "alpha");
        assert_eq!(list.word_at(1).unwrap(), "bravo");
    }

    #[test]
    fn test_word_at_out_of_range() {
        let list = WordList::from_words(["alpha", "bravo"]).unwrap();
        assert!(matches!(
            list.word_at(2),
            Err(WordListError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let list = WordList::parse("# header\n\nalpha\n  bravo  \n# trailing\ncharlie\n").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.words(), &["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_parse_diceware_format() {
        let list = WordList::parse("11111\tabacus\n11112\tabdomen\n11113\tabide\n").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.word_at(1).unwrap(), "abdomen");
    }

    #[test]
    fn test_from_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "alpha\nbravo\ncharlie\n").unwrap();

        let list = WordList::from_file(file.path()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.word_at(0).unwrap(), "alpha");
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = WordList::from_file("/nonexistent/wordlist.txt");
        assert!(matches!(result, Err(WordListError::Io(_))));
    }

    #[test]
    fn test_loading_is_idempotent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "alpha\nbravo\ncharlie\ndelta\n").unwrap();

        let a = WordList::from_file(file.path()).unwrap();
        let b = WordList::from_file(file.path()).unwrap();
        assert_eq!(a.len(), b.len());
        for i in 0..a.len() {
            assert_eq!(a.word_at(i).unwrap(), b.word_at(i).unwrap());
        }
    }
}
