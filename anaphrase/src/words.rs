use std::io::{self, BufRead};
use std::path::Path;

use crate::set::StringSet;

/// Dictionary words plus every non-empty proper prefix of them, as two
/// existence sets. The prefix side is what lets a search abandon a word
/// fragment the moment no dictionary entry can complete it.
pub struct Dictionary {
    words: StringSet,
    prefixes: StringSet,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            words: StringSet::new(),
            prefixes: StringSet::new(),
        }
    }

    /// Insert `word` and derive its proper prefixes. Words are taken as-is:
    /// case-sensitive, no normalization.
    pub fn insert(&mut self, word: &str) {
        if self.words.insert(word) {
            for (split, _) in word.char_indices().skip(1) {
                self.prefixes.insert(&word[..split]);
            }
        }
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// True if `fragment` is a proper prefix of at least one word.
    pub fn contains_prefix(&self, fragment: &str) -> bool {
        self.prefixes.contains(fragment)
    }

    /// Number of words held (prefixes not counted).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a newline-delimited wordlist file into `dictionary`.
///
/// Blank lines are skipped; everything else is inserted verbatim. An I/O
/// error partway through leaves the words read so far in place, so a caller
/// can treat a failed load as a partial one.
pub fn load_wordlist<P>(filename: P, dictionary: &mut Dictionary) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let file = std::fs::File::open(filename)?;
    read_wordlist(io::BufReader::new(file), dictionary)
}

/// Line-by-line reader behind `load_wordlist`, split out so the words can
/// come from any buffered source.
pub fn read_wordlist<R: BufRead>(reader: R, dictionary: &mut Dictionary) -> io::Result<()> {
    for line in reader.lines() {
        let word = line?;
        if word.is_empty() {
            continue;
        }
        log::debug!("loaded word: {}", word);
        dictionary.insert(&word);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn derives_proper_prefixes() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("cats");

        assert!(dictionary.contains_word("cats"));
        assert!(dictionary.contains_prefix("c"));
        assert!(dictionary.contains_prefix("ca"));
        assert!(dictionary.contains_prefix("cat"));
        // "cats" itself is not a proper prefix, and "cat" is not a word.
        assert!(!dictionary.contains_prefix("cats"));
        assert!(!dictionary.contains_word("cat"));
    }

    #[test]
    fn single_character_word_has_no_prefixes() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("a");
        assert!(dictionary.contains_word("a"));
        assert!(!dictionary.contains_prefix("a"));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn reads_lines_and_skips_blanks() {
        let mut dictionary = Dictionary::new();
        read_wordlist(Cursor::new("cat\n\ndog\nact\n"), &mut dictionary).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains_word("cat"));
        assert!(dictionary.contains_word("dog"));
        assert!(dictionary.contains_word("act"));
        assert!(!dictionary.contains_word(""));
    }

    #[test]
    fn keeps_words_read_before_an_error() {
        // "cat" and "dog" parse fine; the invalid UTF-8 line errors out.
        let bytes: &[u8] = b"cat\ndog\n\xff\xfe\nact\n";
        let mut dictionary = Dictionary::new();
        let result = read_wordlist(Cursor::new(bytes), &mut dictionary);

        assert!(result.is_err());
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains_word("cat"));
        assert!(dictionary.contains_word("dog"));
        assert!(!dictionary.contains_word("act"));
    }

    #[test]
    fn words_are_case_sensitive() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("Cat");
        assert!(dictionary.contains_word("Cat"));
        assert!(!dictionary.contains_word("cat"));
        assert!(dictionary.contains_prefix("Ca"));
        assert!(!dictionary.contains_prefix("ca"));
    }
}
