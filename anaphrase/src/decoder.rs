use crate::set::StringSet;
use crate::words::Dictionary;

/// Depth-first search over every way to partition the input's characters
/// into an ordered sequence of dictionary words.
///
/// The decoder is an iterator: each `next()` runs the search forward until
/// a phrase nobody has seen before falls out, then yields it. Phrases come
/// out in a fixed order: at each branch point the character is first tried
/// as the end of the current word, then as its continuation, with candidate
/// positions taken left to right.
///
/// A literal space in the input is just another character of the multiset.
/// Since the separator is also a space, any word built around one fails the
/// dictionary check, so inputs containing spaces produce no phrases unless
/// the dictionary itself holds space-bearing entries.
pub struct PhraseDecoder<'dict> {
    dictionary: &'dict Dictionary,
    /// Complete phrases already emitted, plus partial phrases already
    /// walked. Partials keep their trailing separator, so the two kinds of
    /// key never collide.
    found: StringSet,
    stack: Vec<SearchState>,
}

/// One pending node of the search tree.
struct SearchState {
    /// Completed words joined by single spaces, optionally followed by an
    /// unfinished word fragment, or by a trailing space right after a word
    /// was closed.
    prefix: String,
    /// Input characters not yet committed to `prefix`, in arbitrary but
    /// fixed order. Shrinks by one character per level, which bounds the
    /// search.
    remaining: String,
}

impl<'dict> PhraseDecoder<'dict> {
    pub fn new(dictionary: &'dict Dictionary, input: &str) -> Self {
        PhraseDecoder {
            dictionary,
            found: StringSet::new(),
            stack: vec![SearchState {
                prefix: String::new(),
                remaining: input.to_owned(),
            }],
        }
    }

    /// Expand one search node; returns a phrase if this node completed one.
    fn step(&mut self, state: SearchState) -> Option<String> {
        let SearchState { prefix, remaining } = state;

        if remaining.chars().count() <= 1 {
            return self.close_phrase(prefix, &remaining);
        }

        if let Some(closed) = prefix.strip_suffix(' ') {
            // A word was just closed: it has to exist, and this partial
            // phrase must not have been walked before via some other
            // ordering of the same characters.
            if !self.dictionary.contains_word(last_word(closed)) || self.found.contains(&prefix) {
                return None;
            }
            self.found.insert(&prefix);
        } else if !prefix.is_empty() {
            // Unfinished fragment: prune unless some dictionary word can
            // still grow out of it.
            if !self.dictionary.contains_prefix(last_word(&prefix)) {
                return None;
            }
        }

        // Push children in reverse so they pop in search order: positions
        // left to right, word-end before continuation.
        for (at, c) in remaining.char_indices().rev() {
            let mut rest = String::with_capacity(remaining.len());
            rest.push_str(&remaining[..at]);
            rest.push_str(&remaining[at + c.len_utf8()..]);

            self.stack.push(SearchState {
                prefix: format!("{}{}", prefix, c),
                remaining: rest.clone(),
            });
            self.stack.push(SearchState {
                prefix: format!("{}{} ", prefix, c),
                remaining: rest,
            });
        }
        None
    }

    /// Terminal node: at most one character left, so the phrase is decided
    /// here one way or the other.
    fn close_phrase(&mut self, prefix: String, remaining: &str) -> Option<String> {
        if let Some(closed) = prefix.strip_suffix(' ') {
            if !self.dictionary.contains_word(last_word(closed)) || self.found.contains(&prefix) {
                return None;
            }
        }

        let mut candidate = prefix;
        candidate.push_str(remaining);
        if self.dictionary.contains_word(last_word(&candidate)) && !self.found.contains(&candidate)
        {
            self.found.insert(&candidate);
            return Some(candidate);
        }
        None
    }
}

impl Iterator for PhraseDecoder<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(state) = self.stack.pop() {
            if let Some(phrase) = self.step(state) {
                return Some(phrase);
            }
        }
        None
    }
}

/// The word after the last separator, or the whole string if there is none.
fn last_word(phrase: &str) -> &str {
    match phrase.rfind(' ') {
        Some(at) => &phrase[at + 1..],
        None => phrase,
    }
}
