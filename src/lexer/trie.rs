//! Trie-based classifier for reserved primitive keywords.

use crate::unicode;

/// The alphabetic primitives. Lookups are case-folded, so the casing here
/// is cosmetic.
pub const PRIMITIVES: &[&str] = &[
    "QUOTE", "SETQ", "PROGN", "IF", "COND", "LAMBDA", "MACRO", "ATOM", "EQ", "CAR", "CDR", "CONS",
    "PRINT",
];

/// Primitive spellings the letters-only trie cannot hold. The scanner
/// compares atom lexemes against these literally before consulting the
/// trie.
pub const SYMBOLIC_PRIMITIVES: &[&str] = &["=", "<=", ">="];

const ALPHABET: usize = 26;

#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET],
    is_word: bool,
}

/// A 26-ary trie over case-folded `A`-`Z`, built once from the fixed
/// keyword list and read-only afterwards.
#[derive(Debug, Default)]
pub struct KeywordTrie {
    root: TrieNode,
}

impl KeywordTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the trie holding the language's reserved primitives.
    pub fn with_primitives() -> Self {
        let mut trie = Self::new();
        for word in PRIMITIVES {
            let inserted = trie.insert(word);
            debug_assert!(inserted, "primitive keyword must be alphabetic: {word}");
        }
        trie
    }

    /// Insert a word. Fails, leaving the trie untouched, if the word is
    /// empty or any character does not case-fold into `A`-`Z`.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut indices = Vec::with_capacity(word.len());
        for c in word.chars() {
            match letter_index(c) {
                Some(i) => indices.push(i),
                None => return false,
            }
        }
        if indices.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        for i in indices {
            node = node.children[i].get_or_insert_with(Box::default);
        }
        node.is_word = true;
        true
    }

    /// True only if the full path exists and ends on a marked node.
    pub fn contains(&self, word: &[char]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for &c in word {
            let Some(i) = letter_index(c) else {
                return false;
            };
            match &node.children[i] {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_word
    }

    /// [`contains`](Self::contains) over a string slice.
    pub fn contains_str(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        self.contains(&chars)
    }
}

fn letter_index(c: char) -> Option<usize> {
    let folded = unicode::uppercase(c);
    if folded.is_ascii_uppercase() {
        Some(folded as usize - 'A' as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let mut trie = KeywordTrie::new();
        assert!(trie.insert("if"));
        assert!(trie.contains_str("IF"));
        assert!(trie.contains_str("If"));
        assert!(trie.contains_str("if"));
        assert!(!trie.contains_str("ifx"));
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let mut trie = KeywordTrie::new();
        assert!(trie.insert("cond"));
        assert!(!trie.contains_str("con"));
        assert!(trie.contains_str("cond"));
    }

    #[test]
    fn test_rejects_non_letters() {
        let mut trie = KeywordTrie::new();
        assert!(!trie.insert("<="));
        assert!(!trie.insert("set-q"));
        assert!(!trie.insert(""));
        // A failed insert must not leave a partial path behind.
        assert!(!trie.contains_str("set"));
    }

    #[test]
    fn test_all_primitives_present() {
        let trie = KeywordTrie::with_primitives();
        for word in PRIMITIVES {
            assert!(trie.contains_str(word), "missing {word}");
            assert!(trie.contains_str(&word.to_lowercase()), "missing {word}");
        }
        assert!(!trie.contains_str("QUOTEX"));
        assert!(!trie.contains_str("ELSE"));
    }
}
