//! Dictionaries for Ghost
//!
//! Provides the embedded default dictionary and loaders for custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_lowercase_letters() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_playable_words() {
        assert!(DICTIONARY.iter().any(|w| w.len() >= 4));
    }
}
