//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use super::DICTIONARY;
use crate::core::Lexicon;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize one dictionary line
///
/// Trims whitespace and lowercases. Blank lines, `#` comments and entries with
/// characters outside `a`-`z` yield `None`.
#[must_use]
pub fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let word = trimmed.to_lowercase();
    word.bytes()
        .all(|b| b.is_ascii_lowercase())
        .then_some(word)
}

/// Load words from a file
///
/// Returns the normalized words in file order, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use ghost_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("WORD.LST").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<String> = content.lines().filter_map(normalize_line).collect();
    log::info!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Normalize an embedded string slice
///
/// # Examples
/// ```
/// use ghost_solver::wordlists::loader::words_from_slice;
/// use ghost_solver::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_line(s)).collect()
}

/// Build a lexicon from a dictionary source
///
/// `"embedded"` selects the built-in dictionary, anything else is a file path.
///
/// # Errors
///
/// Returns an I/O error if a dictionary file cannot be read.
pub fn load_lexicon(source: &str) -> io::Result<Lexicon> {
    let words = match source {
        "embedded" => words_from_slice(DICTIONARY),
        path => load_from_file(path)?,
    };
    Ok(Lexicon::from_words(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_line_trims_and_lowercases() {
        assert_eq!(normalize_line("  Ghost \r"), Some("ghost".to_string()));
    }

    #[test]
    fn normalize_line_skips_invalid() {
        assert_eq!(normalize_line(""), None);
        assert_eq!(normalize_line("   "), None);
        assert_eq!(normalize_line("# comment"), None);
        assert_eq!(normalize_line("don't"), None);
        assert_eq!(normalize_line("two words"), None);
        assert_eq!(normalize_line("naïve"), None);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["bat", "BATH", "bathe"]);
        assert_eq!(words, vec!["bat", "bath", "bathe"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["bat", "b4t", "", "bathe"]);
        assert_eq!(words, vec!["bat", "bathe"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("ghost_loader_{}.lst", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "Apple\n\nbanana\ncherry pie\n  date  ").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["apple", "banana", "date"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.lst").is_err());
    }

    #[test]
    fn load_embedded_lexicon() {
        let lexicon = load_lexicon("embedded").unwrap();
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.word_count(), DICTIONARY.len());
    }
}
