//! Ghost move representation
//!
//! A Letter is a single validated lowercase ASCII letter, the only thing a player can play.

use std::fmt;

/// A single lowercase `a`-`z` letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for invalid letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    TooLong(usize),
    NotLowercaseAscii(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a letter"),
            Self::TooLong(len) => {
                write!(f, "Please enter only a single letter, got {len} characters")
            }
            Self::NotLowercaseAscii(c) => {
                write!(f, "Please enter a letter from a-z only, got '{c}'")
            }
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Parse a letter from raw user input
    ///
    /// Surrounding whitespace is trimmed and the input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `LetterError` if:
    /// - The input is empty after trimming
    /// - The input holds more than one character
    /// - The character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use ghost_solver::core::Letter;
    ///
    /// let letter = Letter::parse(" Q\n").unwrap();
    /// assert_eq!(letter.as_char(), 'q');
    ///
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim().to_lowercase();
        let mut chars = trimmed.chars();

        let Some(first) = chars.next() else {
            return Err(LetterError::Empty);
        };

        let len = trimmed.chars().count();
        if len > 1 {
            return Err(LetterError::TooLong(len));
        }

        Self::from_char(first)
    }

    /// Build a letter from a single character
    ///
    /// Unlike [`Letter::parse`], no case folding happens here.
    ///
    /// # Errors
    /// Returns `LetterError::NotLowercaseAscii` for anything outside `a`-`z`.
    pub const fn from_char(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_lowercase() {
            Ok(Self(c as u8))
        } else {
            Err(LetterError::NotLowercaseAscii(c))
        }
    }

    /// Build a letter from a byte, returning `None` outside `a`-`z`
    #[inline]
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii_lowercase() {
            Some(Self(b))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
