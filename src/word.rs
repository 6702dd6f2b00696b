use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::error::{Result, WordSearchError};

/// A non-empty target word, held as characters for indexed access during search.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Validate `text` as a word.
    ///
    /// Empty text, or text containing whitespace, fails with [`InvalidWordFormat`](WordSearchError::InvalidWordFormat).
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            return Err(WordSearchError::InvalidWordFormat { word: text.to_string() });
        }

        Ok(Self {
            text: text.to_string(),
            chars: text.chars().collect_vec(),
        })
    }

    /// The characters of this word, in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters. Never zero.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; provided for symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The word as originally given.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TryFrom<&str> for Word {
    type Error = WordSearchError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
