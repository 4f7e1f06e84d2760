use serde::{Deserialize, Serialize};

use crate::whitespace::is_whitespace;

/// A word with its UTF-8 byte offsets in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Iterates over the words of `text` without allocating.
///
/// A word is a maximal run of characters for which
/// [`is_whitespace`](crate::is_whitespace) is false, so no yielded slice is
/// ever empty.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(is_whitespace).filter(|word| !word.is_empty())
}

/// Tokenizes text and produces byte offsets into it.
///
/// Works on raw, uncleaned text; offsets always point back into `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if is_whitespace(ch) {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    text: text[token_start..idx].to_string(),
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(Token {
            text: text[token_start..].to_string(),
            start: token_start,
            end: text.len(),
        });
    }

    tokens
}
