//! Whitespace cleaning and word counting.
//!
//! Everything in this module classifies whitespace with [`is_whitespace`],
//! the C-locale set:
//! - space (U+0020)
//! - tab (U+0009)
//! - newline (U+000A)
//! - vertical tab (U+000B)
//! - form feed (U+000C)
//! - carriage return (U+000D)
//!
//! Nothing outside ASCII counts as whitespace, so a non-breaking space or an
//! ideographic space is part of a word. Every whitespace character is a
//! single byte, which means splitting on them never cuts a UTF-8 sequence.
//!
//! # Examples
//!
//! ```rust
//! use processor::{clean_text, count_words};
//!
//! assert_eq!(clean_text("  Hello   world\r\n"), "Hello world");
//! assert_eq!(count_words("one  two\tthree"), 3);
//! ```

use crate::token::words;

/// Returns `true` for the whitespace characters recognised by this crate.
///
/// ```rust
/// use processor::is_whitespace;
///
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{00A0}'));
/// ```
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Byte form of [`is_whitespace`].
#[inline]
pub fn is_whitespace_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Removes carriage returns, collapses whitespace runs and trims the result.
///
/// The rules apply in this order:
///
/// 1. Every `\r` is deleted outright. It is not turned into a space, so
///    `"a\rb"` becomes `"ab"`.
/// 2. Each maximal run of the remaining whitespace becomes one ASCII space.
/// 3. Leading and trailing spaces are dropped.
///
/// Characters that are not whitespace pass through untouched. Empty or
/// whitespace-only input yields an empty string.
///
/// # Examples
///
/// ```rust
/// use processor::clean_text;
///
/// assert_eq!(clean_text("a\r\n b"), "a b");
/// assert_eq!(clean_text("a\rb"), "ab");
/// assert_eq!(clean_text(" \t\r\n "), "");
/// assert_eq!(clean_text("caf\u{00E9}\u{00A0}au  lait"), "caf\u{00E9}\u{00A0}au lait");
/// ```
///
/// # Performance
///
/// Single pass, O(n). The output is pre-allocated to the input length and
/// never grows past it.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    // Set once a whitespace run has been seen after at least one kept char.
    // The space is only written when the next non-whitespace char arrives,
    // which is what keeps trailing runs out of the output.
    let mut pending_space = false;

    for ch in text.chars() {
        if ch == '\r' {
            continue;
        }
        if is_whitespace(ch) {
            if !cleaned.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if pending_space {
            cleaned.push(' ');
            pending_space = false;
        }
        cleaned.push(ch);
    }

    cleaned
}

/// Counts maximal runs of non-whitespace characters.
///
/// ```rust
/// use processor::count_words;
///
/// assert_eq!(count_words(""), 0);
/// assert_eq!(count_words("   "), 0);
/// assert_eq!(count_words("  leading and trailing  "), 3);
/// ```
pub fn count_words(text: &str) -> usize {
    words(text).count()
}
