//! Special character stripping for the optional sanitizing step of
//! [`process_text`](crate::process_text).
//!
//! Sanitizing runs before [`clean_text`](crate::clean_text) and, unlike the
//! rest of the crate, treats whitespace as the full Unicode set: a no-break
//! space or a lone `\r` between two words keeps them apart.

use unicode_categories::UnicodeCategories;

/// Punctuation kept by [`strip_special_chars`].
pub const KEPT_PUNCTUATION: [char; 5] = ['.', ',', '!', '?', '-'];

/// Replaces every run of Unicode whitespace with a single ASCII space.
///
/// Edges are not trimmed; that is left to [`clean_text`](crate::clean_text).
///
/// ```rust
/// use processor::collapse_unicode_whitespace;
///
/// assert_eq!(collapse_unicode_whitespace("a\rb"), "a b");
/// assert_eq!(collapse_unicode_whitespace(" a\u{00A0}\u{2003} b\r\n"), " a b ");
/// ```
pub fn collapse_unicode_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Drops every character that is not a word character, whitespace or basic
/// punctuation.
///
/// Word characters are alphanumerics (any script), combining marks and `_`;
/// marks stay so decomposed accents (`e` + U+0301) survive with their base
/// letter. Whitespace is the Unicode set. Kept punctuation is
/// [`KEPT_PUNCTUATION`].
///
/// ```rust
/// use processor::strip_special_chars;
///
/// assert_eq!(strip_special_chars("Price: $5 (approx.)"), "Price 5 approx.");
/// assert_eq!(strip_special_chars("snake_case, ok?"), "snake_case, ok?");
/// ```
pub fn strip_special_chars(text: &str) -> String {
    text.chars().filter(|&ch| is_kept(ch)).collect()
}

fn is_kept(ch: char) -> bool {
    ch.is_alphanumeric()
        || ch.is_mark()
        || ch == '_'
        || ch.is_whitespace()
        || KEPT_PUNCTUATION.contains(&ch)
}
