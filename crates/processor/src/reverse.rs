/// Reverses a byte sequence.
///
/// Exact byte reversal: multi-byte UTF-8 sequences come out with their bytes
/// flipped, so the result is only valid UTF-8 when the input is ASCII. Use
/// [`reverse_text`] for `&str` input.
pub fn reverse_bytes(input: &[u8]) -> Vec<u8> {
    input.iter().rev().copied().collect()
}

/// Reverses text by Unicode scalar value.
///
/// Byte-identical to [`reverse_bytes`] on ASCII input, and still valid UTF-8
/// otherwise.
///
/// ```rust
/// use processor::reverse_text;
///
/// assert_eq!(reverse_text("abc"), "cba");
/// assert_eq!(reverse_text(""), "");
/// ```
pub fn reverse_text(input: &str) -> String {
    input.chars().rev().collect()
}
