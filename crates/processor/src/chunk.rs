//! Word-count-bounded chunking.
//!
//! Text is split into words (see [`words`](crate::words)) and the words are
//! grouped into contiguous runs of `chunk_size`. The first chunk starts at
//! word 0 and a new one starts whenever the 0-based word index is a positive
//! multiple of `chunk_size`, so every chunk except the last is full and the
//! last holds the remaining `1..=chunk_size` words.
//!
//! Inside a chunk, words are joined by exactly one ASCII space whatever
//! whitespace separated them in the source.
//!
//! ```rust
//! use processor::split_into_chunks;
//!
//! let chunks = split_into_chunks("a b c d e", 2).unwrap();
//! assert_eq!(chunks, vec!["a b", "c d", "e"]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::DEFAULT_CHUNK_SIZE;
use crate::error::ProcessorError;
use crate::token::{tokenize, words};

/// One chunk of words together with its position in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// 0-based position of the chunk in the output.
    pub index: usize,
    /// Words of the chunk joined by single spaces.
    pub text: String,
    /// Number of words in `text`.
    pub token_count: usize,
    /// Byte offset (inclusive) of the first word in the source text.
    pub start: usize,
    /// Byte offset (exclusive) of the last word in the source text.
    pub end: usize,
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits `text` into chunks of `chunk_size` words.
///
/// Returns an empty vector for empty or whitespace-only text; a text with
/// words never produces an empty chunk.
///
/// # Errors
///
/// [`ProcessorError::InvalidChunkSize`] when `chunk_size` is zero.
///
/// # Examples
///
/// ```rust
/// use processor::{split_into_chunks, ProcessorError};
///
/// assert_eq!(
///     split_into_chunks("one  two\tthree\r\nfour", 3).unwrap(),
///     vec!["one two three", "four"],
/// );
/// assert!(split_into_chunks("", 5).unwrap().is_empty());
/// assert_eq!(
///     split_into_chunks("a b", 0),
///     Err(ProcessorError::InvalidChunkSize { chunk_size: 0 }),
/// );
/// ```
pub fn split_into_chunks(text: &str, chunk_size: usize) -> Result<Vec<String>, ProcessorError> {
    check_chunk_size(chunk_size)?;
    Ok(group_words(text, chunk_size))
}

/// [`split_into_chunks`] with [`DEFAULT_CHUNK_SIZE`] words per chunk.
pub fn split_into_chunks_default(text: &str) -> Vec<String> {
    group_words(text, DEFAULT_CHUNK_SIZE)
}

/// Splits `text` into windows of `chunk_size` words where consecutive
/// windows share `overlap` words.
///
/// A window starts at every word index that is a multiple of
/// `chunk_size - overlap` and takes up to `chunk_size` words from there, so
/// near the end of the text the windows shrink and can lie entirely inside
/// the previous one. With `overlap == 0` the result equals
/// [`split_into_chunks`]. Passing `overlap = chunk_size - chunk_size / 2`
/// gives the half-window stride upload pipelines use for retrieval.
///
/// # Errors
///
/// [`ProcessorError::InvalidChunkSize`] when `chunk_size` is zero, then
/// [`ProcessorError::InvalidOverlap`] when `overlap >= chunk_size`.
///
/// ```rust
/// use processor::split_into_overlapping_chunks;
///
/// assert_eq!(
///     split_into_overlapping_chunks("a b c d e", 3, 1).unwrap(),
///     vec!["a b c", "c d e", "e"],
/// );
/// ```
pub fn split_into_overlapping_chunks(
    text: &str,
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<String>, ProcessorError> {
    check_chunk_size(chunk_size)?;
    if overlap >= chunk_size {
        warn!(chunk_size, overlap, "invalid_overlap");
        return Err(ProcessorError::InvalidOverlap {
            overlap: i64::try_from(overlap).unwrap_or(i64::MAX),
            chunk_size: i64::try_from(chunk_size).unwrap_or(i64::MAX),
        });
    }

    let words: Vec<&str> = words(text).collect();
    let stride = chunk_size - overlap;
    Ok((0..words.len())
        .step_by(stride)
        .map(|start| {
            let end = words.len().min(start.saturating_add(chunk_size));
            words[start..end].join(" ")
        })
        .collect())
}

/// Same grouping as [`split_into_chunks`], but keeps byte spans into `text`.
///
/// `text[chunk.start..chunk.end]` covers the chunk's words together with the
/// original whitespace between them.
pub fn chunk_spans(text: &str, chunk_size: usize) -> Result<Vec<Chunk>, ProcessorError> {
    check_chunk_size(chunk_size)?;

    let tokens = tokenize(text);
    let mut chunks = Vec::with_capacity(tokens.len().div_ceil(chunk_size));
    for (index, group) in tokens.chunks(chunk_size).enumerate() {
        // `chunks` never yields an empty slice.
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        let mut joined = String::with_capacity(last.end - first.start);
        for token in group {
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(&token.text);
        }
        chunks.push(Chunk {
            index,
            text: joined,
            token_count: group.len(),
            start: first.start,
            end: last.end,
        });
    }

    Ok(chunks)
}

fn group_words(text: &str, chunk_size: usize) -> Vec<String> {
    let words: Vec<&str> = words(text).collect();
    words
        .chunks(chunk_size)
        .map(|group| group.join(" "))
        .collect()
}

fn check_chunk_size(chunk_size: usize) -> Result<(), ProcessorError> {
    if chunk_size == 0 {
        warn!(chunk_size, "invalid_chunk_size");
        return Err(ProcessorError::InvalidChunkSize { chunk_size: 0 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_contiguous_runs() {
        assert_eq!(
            split_into_chunks("a b c d e", 2).unwrap(),
            vec!["a b", "c d", "e"]
        );
        assert_eq!(split_into_chunks("a b c d", 2).unwrap(), vec!["a b", "c d"]);
        assert_eq!(
            split_into_chunks("a b c", 1).unwrap(),
            vec!["a", "b", "c"]
        );
        assert_eq!(split_into_chunks("a b c", 10).unwrap(), vec!["a b c"]);
    }

    #[test]
    fn whitespace_inside_chunk_is_normalized() {
        let chunks = split_into_chunks("  one\t\ttwo\r\nthree   four \x0B five ", 2).unwrap();
        assert_eq!(chunks, vec!["one two", "three four", "five"]);
    }

    #[test]
    fn empty_and_blank_text_yield_no_chunks() {
        assert!(split_into_chunks("", 5).unwrap().is_empty());
        assert!(split_into_chunks(" \t\r\n ", 5).unwrap().is_empty());
        assert!(chunk_spans("   ", 3).unwrap().is_empty());
        assert!(split_into_chunks_default("").is_empty());
    }

    #[test]
    fn zero_chunk_size_rejected() {
        assert_eq!(
            split_into_chunks("a b c", 0),
            Err(ProcessorError::InvalidChunkSize { chunk_size: 0 })
        );
        assert!(matches!(
            chunk_spans("a b c", 0),
            Err(ProcessorError::InvalidChunkSize { .. })
        ));
        // Validation happens before looking at the text.
        assert!(split_into_chunks("", 0).is_err());
    }

    #[test]
    fn default_size_is_one_hundred_words() {
        let text = vec!["w"; 250].join(" ");
        let chunks = split_into_chunks_default(&text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].split(' ').count(), 100);
        assert_eq!(chunks[1].split(' ').count(), 100);
        assert_eq!(chunks[2].split(' ').count(), 50);
        assert_eq!(chunks, split_into_chunks(&text, DEFAULT_CHUNK_SIZE).unwrap());
    }

    #[test]
    fn spans_match_string_chunks() {
        let text = " alpha  beta\r\ngamma\tdelta epsilon ";
        let spans = chunk_spans(text, 2).unwrap();
        let plain = split_into_chunks(text, 2).unwrap();

        let span_texts: Vec<&str> = spans.iter().map(|chunk| chunk.text.as_str()).collect();
        assert_eq!(span_texts, plain);

        assert_eq!(spans[0].index, 0);
        assert_eq!(spans[0].token_count, 2);
        assert_eq!(&text[spans[0].start..spans[0].end], "alpha  beta");
        assert_eq!(&text[spans[1].start..spans[1].end], "gamma\tdelta");
        assert_eq!(spans[2].index, 2);
        assert_eq!(spans[2].token_count, 1);
        assert_eq!(&text[spans[2].start..spans[2].end], "epsilon");
    }

    #[test]
    fn spans_respect_multibyte_boundaries() {
        let text = "caf\u{00E9} \u{1F600}\u{1F600} na\u{00EF}ve";
        let spans = chunk_spans(text, 2).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(&text[spans[0].start..spans[0].end], "caf\u{00E9} \u{1F600}\u{1F600}");
        assert_eq!(&text[spans[1].start..spans[1].end], "na\u{00EF}ve");
    }

    #[test]
    fn overlapping_windows_step_by_stride() {
        assert_eq!(
            split_into_overlapping_chunks("a b c d e", 3, 1).unwrap(),
            vec!["a b c", "c d e", "e"]
        );
        assert_eq!(
            split_into_overlapping_chunks("w0 w1 w2 w3 w4", 4, 2).unwrap(),
            vec!["w0 w1 w2 w3", "w2 w3 w4", "w4"]
        );
        assert_eq!(
            split_into_overlapping_chunks("a b c d", 2, 1).unwrap(),
            vec!["a b", "b c", "c d", "d"]
        );
    }

    #[test]
    fn half_window_stride() {
        // 500 words per window, advancing 250 words at a time.
        let text = (0..1000).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let chunks = split_into_overlapping_chunks(&text, 500, 500 - 500 / 2).unwrap();
        assert_eq!(chunks.len(), 4);
        assert!(chunks[0].starts_with("w0 "));
        assert!(chunks[1].starts_with("w250 "));
        assert!(chunks[3].starts_with("w750 "));
        assert_eq!(chunks[3].split(' ').count(), 250);
    }

    #[test]
    fn zero_overlap_matches_plain_chunks() {
        let text = " one two\tthree\r\nfour five six seven ";
        for n in 1..=8 {
            assert_eq!(
                split_into_overlapping_chunks(text, n, 0).unwrap(),
                split_into_chunks(text, n).unwrap(),
                "chunk_size {n}"
            );
        }
        assert!(split_into_overlapping_chunks("", 3, 2).unwrap().is_empty());
    }

    #[test]
    fn overlap_must_be_smaller_than_chunk_size() {
        assert_eq!(
            split_into_overlapping_chunks("a b c", 3, 3),
            Err(ProcessorError::InvalidOverlap {
                overlap: 3,
                chunk_size: 3
            })
        );
        assert_eq!(
            split_into_overlapping_chunks("a b c", 2, 7),
            Err(ProcessorError::InvalidOverlap {
                overlap: 7,
                chunk_size: 2
            })
        );
        assert_eq!(
            split_into_overlapping_chunks("a b c", 0, 0),
            Err(ProcessorError::InvalidChunkSize { chunk_size: 0 })
        );
    }
}
