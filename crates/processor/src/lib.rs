//! doctext core text processing.
//!
//! Small, pure operations a document pipeline runs over extracted text
//! before handing it to downstream consumers.
//!
//! ## What we do
//!
//! - Whitespace cleaning: carriage returns dropped, runs collapsed, edges trimmed
//! - Word counting over whitespace-delimited tokens
//! - Chunking into fixed-size groups of words, optionally overlapping
//! - Text reversal
//! - Optional stripping of special characters before cleaning
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock-dependent output, no locale. Whitespace is the fixed
//! C-locale set (see [`is_whitespace`]); nothing outside ASCII counts. The one
//! exception is the optional sanitizing step of [`process_text`], which
//! collapses Unicode whitespace before stripping special characters. Every
//! call owns its output, so all functions are safe to call from any number
//! of threads at once.
//!
//! ## Invariants worth knowing
//!
//! - `clean_text` output never contains `\r`, never has two spaces in a row,
//!   and never starts or ends with a space
//! - `count_words(clean_text(t)) == count_words(t)` whenever every `\r` in
//!   `t` sits next to other whitespace or at an edge (CRLF line endings). A
//!   lone `\r` between two words is deleted, which joins them
//! - `split_into_chunks(t, n)` keeps every word in order; all chunks but the
//!   last hold exactly `n` words
//! - `chunk_size == 0` is rejected, never clamped

mod chunk;
mod config;
mod error;
mod pipeline;
mod reverse;
mod sanitize;
mod token;
mod whitespace;

pub use crate::chunk::{
    chunk_spans, split_into_chunks, split_into_chunks_default, split_into_overlapping_chunks, Chunk,
};
pub use crate::config::{ProcessorConfig, DEFAULT_CHUNK_SIZE};
pub use crate::error::ProcessorError;
pub use crate::pipeline::{process_text, ProcessedText};
pub use crate::reverse::{reverse_bytes, reverse_text};
pub use crate::sanitize::{collapse_unicode_whitespace, strip_special_chars, KEPT_PUNCTUATION};
pub use crate::token::{tokenize, words, Token};
pub use crate::whitespace::{clean_text, count_words, is_whitespace, is_whitespace_byte};
