//! Host-facing façade for doctext.
//!
//! Re-exports the pure operations from the `processor` crate and adds what a
//! host binding needs around them: chunking entry points that take the
//! host's signed integers, YAML configuration loading, and an optional metrics
//! observer. Keeping this layer thin means the core stays testable without
//! any host present.

mod config;

pub use crate::config::{ConfigLoadError, DoctextConfig, ProcessorYamlConfig};
pub use processor::{
    Chunk, DEFAULT_CHUNK_SIZE, ProcessedText, ProcessorConfig, ProcessorError, Token,
    chunk_spans, clean_text, collapse_unicode_whitespace, count_words, is_whitespace,
    reverse_bytes, reverse_text, split_into_chunks_default, strip_special_chars, tokenize, words,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for façade calls.
pub trait ProcessorMetrics: Send + Sync {
    fn record_chunking(&self, latency: Duration, result: Result<(), ProcessorError>);
    fn record_process(&self, latency: Duration, result: Result<(), ProcessorError>);
}

/// Install or clear the global processor metrics recorder.
pub fn set_processor_metrics(recorder: Option<Arc<dyn ProcessorMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ProcessorMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn ProcessorMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn ProcessorMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn ProcessorMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_chunking(self, result: Result<(), ProcessorError>) {
        self.recorder.record_chunking(self.start.elapsed(), result);
    }

    fn record_process(self, result: Result<(), ProcessorError>) {
        self.recorder.record_process(self.start.elapsed(), result);
    }
}

/// Splits `text` into chunks of `chunk_size` words, taking the host's
/// signed chunk size.
///
/// # Errors
///
/// [`ProcessorError::InvalidChunkSize`] carrying the caller's value when
/// `chunk_size <= 0`. A positive size wider than `usize` saturates; no text
/// has that many words, so the result is a single chunk either way.
///
/// ```rust
/// use doctext::{split_into_chunks, ProcessorError};
///
/// assert_eq!(split_into_chunks("a b c d e", 2).unwrap(), vec!["a b", "c d", "e"]);
/// assert_eq!(
///     split_into_chunks("a b", -3),
///     Err(ProcessorError::InvalidChunkSize { chunk_size: -3 }),
/// );
/// ```
pub fn split_into_chunks(text: &str, chunk_size: i64) -> Result<Vec<String>, ProcessorError> {
    let span = MetricsSpan::start();
    let result = chunk_size_from_host(chunk_size)
        .and_then(|size| processor::split_into_chunks(text, size));
    if let Some(span) = span {
        span.record_chunking(result.as_ref().map(|_| ()).map_err(Clone::clone));
    }
    result
}

/// Splits `text` into overlapping windows of `chunk_size` words, taking the
/// host's signed sizes. See
/// [`processor::split_into_overlapping_chunks`] for the window layout.
///
/// # Errors
///
/// [`ProcessorError::InvalidChunkSize`] when `chunk_size <= 0`, then
/// [`ProcessorError::InvalidOverlap`] when `overlap < 0` or
/// `overlap >= chunk_size`. Both carry the caller's values.
///
/// ```rust
/// use doctext::{split_into_overlapping_chunks, ProcessorError};
///
/// assert_eq!(
///     split_into_overlapping_chunks("a b c d e", 3, 1).unwrap(),
///     vec!["a b c", "c d e", "e"],
/// );
/// assert_eq!(
///     split_into_overlapping_chunks("a b", 2, -1),
///     Err(ProcessorError::InvalidOverlap { overlap: -1, chunk_size: 2 }),
/// );
/// ```
pub fn split_into_overlapping_chunks(
    text: &str,
    chunk_size: i64,
    overlap: i64,
) -> Result<Vec<String>, ProcessorError> {
    let span = MetricsSpan::start();
    let result = chunk_size_from_host(chunk_size).and_then(|size| {
        let overlap = overlap_from_host(overlap, chunk_size)?;
        processor::split_into_overlapping_chunks(text, size, overlap)
    });
    if let Some(span) = span {
        span.record_chunking(result.as_ref().map(|_| ()).map_err(Clone::clone));
    }
    result
}

/// Runs the full strip/clean/count/chunk flow and reports it to the metrics
/// observer, if one is installed.
pub fn process_text(input: &str, cfg: &ProcessorConfig) -> Result<ProcessedText, ProcessorError> {
    let span = MetricsSpan::start();
    let result = processor::process_text(input, cfg);
    if let Some(span) = span {
        span.record_process(result.as_ref().map(|_| ()).map_err(Clone::clone));
    }
    result
}

fn chunk_size_from_host(chunk_size: i64) -> Result<usize, ProcessorError> {
    if chunk_size <= 0 {
        tracing::warn!(chunk_size, "invalid_chunk_size");
        return Err(ProcessorError::InvalidChunkSize { chunk_size });
    }
    Ok(usize::try_from(chunk_size).unwrap_or(usize::MAX))
}

// Expects a chunk size already accepted by `chunk_size_from_host`.
fn overlap_from_host(overlap: i64, chunk_size: i64) -> Result<usize, ProcessorError> {
    if overlap < 0 || overlap >= chunk_size {
        tracing::warn!(overlap, chunk_size, "invalid_overlap");
        return Err(ProcessorError::InvalidOverlap {
            overlap,
            chunk_size,
        });
    }
    Ok(usize::try_from(overlap).unwrap_or(usize::MAX))
}
