use std::borrow::Cow;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

use crate::chunk::split_into_chunks;
use crate::config::ProcessorConfig;
use crate::error::ProcessorError;
use crate::sanitize::{collapse_unicode_whitespace, strip_special_chars};
use crate::whitespace::{clean_text, count_words};

/// Result of running text through [`process_text`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessedText {
    /// Output of [`clean_text`](crate::clean_text), after optional stripping.
    pub cleaned_text: String,
    /// Word count of `cleaned_text`.
    pub word_count: usize,
    /// `cleaned_text` split into chunks of `config.chunk_size` words.
    pub chunks: Vec<String>,
    /// Version of the config that produced this result.
    pub config_version: u32,
}

/// Runs the document preparation flow: sanitize (optional), clean, count,
/// chunk.
///
/// Sanitizing, when [`ProcessorConfig::strip_special_chars`] is set, turns
/// each run of Unicode whitespace into one space and then drops special
/// characters with [`strip_special_chars`](crate::strip_special_chars).
///
/// Empty or whitespace-only input is not an error; it produces empty text,
/// zero words and no chunks.
///
/// # Errors
///
/// Returns the error from [`ProcessorConfig::validate`] when the config is
/// invalid. Nothing else fails.
pub fn process_text(input: &str, cfg: &ProcessorConfig) -> Result<ProcessedText, ProcessorError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "processor.process_text",
        input_len = input.len(),
        chunk_size = cfg.chunk_size
    );
    let _guard = span.enter();

    match process_inner(input, cfg) {
        Ok(processed) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                word_count = processed.word_count,
                chunk_count = processed.chunks.len(),
                cleaned_len = processed.cleaned_text.len(),
                elapsed_micros,
                "process_success"
            );
            Ok(processed)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "process_failure");
            Err(err)
        }
    }
}

fn process_inner(input: &str, cfg: &ProcessorConfig) -> Result<ProcessedText, ProcessorError> {
    cfg.validate()?;

    // Sanitizing is optional; borrow the input when it is off. Unicode
    // whitespace becomes a space first so stripping cannot join two words.
    let stripped: Cow<str> = if cfg.strip_special_chars {
        Cow::Owned(strip_special_chars(&collapse_unicode_whitespace(input)))
    } else {
        Cow::Borrowed(input)
    };

    let cleaned_text = clean_text(&stripped);
    let word_count = count_words(&cleaned_text);
    let chunks = split_into_chunks(&cleaned_text, cfg.chunk_size)?;

    Ok(ProcessedText {
        cleaned_text,
        word_count,
        chunks,
        config_version: cfg.version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_counts_and_chunks() {
        let cfg = ProcessorConfig::new().with_chunk_size(2);
        let out = process_text("  The quick\r\n brown\tfox  jumps ", &cfg).unwrap();

        assert_eq!(out.cleaned_text, "The quick brown fox jumps");
        assert_eq!(out.word_count, 5);
        assert_eq!(out.chunks, vec!["The quick", "brown fox", "jumps"]);
        assert_eq!(out.config_version, 1);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let out = process_text(" \r\n\t ", &ProcessorConfig::default()).unwrap();
        assert_eq!(out.cleaned_text, "");
        assert_eq!(out.word_count, 0);
        assert!(out.chunks.is_empty());
    }

    #[test]
    fn strips_special_chars_when_enabled() {
        let text = "Total: $40 (net) & tax!";
        let plain = process_text(text, &ProcessorConfig::default()).unwrap();
        assert_eq!(plain.cleaned_text, text);
        assert_eq!(plain.word_count, 5);

        let cfg = ProcessorConfig::new().with_strip_special_chars(true);
        let stripped = process_text(text, &cfg).unwrap();
        assert_eq!(stripped.cleaned_text, "Total 40 net tax!");
        assert_eq!(stripped.word_count, 4);
    }

    #[test]
    fn sanitizing_separates_words_on_unicode_whitespace() {
        let cfg = ProcessorConfig::new().with_strip_special_chars(true);

        let out = process_text("a\rb", &cfg).unwrap();
        assert_eq!(out.cleaned_text, "a b");
        assert_eq!(out.word_count, 2);

        let out = process_text("a\u{00A0}b", &cfg).unwrap();
        assert_eq!(out.cleaned_text, "a b");
        assert_eq!(out.word_count, 2);

        // A symbol between spaces disappears without leaving a double space.
        let out = process_text("x \u{2022}\u{00A0}y", &cfg).unwrap();
        assert_eq!(out.cleaned_text, "x y");

        // Without sanitizing the C-locale rules apply unchanged.
        let plain = process_text("a\rb a\u{00A0}b", &ProcessorConfig::default()).unwrap();
        assert_eq!(plain.cleaned_text, "ab a\u{00A0}b");
    }

    #[test]
    fn sanitizing_keeps_combining_accents() {
        let cfg = ProcessorConfig::new().with_strip_special_chars(true);
        let out = process_text("caf\u{0065}\u{0301} au lait", &cfg).unwrap();
        assert_eq!(out.cleaned_text, "cafe\u{0301} au lait");
        assert_eq!(out.word_count, 3);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = ProcessorConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            process_text("content", &cfg),
            Err(ProcessorError::InvalidConfig(_))
        ));

        let cfg = ProcessorConfig::new().with_chunk_size(0);
        assert_eq!(
            process_text("content", &cfg),
            Err(ProcessorError::InvalidChunkSize { chunk_size: 0 })
        );
    }

    #[test]
    fn serializes_to_json() {
        let out = process_text("a b c", &ProcessorConfig::new().with_chunk_size(2)).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["cleaned_text"], "a b c");
        assert_eq!(json["word_count"], 3);
        assert_eq!(json["chunks"], serde_json::json!(["a b", "c"]));
        assert_eq!(json["config_version"], 1);
    }
}
