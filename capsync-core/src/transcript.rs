//! Transcript loading and normalization
//!
//! Speech-to-text tools emit word timings in one of two JSON shapes: a
//! transcript object carrying a flat `words` array, or an array of segments
//! each carrying its own `words` sub-array. Both are normalized here into a
//! single flat, source-ordered `Vec<WordSpan>`.

use crate::{Error, Result, WordSpan};
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// A raw word timing record as produced by the transcriber
#[derive(Debug, Clone, Deserialize)]
pub struct RawWord {
    /// Word text, possibly with surrounding whitespace
    pub word: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

/// One transcript segment; `words` may be absent for segments that only
/// carry segment-level timing
#[derive(Debug, Clone, Deserialize)]
pub struct RawSegment {
    #[serde(default)]
    pub words: Vec<RawWord>,
}

/// The two accepted input shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TranscriptInput {
    /// A full transcript object with a flat `words` array
    Transcript { words: Vec<RawWord> },
    /// An array of segments, each optionally holding words
    Segments(Vec<RawSegment>),
}

/// Parses a transcript from a JSON string and normalizes it into word spans
pub fn parse_transcript(json: &str) -> Result<Vec<WordSpan>> {
    let input: TranscriptInput = serde_json::from_str(json)?;
    normalize(input)
}

/// Reads a transcript from a reader and normalizes it into word spans
pub fn read_transcript<R: Read>(reader: R) -> Result<Vec<WordSpan>> {
    let input: TranscriptInput = serde_json::from_reader(reader)?;
    normalize(input)
}

/// Flattens either input shape into ordered word spans, trimming each
/// word's text and rejecting malformed records.
///
/// An empty result is not an error: the caller continues with zero word
/// states and a warning is logged instead.
pub fn normalize(input: TranscriptInput) -> Result<Vec<WordSpan>> {
    let raw_words: Vec<RawWord> = match input {
        TranscriptInput::Transcript { words } => words,
        TranscriptInput::Segments(segments) => segments
            .into_iter()
            .flat_map(|segment| segment.words)
            .collect(),
    };

    let mut spans = Vec::with_capacity(raw_words.len());
    for (index, raw) in raw_words.into_iter().enumerate() {
        let text = raw.word.trim();
        if let Some(reason) = span_defect(text, raw.start, raw.end) {
            return Err(Error::MalformedSpan { index, reason });
        }
        spans.push(WordSpan::new(text, raw.start, raw.end));
    }

    if spans.is_empty() {
        warn!("transcript contains no words; captions will stay empty");
    }

    Ok(spans)
}

/// Returns the reason a word record is unusable, or None if it is fine
fn span_defect(text: &str, start: f64, end: f64) -> Option<&'static str> {
    if text.is_empty() {
        return Some("empty word text");
    }
    if !start.is_finite() || !end.is_finite() {
        return Some("non-finite timestamp");
    }
    if start < 0.0 {
        return Some("negative start time");
    }
    if end < start {
        return Some("end earlier than start");
    }
    None
}
