//! CapSync Core Library
//!
//! This library provides the core data structures for word-level caption
//! synchronization: timed word spans, per-word render state, transcript
//! loading and caption styling.

pub mod span;
pub mod state;
pub mod style;
pub mod transcript;

pub use span::WordSpan;
pub use state::WordState;
pub use style::CaptionStyle;

/// Result type for capsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for capsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed span at index {index}: {reason}")]
    MalformedSpan { index: usize, reason: &'static str },
}
