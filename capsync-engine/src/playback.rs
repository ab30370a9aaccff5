//! Playback clock seam

/// The host refused to start playback, typically an autoplay restriction.
/// Non-fatal: playback stays manually startable.
#[derive(Debug, Clone, thiserror::Error)]
#[error("playback start rejected: {0}")]
pub struct PlaybackError(pub String);

/// A live audio playback source, polled once per frame.
///
/// Implementations wrap whatever the host exposes: a media element, an
/// audio output stream, or a simulated clock in tests and previews.
pub trait PlaybackSource {
    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// True while playback is suspended but not finished
    fn paused(&self) -> bool;

    /// True once playback has run to completion
    fn ended(&self) -> bool;

    /// Asks the host to start playback
    fn play(&mut self) -> Result<(), PlaybackError>;
}
