//! CapSync Engine Library
//!
//! This library decides which caption word is on screen at any playback
//! instant and drives its entrance animation. The host supplies a render
//! surface and a playback clock and calls [`CaptionDriver::frame`] once per
//! display frame; everything else is deterministic state mutation.

pub mod animation;
pub mod driver;
pub mod playback;
pub mod resolver;
pub mod surface;

pub use driver::CaptionDriver;
pub use playback::{PlaybackError, PlaybackSource};
pub use resolver::{ActiveWordResolver, SpanUpdate};
pub use surface::CaptionSurface;

/// Result type for capsync-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for capsync-engine operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("core error: {0}")]
    Core(#[from] capsync_core::Error),

    #[error("render surface not attached")]
    SurfaceNotAttached,
}
