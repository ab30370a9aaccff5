//! Render surface seam

use capsync_core::{CaptionStyle, WordSpan, WordState};

/// A surface that can host one styled text node per word.
///
/// The engine never draws anything itself; it hands the surface the loaded
/// words once, then streams per-word state mutations. Font, colors and
/// shadow parameters arrive through the style and are the surface's
/// business entirely.
pub trait CaptionSurface {
    /// Recreates all text nodes for a freshly loaded timeline or a replaced
    /// style. Every node starts in the rest appearance.
    fn rebuild(&mut self, spans: &[WordSpan], style: &CaptionStyle);

    /// Applies one word's render state to its text node
    fn apply(&mut self, index: usize, state: &WordState);
}
