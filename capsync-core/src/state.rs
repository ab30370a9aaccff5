//! Per-word render state

/// Scale a word rests at while inactive, and the scale an entrance
/// animation starts from.
pub const REST_SCALE: f32 = 0.8;

/// Transient render state for one word span.
///
/// One instance exists per [`WordSpan`](crate::WordSpan); all instances are
/// rebuilt whenever the timeline is reloaded or the style is replaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordState {
    /// Whether this word is the currently active one
    pub active: bool,
    /// Whether the word's text node should be shown at all
    pub visible: bool,
    /// Opacity in [0, 1]
    pub opacity: f32,
    /// Uniform scale applied to the text node
    pub scale: f32,
}

impl WordState {
    /// The fully-inactive rest appearance: invisible, transparent, rest scale
    pub const fn rest() -> Self {
        Self {
            active: false,
            visible: false,
            opacity: 0.0,
            scale: REST_SCALE,
        }
    }

    /// Returns this state to the rest appearance in a single step
    pub fn deactivate(&mut self) {
        *self = Self::rest();
    }
}

impl Default for WordState {
    fn default() -> Self {
        Self::rest()
    }
}
