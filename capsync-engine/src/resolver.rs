//! Time-to-active-word resolution
//!
//! The resolver owns the loaded timeline and one render state per word.
//! Each tick it maps the playback clock to at most one active word,
//! deactivates everything else instantly, and advances the active word's
//! entrance animation.

use crate::animation::EntranceAnimation;
use capsync_core::{WordSpan, WordState};
use tracing::debug;

/// One state mutation for the render surface to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanUpdate {
    /// Index of the span in the timeline
    pub index: usize,
    /// The span's full render state after the mutation
    pub state: WordState,
}

/// Resolves the playback clock to the active word and its render state.
///
/// The host calls [`tick`](Self::tick) once per display frame while audio
/// is playing and applies the returned updates to its render surface. All
/// state lives here; there are no self-rescheduling callbacks to cancel.
#[derive(Debug, Default)]
pub struct ActiveWordResolver {
    spans: Vec<WordSpan>,
    states: Vec<WordState>,
    active: Option<usize>,
    animation: Option<EntranceAnimation>,
}

impl ActiveWordResolver {
    /// Creates an empty resolver with no timeline loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a timeline, discarding all prior word states.
    ///
    /// Every word starts in the rest state: inactive, invisible, rest scale.
    pub fn load(&mut self, spans: Vec<WordSpan>) {
        debug!(words = spans.len(), "timeline loaded");
        self.states = vec![WordState::rest(); spans.len()];
        self.spans = spans;
        self.active = None;
        self.animation = None;
    }

    /// The loaded timeline
    pub fn spans(&self) -> &[WordSpan] {
        &self.spans
    }

    /// Current render state per word, index-aligned with [`spans`](Self::spans)
    pub fn states(&self) -> &[WordState] {
        &self.states
    }

    /// Index of the currently active word, if any
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Runs one resolution step at playback time `playback_secs`.
    ///
    /// `wall_ms` is a monotonic wall-clock reading used only to progress
    /// the entrance animation; the caller supplies it so the resolver can
    /// be driven without a real frame clock.
    ///
    /// Spans are scanned linearly in source order and the last one whose
    /// range contains `playback_secs` wins, which makes the outcome
    /// deterministic even for overlapping or unsorted input. Re-selecting
    /// the word that is already active is a no-op and returns no updates
    /// once its animation has settled.
    pub fn tick(&mut self, playback_secs: f64, wall_ms: u64) -> Vec<SpanUpdate> {
        let mut updates = Vec::new();

        let mut selected = None;
        for (index, span) in self.spans.iter().enumerate() {
            if span.contains(playback_secs) {
                selected = Some(index);
            }
        }

        match selected {
            Some(index) if self.active == Some(index) => {}
            Some(index) => {
                // All other words must be hidden before the new one shows:
                // activation is animated, deactivation is not, and the
                // ordering keeps at most one word visible at any instant.
                for other in 0..self.states.len() {
                    if other != index {
                        self.deactivate_span(other, &mut updates);
                    }
                }

                debug!(word = %self.spans[index].text, "activating word");
                self.states[index].active = true;
                self.states[index].visible = true;
                self.animation = Some(EntranceAnimation::new(index, wall_ms));
                self.active = Some(index);
            }
            None => {
                for index in 0..self.states.len() {
                    self.deactivate_span(index, &mut updates);
                }
                self.active = None;
            }
        }

        if let Some(animation) = self.animation {
            let (scale, opacity, done) = animation.sample(wall_ms);
            let state = &mut self.states[animation.span_index];
            state.scale = scale;
            state.opacity = opacity;
            updates.push(SpanUpdate {
                index: animation.span_index,
                state: *state,
            });
            if done {
                self.animation = None;
            }
        }

        updates
    }

    /// Returns every word to the rest state in a single step.
    ///
    /// Also drops any in-flight animation so no later tick can keep
    /// mutating a word that was reset.
    pub fn reset(&mut self) -> Vec<SpanUpdate> {
        self.animation = None;
        self.active = None;
        self.states
            .iter_mut()
            .enumerate()
            .map(|(index, state)| {
                state.deactivate();
                SpanUpdate {
                    index,
                    state: *state,
                }
            })
            .collect()
    }

    /// Instantly hides one word if it is active. No fade, no tween: the
    /// deactivated appearance must win over any in-flight activation.
    fn deactivate_span(&mut self, index: usize, updates: &mut Vec<SpanUpdate>) {
        if !self.states[index].active {
            return;
        }
        self.states[index].deactivate();
        if self
            .animation
            .is_some_and(|animation| animation.span_index == index)
        {
            self.animation = None;
        }
        updates.push(SpanUpdate {
            index,
            state: self.states[index],
        });
    }
}
