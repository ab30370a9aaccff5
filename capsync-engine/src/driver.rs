//! Per-frame caption driver
//!
//! Glues the resolver to the host's render surface and playback source.
//! The host owns the frame loop; the driver owns the rule for what one
//! frame does: nothing while paused, one reset when playback ends, one
//! resolution tick otherwise.

use crate::playback::PlaybackSource;
use crate::resolver::ActiveWordResolver;
use crate::surface::CaptionSurface;
use crate::{Error, Result};
use capsync_core::{CaptionStyle, WordSpan};
use tracing::warn;

/// Drives caption state once per display frame.
///
/// Collaborators are injected explicitly: the playback source at
/// construction, the render surface via [`attach`](Self::attach). Using
/// the driver before a surface is attached is an error.
pub struct CaptionDriver<P: PlaybackSource> {
    resolver: ActiveWordResolver,
    playback: P,
    surface: Option<Box<dyn CaptionSurface>>,
    style: CaptionStyle,
    ended_handled: bool,
}

impl<P: PlaybackSource> CaptionDriver<P> {
    /// Creates a driver around a playback source, with the default style
    /// and no timeline loaded
    pub fn new(playback: P) -> Self {
        Self {
            resolver: ActiveWordResolver::new(),
            playback,
            surface: None,
            style: CaptionStyle::default(),
            ended_handled: false,
        }
    }

    /// Attaches the render surface the captions will be drawn on
    pub fn attach(&mut self, surface: Box<dyn CaptionSurface>) {
        self.surface = Some(surface);
    }

    /// The resolver, for state inspection
    pub fn resolver(&self) -> &ActiveWordResolver {
        &self.resolver
    }

    /// The injected playback source
    pub fn playback(&self) -> &P {
        &self.playback
    }

    /// Mutable access to the playback source, for hosts that also control it
    pub fn playback_mut(&mut self) -> &mut P {
        &mut self.playback
    }

    /// The current caption style
    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }

    /// Loads a timeline and builds one rest-state text node per word
    pub fn load(&mut self, spans: Vec<WordSpan>) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(Error::SurfaceNotAttached)?;
        surface.rebuild(&spans, &self.style);
        self.resolver.load(spans);
        self.ended_handled = false;
        Ok(())
    }

    /// Replaces the caption style wholesale.
    ///
    /// Destructive: all text nodes are rebuilt and any in-flight entrance
    /// animation is discarded along with the old word states.
    pub fn set_style(&mut self, style: CaptionStyle) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(Error::SurfaceNotAttached)?;
        self.style = style;
        surface.rebuild(self.resolver.spans(), &self.style);
        let spans = self.resolver.spans().to_vec();
        self.resolver.load(spans);
        Ok(())
    }

    /// Starts a playback session from a clean slate.
    ///
    /// Asks the playback source to play if it is currently paused. A
    /// refusal (autoplay restriction) is logged and swallowed; the session
    /// simply begins when the user starts playback by hand.
    pub fn start(&mut self) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(Error::SurfaceNotAttached)?;
        for update in self.resolver.reset() {
            surface.apply(update.index, &update.state);
        }
        self.ended_handled = false;

        if self.playback.paused() {
            if let Err(err) = self.playback.play() {
                warn!(%err, "could not start playback automatically");
            }
        }
        Ok(())
    }

    /// Runs one display frame at wall-clock instant `wall_ms`.
    ///
    /// Paused playback is a no-op, so a paused host wastes no work and
    /// cannot produce stale activations. The first frame after playback
    /// ends performs a full reset; further frames are no-ops until the
    /// next load or start.
    pub fn frame(&mut self, wall_ms: u64) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(Error::SurfaceNotAttached)?;

        if self.playback.ended() {
            if !self.ended_handled {
                for update in self.resolver.reset() {
                    surface.apply(update.index, &update.state);
                }
                self.ended_handled = true;
            }
            return Ok(());
        }

        if self.playback.paused() {
            return Ok(());
        }

        self.ended_handled = false;
        let time = self.playback.current_time();
        for update in self.resolver.tick(time, wall_ms) {
            surface.apply(update.index, &update.state);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackError;
    use capsync_core::WordState;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every surface call for assertions
    #[derive(Default)]
    struct Recording {
        rebuilds: usize,
        applied: Vec<(usize, WordState)>,
    }

    #[derive(Clone, Default)]
    struct RecordingSurface(Rc<RefCell<Recording>>);

    impl CaptionSurface for RecordingSurface {
        fn rebuild(&mut self, _spans: &[WordSpan], _style: &CaptionStyle) {
            self.0.borrow_mut().rebuilds += 1;
        }

        fn apply(&mut self, index: usize, state: &WordState) {
            self.0.borrow_mut().applied.push((index, *state));
        }
    }

    /// Scripted playback clock
    struct FakePlayback {
        time: f64,
        paused: bool,
        ended: bool,
        reject_play: bool,
        play_calls: usize,
    }

    impl FakePlayback {
        fn playing_at(time: f64) -> Self {
            Self {
                time,
                paused: false,
                ended: false,
                reject_play: false,
                play_calls: 0,
            }
        }
    }

    impl PlaybackSource for FakePlayback {
        fn current_time(&self) -> f64 {
            self.time
        }

        fn paused(&self) -> bool {
            self.paused
        }

        fn ended(&self) -> bool {
            self.ended
        }

        fn play(&mut self) -> std::result::Result<(), PlaybackError> {
            self.play_calls += 1;
            if self.reject_play {
                Err(PlaybackError("autoplay blocked".to_string()))
            } else {
                self.paused = false;
                Ok(())
            }
        }
    }

    fn hello_world() -> Vec<WordSpan> {
        vec![
            WordSpan::new("hello", 0.0, 0.5),
            WordSpan::new("world", 0.5, 1.0),
        ]
    }

    fn driver_with_surface() -> (CaptionDriver<FakePlayback>, RecordingSurface) {
        let surface = RecordingSurface::default();
        let mut driver = CaptionDriver::new(FakePlayback::playing_at(0.3));
        driver.attach(Box::new(surface.clone()));
        (driver, surface)
    }

    #[test]
    fn test_frame_without_surface_fails() {
        let mut driver = CaptionDriver::new(FakePlayback::playing_at(0.0));
        assert!(matches!(driver.frame(0), Err(Error::SurfaceNotAttached)));
        assert!(matches!(
            driver.load(hello_world()),
            Err(Error::SurfaceNotAttached)
        ));
    }

    #[test]
    fn test_frame_forwards_updates_to_surface() {
        let (mut driver, surface) = driver_with_surface();
        driver.load(hello_world()).unwrap();

        driver.frame(0).unwrap();

        let recording = surface.0.borrow();
        assert_eq!(recording.rebuilds, 1);
        assert_eq!(recording.applied.len(), 1);
        let (index, state) = recording.applied[0];
        assert_eq!(index, 0);
        assert!(state.active && state.visible);
    }

    #[test]
    fn test_paused_playback_applies_nothing() {
        let (mut driver, surface) = driver_with_surface();
        driver.load(hello_world()).unwrap();
        driver.frame(0).unwrap();
        let applied_before = surface.0.borrow().applied.len();

        driver.playback.paused = true;
        driver.frame(16).unwrap();
        driver.frame(32).unwrap();

        assert_eq!(surface.0.borrow().applied.len(), applied_before);
        // The word that was active stays as it was, no stale mutation
        assert_eq!(driver.resolver().active_index(), Some(0));
    }

    #[test]
    fn test_ended_playback_resets_once_then_idles() {
        let (mut driver, surface) = driver_with_surface();
        driver.load(hello_world()).unwrap();
        driver.frame(0).unwrap();

        driver.playback.ended = true;
        driver.frame(16).unwrap();

        let applied_after_end = {
            let recording = surface.0.borrow();
            let resets: Vec<_> = recording.applied.iter().rev().take(2).collect();
            assert!(resets.iter().all(|(_, s)| *s == WordState::rest()));
            recording.applied.len()
        };
        assert_eq!(driver.resolver().active_index(), None);

        // Further frames after the reset do nothing
        driver.frame(32).unwrap();
        driver.frame(48).unwrap();
        assert_eq!(surface.0.borrow().applied.len(), applied_after_end);
    }

    #[test]
    fn test_start_plays_paused_source() {
        let (mut driver, _surface) = driver_with_surface();
        driver.load(hello_world()).unwrap();
        driver.playback.paused = true;

        driver.start().unwrap();

        assert_eq!(driver.playback.play_calls, 1);
        assert!(!driver.playback.paused);
    }

    #[test]
    fn test_rejected_autoplay_is_not_fatal() {
        let (mut driver, _surface) = driver_with_surface();
        driver.load(hello_world()).unwrap();
        driver.playback.paused = true;
        driver.playback.reject_play = true;

        // The refusal is logged, not surfaced
        driver.start().unwrap();
        assert!(driver.playback.paused);
    }

    #[test]
    fn test_set_style_rebuilds_and_discards_animation() {
        let (mut driver, surface) = driver_with_surface();
        driver.load(hello_world()).unwrap();
        driver.frame(0).unwrap();
        driver.frame(150).unwrap(); // mid-animation

        let mut style = CaptionStyle::default();
        style.font_size = 64.0;
        driver.set_style(style).unwrap();

        assert_eq!(surface.0.borrow().rebuilds, 2);
        assert_eq!(driver.resolver().active_index(), None);
        assert!(driver
            .resolver()
            .states()
            .iter()
            .all(|s| *s == WordState::rest()));
        assert_eq!(driver.style().font_size, 64.0);
    }
}
