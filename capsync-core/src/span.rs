//! Timed word spans for the caption timeline

/// A single word plus the time range it covers in the audio timeline
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpan {
    /// The word's display text, whitespace-trimmed
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl WordSpan {
    /// Creates a new word span
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Checks if this span covers the given playback time.
    /// Both ends are inclusive, so a time sitting exactly on a boundary
    /// matches the spans on either side of it.
    pub fn contains(&self, time_secs: f64) -> bool {
        time_secs >= self.start && time_secs <= self.end
    }

    /// Returns the duration of this span in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let span = WordSpan::new("hello", 1.0, 2.0);

        assert!(span.contains(1.0));
        assert!(span.contains(1.5));
        assert!(span.contains(2.0));
        assert!(!span.contains(0.999));
        assert!(!span.contains(2.001));
    }

    #[test]
    fn test_duration_is_derived() {
        let span = WordSpan::new("hello", 0.25, 0.75);
        assert_eq!(span.duration(), 0.5);
    }
}
