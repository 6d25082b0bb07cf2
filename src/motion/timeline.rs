//! Timelines played by scroll position instead of a clock.

use super::Easing;

/// The element starts playing when its top reaches this fraction of the
/// viewport height
const START_AT: f64 = 0.6;
/// and is done when its bottom reaches this one.
const END_AT: f64 = 0.2;

/// How far an element of `height` whose top is `top` px below the top of a
/// `viewport` px high window has scrolled through its play range, in `0..=1`.
pub fn scroll_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let start = viewport * START_AT;
    let span = start - viewport * END_AT + height;
    if span <= 0.0 {
        return 0.0;
    }
    ((start - top) / span).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Segment {
    fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    /// Eased progress of this segment at `at_ms` on the timeline.
    pub fn progress(&self, at_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return if at_ms >= self.start_ms { 1.0 } else { 0.0 };
        }
        self.easing.apply((at_ms - self.start_ms) / self.duration_ms)
    }
}

/// Segments laid out on one time axis. Sampling maps overall progress onto
/// that axis and reports where each segment is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrubTimeline {
    segments: Vec<Segment>,
}

impl ScrubTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` segments at the current end, each starting
    /// `stagger_ms` after the previous one.
    pub fn staggered(
        mut self,
        count: usize,
        duration_ms: f64,
        stagger_ms: f64,
        easing: Easing,
    ) -> Self {
        let origin = self.duration_ms();
        self.segments.extend((0..count).map(|i| Segment {
            start_ms: origin + stagger_ms * i as f64,
            duration_ms,
            easing,
        }));
        self
    }

    /// Append one segment starting `overlap_ms` before the current end.
    pub fn then(mut self, duration_ms: f64, overlap_ms: f64, easing: Easing) -> Self {
        let start_ms = (self.duration_ms() - overlap_ms).max(0.0);
        self.segments.push(Segment {
            start_ms,
            duration_ms,
            easing,
        });
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn duration_ms(&self) -> f64 {
        self.segments
            .iter()
            .map(Segment::end_ms)
            .fold(0.0, f64::max)
    }

    /// Progress of every segment, in insertion order, with the whole
    /// timeline at `progress`.
    pub fn sample(&self, progress: f64) -> Vec<f64> {
        let at_ms = progress.clamp(0.0, 1.0) * self.duration_ms();
        self.segments.iter().map(|s| s.progress(at_ms)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_range() {
        // below the start line
        assert_eq!(scroll_progress(900.0, 400.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(600.0, 400.0, 1_000.0), 0.0);
        // bottom at 20% of the viewport
        assert_eq!(scroll_progress(-200.0, 400.0, 1_000.0), 1.0);
        assert_eq!(scroll_progress(-5_000.0, 400.0, 1_000.0), 1.0);
        let halfway = scroll_progress(200.0, 400.0, 1_000.0);
        assert!((halfway - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_progress_before_layout() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_stagger_then_overlap() {
        let timeline = ScrubTimeline::new()
            .staggered(3, 500.0, 100.0, Easing::Linear)
            .then(1_000.0, 300.0, Easing::Linear);
        let starts = timeline
            .segments()
            .iter()
            .map(|s| s.start_ms)
            .collect::<Vec<_>>();
        assert_eq!(starts, vec![0.0, 100.0, 200.0, 400.0]);
        assert_eq!(timeline.duration_ms(), 1_400.0);
    }

    #[test]
    fn test_sample_follows_scroll() {
        let timeline = ScrubTimeline::new()
            .staggered(2, 500.0, 100.0, Easing::Linear)
            .then(1_000.0, 300.0, Easing::Linear);
        assert_eq!(timeline.sample(0.0), vec![0.0, 0.0, 0.0]);
        assert_eq!(timeline.sample(1.0), vec![1.0, 1.0, 1.0]);

        // 650ms in: lines done, command line 35% typed
        let at = timeline.sample(650.0 / timeline.duration_ms());
        assert_eq!(at[0], 1.0);
        assert_eq!(at[1], 1.0);
        assert!((at[2] - 0.35).abs() < 1e-9);

        // scrolling back undoes it
        assert_eq!(timeline.sample(0.0), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = ScrubTimeline::new();
        assert_eq!(timeline.duration_ms(), 0.0);
        assert!(timeline.sample(0.5).is_empty());
    }
}
