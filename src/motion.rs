//! A small property tweener.
//!
//! Elements are addressed by caller-chosen handles (`T`), poses are
//! interpolated once per frame in [`Animator::advance`], and completions are
//! reported back as [`Settled`] values instead of callbacks so the owner can
//! react to them on its own terms.

mod easing;
mod timeline;

pub use easing::Easing;
pub use timeline::{scroll_progress, ScrubTimeline, Segment};

use std::collections::HashMap;
use std::hash::Hash;

/// Visual state of one animatable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    pub const HIDDEN: Pose = Pose::VISIBLE.with_opacity(0.0);

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_scale_x(mut self, scale_x: f64) -> Self {
        self.scale_x = scale_x;
        self
    }

    pub const fn with_scale_y(mut self, scale_y: f64) -> Self {
        self.scale_y = scale_y;
        self
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            scale_x: mix(self.scale_x, to.scale_x),
            scale_y: mix(self.scale_y, to.scale_y),
        }
    }

    /// True when the pose moves or resizes the element, as opposed to only
    /// changing its opacity.
    pub fn is_displaced(&self) -> bool {
        self.x != 0.0
            || self.y != 0.0
            || self.scale != 1.0
            || self.scale_x != 1.0
            || self.scale_y != 1.0
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px) scale({:.3}) scaleX({:.3}) scaleY({:.3});",
            self.opacity.clamp(0.0, 1.0),
            self.x,
            self.y,
            self.scale,
            self.scale_x,
            self.scale_y,
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::VISIBLE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: Pose, to: Pose) -> Self {
        Self {
            from,
            to,
            duration_ms: 0.0,
            delay_ms: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms.max(0.0);
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Pose at `elapsed_ms` after the tween started, and whether it is done.
    pub fn sample(&self, elapsed_ms: f64) -> (Pose, bool) {
        let local = elapsed_ms - self.delay_ms;
        if local < 0.0 {
            return (self.from, false);
        }
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let progress = local / self.duration_ms;
        if progress >= 1.0 {
            return (self.to, true);
        }
        (self.from.lerp(&self.to, self.easing.apply(progress)), false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// How a scheduled animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Finished(AnimationId),
    /// Replaced, or its element left the document before it could finish
    Dropped(AnimationId),
}

impl Settled {
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Finished(id) | Self::Dropped(id) => *id,
        }
    }
}

pub trait Animator<T> {
    /// Schedule an interpolation. The target takes the `from` pose right away.
    fn play(&mut self, target: T, tween: Tween) -> AnimationId;
    /// Set a pose without animating, dropping anything in flight on the target.
    fn place(&mut self, target: T, pose: Pose);
    /// The element behind `target` is gone.
    fn release(&mut self, target: T);
    /// Stop everything immediately. Nothing is reported for cancelled work.
    fn cancel_all(&mut self);
    /// Step to `now_ms` and collect what settled since the last frame.
    fn advance(&mut self, now_ms: f64) -> Vec<Settled>;
    fn pose(&self, target: T) -> Pose;
}

#[derive(Debug)]
struct Running<T> {
    id: AnimationId,
    target: T,
    tween: Tween,
    started_ms: Option<f64>,
}

#[derive(Debug)]
pub struct TweenEngine<T> {
    next_id: u64,
    running: Vec<Running<T>>,
    poses: HashMap<T, Pose>,
    dropped: Vec<AnimationId>,
}

impl<T> Default for TweenEngine<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            running: Vec::new(),
            poses: HashMap::new(),
            dropped: Vec::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> TweenEngine<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty() && self.dropped.is_empty()
    }

    pub fn poses(&self) -> &HashMap<T, Pose> {
        &self.poses
    }

    fn drop_target(&mut self, target: T) {
        let dropped = &mut self.dropped;
        self.running.retain(|r| {
            if r.target == target {
                dropped.push(r.id);
                false
            } else {
                true
            }
        });
    }
}

impl<T: Copy + Eq + Hash> Animator<T> for TweenEngine<T> {
    fn play(&mut self, target: T, tween: Tween) -> AnimationId {
        self.drop_target(target);
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.poses.insert(target, tween.from);
        // the clock starts on the next frame
        self.running.push(Running {
            id,
            target,
            tween,
            started_ms: None,
        });
        id
    }

    fn place(&mut self, target: T, pose: Pose) {
        self.drop_target(target);
        self.poses.insert(target, pose);
    }

    fn release(&mut self, target: T) {
        self.drop_target(target);
        self.poses.remove(&target);
    }

    fn cancel_all(&mut self) {
        self.running.clear();
        self.dropped.clear();
    }

    fn advance(&mut self, now_ms: f64) -> Vec<Settled> {
        let mut settled = self
            .dropped
            .drain(..)
            .map(Settled::Dropped)
            .collect::<Vec<_>>();
        let poses = &mut self.poses;
        self.running.retain_mut(|r| {
            let started = *r.started_ms.get_or_insert(now_ms);
            let (pose, done) = r.tween.sample(now_ms - started);
            poses.insert(r.target, pose);
            if done {
                settled.push(Settled::Finished(r.id));
            }
            !done
        });
        settled
    }

    fn pose(&self, target: T) -> Pose {
        self.poses.get(&target).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_in(ms: f64) -> Tween {
        Tween::new(Pose::HIDDEN, Pose::VISIBLE)
            .duration(ms)
            .easing(Easing::Linear)
    }

    #[test]
    fn test_sample_respects_delay() {
        let tween = fade_in(100.0).delay(50.0);
        assert_eq!(tween.sample(0.0), (Pose::HIDDEN, false));
        assert_eq!(tween.sample(49.0), (Pose::HIDDEN, false));
        let (pose, done) = tween.sample(100.0);
        assert!((pose.opacity - 0.5).abs() < 1e-9);
        assert!(!done);
        assert_eq!(tween.sample(150.0), (Pose::VISIBLE, true));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(Pose::HIDDEN, Pose::VISIBLE);
        assert_eq!(tween.sample(0.0), (Pose::VISIBLE, true));
    }

    #[test]
    fn test_engine_clock_starts_on_next_frame() {
        let mut engine = TweenEngine::new();
        let id = engine.play("title", fade_in(100.0));
        assert_eq!(engine.pose("title"), Pose::HIDDEN);

        assert!(engine.advance(5_000.0).is_empty());
        assert_eq!(engine.pose("title").opacity, 0.0);

        assert!(engine.advance(5_050.0).is_empty());
        assert!((engine.pose("title").opacity - 0.5).abs() < 1e-9);

        assert_eq!(engine.advance(5_100.0), vec![Settled::Finished(id)]);
        assert_eq!(engine.pose("title"), Pose::VISIBLE);
        assert!(engine.is_idle());
    }

    #[test]
    fn test_engine_replacing_drops_previous() {
        let mut engine = TweenEngine::new();
        let first = engine.play("card", fade_in(100.0));
        let second = engine.play("card", fade_in(200.0));
        assert_ne!(first, second);

        let settled = engine.advance(0.0);
        assert_eq!(settled, vec![Settled::Dropped(first)]);
        let settled = engine.advance(200.0);
        assert_eq!(settled, vec![Settled::Finished(second)]);
    }

    #[test]
    fn test_engine_release_reports_drop() {
        let mut engine = TweenEngine::new();
        let id = engine.play("card", fade_in(100.0));
        engine.advance(0.0);
        engine.release("card");
        assert_eq!(engine.advance(10.0), vec![Settled::Dropped(id)]);
        // released targets fall back to the identity pose
        assert_eq!(engine.pose("card"), Pose::VISIBLE);
    }

    #[test]
    fn test_engine_cancel_all_is_silent() {
        let mut engine = TweenEngine::new();
        engine.play("a", fade_in(100.0));
        engine.play("b", fade_in(100.0));
        engine.release("b");
        engine.cancel_all();
        assert!(engine.is_idle());
        assert!(engine.advance(1_000.0).is_empty());
        // poses are left where they were
        assert_eq!(engine.pose("a"), Pose::HIDDEN);
    }

    #[test]
    fn test_place_stops_running_tween() {
        let mut engine = TweenEngine::new();
        let id = engine.play("a", fade_in(100.0));
        engine.place("a", Pose::HIDDEN.with_y(20.0));
        assert_eq!(engine.advance(0.0), vec![Settled::Dropped(id)]);
        engine.advance(500.0);
        assert_eq!(engine.pose("a"), Pose::HIDDEN.with_y(20.0));
    }

    #[test]
    fn test_css_output() {
        let css = Pose::HIDDEN.with_x(-20.0).to_css();
        assert!(css.starts_with("opacity: 0.000;"));
        assert!(css.contains("translate(-20.00px, 0.00px)"));
        assert!(!Pose::HIDDEN.is_displaced());
        assert!(Pose::VISIBLE.with_scale(0.8).is_displaced());
    }
}
