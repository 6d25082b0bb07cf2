//! The hero slide sequencer.
//!
//! One slide is shown at a time. Navigation plays an exit animation on the
//! stage, swaps the active slide once it finishes, replays the incoming
//! template's entrance and plays the stage back in. While that is going on
//! every other navigation request is dropped.

pub mod replay;
pub mod slide;
pub mod transition;

pub use replay::Target;
pub use slide::{Body, Checkpoint, CheckpointIcon, Slide, TemplateKind};
pub use transition::{Direction, TransitionKind, TransitionStyle};

use std::collections::HashMap;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::motion::{AnimationId, Animator, Pose, Settled};

#[derive(Debug, Clone, PartialEq)]
pub struct SequencerConfig {
    /// `None` disables auto-advance
    pub auto_advance: Option<Duration>,
    pub exit_ms: f64,
    pub enter_ms: f64,
    pub cross_fade_ms: f64,
    /// Gap between a slide becoming active and its entrance replay starting
    pub arm_delay_ms: f64,
    /// Same, for the very first slide after mount
    pub initial_reveal_delay_ms: f64,
}

impl SequencerConfig {
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            auto_advance: site.auto_advance,
            ..Self::default()
        }
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            auto_advance: Some(Duration::from_millis(
                crate::config::DEFAULT_AUTO_ADVANCE_MS,
            )),
            exit_ms: 500.0,
            enter_ms: 500.0,
            cross_fade_ms: 400.0,
            arm_delay_ms: 100.0,
            initial_reveal_delay_ms: 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Exiting(AnimationId),
    Entering(AnimationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub kind: TransitionKind,
    pub stage: Stage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle { active: usize },
    Transitioning(Transition),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Busy,
    SameSlide,
    OutOfRange,
    NoSlides,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Started {
        from: usize,
        to: usize,
        kind: TransitionKind,
    },
    Ignored(Ignored),
}

/// What the view needs to draw one frame of the hero.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub active: usize,
    pub transitioning: bool,
    pub armed: Option<TemplateKind>,
    pub poses: HashMap<Target, Pose>,
}

impl Frame {
    pub fn pose(&self, target: Target) -> Pose {
        self.poses.get(&target).copied().unwrap_or_default()
    }

    pub fn style(&self, target: Target) -> String {
        self.pose(target).to_css()
    }
}

pub struct Sequencer<'s, A> {
    slides: &'s [Slide],
    animator: A,
    config: SequencerConfig,
    phase: Phase,
    armed: Option<TemplateKind>,
    mounted: bool,
    auto_advance_at: Option<f64>,
}

impl<'s, A: Animator<Target>> Sequencer<'s, A> {
    pub fn new(slides: &'s [Slide], animator: A, config: SequencerConfig) -> Self {
        let mut sequencer = Self {
            slides,
            animator,
            config,
            phase: Phase::Idle { active: 0 },
            armed: None,
            mounted: true,
            auto_advance_at: None,
        };
        if !slides.is_empty() {
            sequencer.animator.place(Target::Stage, Pose::VISIBLE);
            sequencer.arm(0, sequencer.config.initial_reveal_delay_ms);
        }
        sequencer
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &'s [Slide] {
        self.slides
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn armed(&self) -> Option<TemplateKind> {
        self.armed
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The slide on screen. During a transition this flips from the outgoing
    /// to the incoming index once the exit animation has finished.
    pub fn active_index(&self) -> usize {
        match self.phase {
            Phase::Idle { active } => active,
            Phase::Transitioning(Transition {
                from,
                stage: Stage::Exiting(_),
                ..
            }) => from,
            Phase::Transitioning(Transition {
                to,
                stage: Stage::Entering(_),
                ..
            }) => to,
        }
    }

    pub fn active_slide(&self) -> Option<&'s Slide> {
        self.slides.get(self.active_index())
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    pub fn pose(&self, target: Target) -> Pose {
        self.animator.pose(target)
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn snapshot(&self) -> Frame {
        let mut poses = HashMap::new();
        poses.insert(Target::Stage, self.animator.pose(Target::Stage));
        if let Some(slide) = self.active_slide() {
            for reveal in replay::entrance(slide) {
                poses.insert(reveal.target, self.animator.pose(reveal.target));
            }
        }
        Frame {
            active: self.active_index(),
            transitioning: self.is_transitioning(),
            armed: self.armed,
            poses,
        }
    }

    pub fn advance(&mut self) -> Navigation {
        self.step(Direction::Forward)
    }

    pub fn retreat(&mut self) -> Navigation {
        self.step(Direction::Backward)
    }

    pub fn jump_to(&mut self, index: usize) -> Navigation {
        let active = match self.idle_index() {
            Ok(active) => active,
            Err(reason) => return self.ignore(reason),
        };
        if index >= self.slides.len() {
            return self.ignore(Ignored::OutOfRange);
        }
        if index == active {
            return self.ignore(Ignored::SameSlide);
        }
        self.begin(active, index, TransitionKind::CrossFade)
    }

    /// Back to the first slide, e.g. when the site logo is clicked.
    pub fn reset(&mut self) -> Navigation {
        self.jump_to(0)
    }

    /// Frame entry point: steps animations, handles their completions and
    /// fires the auto-advance timer.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.mounted {
            return;
        }
        for settled in self.animator.advance(now_ms) {
            self.on_settled(settled, now_ms);
        }

        let Some(interval) = self.interval_ms() else {
            return;
        };
        match self.auto_advance_at {
            None => self.auto_advance_at = Some(now_ms + interval),
            Some(due) if now_ms >= due => {
                if let Navigation::Ignored(reason) = self.advance() {
                    log::debug!("auto-advance skipped: {reason:?}");
                }
                // rescheduled from now, so missed intervals never pile up
                self.auto_advance_at = Some(now_ms + interval);
            }
            Some(_) => {}
        }
    }

    /// Tear down: no timer, nothing in flight, never stuck transitioning.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.animator.cancel_all();
        self.auto_advance_at = None;
        self.phase = Phase::Idle {
            active: self.active_index(),
        };
        self.mounted = false;
        log::debug!("sequencer unmounted on slide {}", self.active_index());
    }

    fn interval_ms(&self) -> Option<f64> {
        self.config
            .auto_advance
            .map(|interval| interval.as_secs_f64() * 1_000.0)
    }

    fn idle_index(&self) -> Result<usize, Ignored> {
        if !self.mounted {
            return Err(Ignored::Unmounted);
        }
        if self.slides.is_empty() {
            return Err(Ignored::NoSlides);
        }
        match self.phase {
            Phase::Idle { active } => Ok(active),
            Phase::Transitioning(_) => Err(Ignored::Busy),
        }
    }

    fn ignore(&self, reason: Ignored) -> Navigation {
        log::debug!("navigation ignored: {reason:?}");
        Navigation::Ignored(reason)
    }

    fn step(&mut self, direction: Direction) -> Navigation {
        let active = match self.idle_index() {
            Ok(active) => active,
            Err(reason) => return self.ignore(reason),
        };
        let count = self.slides.len();
        let to = match direction {
            Direction::Forward => (active + 1) % count,
            Direction::Backward => (active + count - 1) % count,
        };
        self.begin(active, to, TransitionKind::directional(active, direction))
    }

    fn durations(&self, kind: TransitionKind) -> (f64, f64) {
        match kind {
            TransitionKind::CrossFade => (self.config.cross_fade_ms, self.config.cross_fade_ms),
            TransitionKind::Directional { .. } => (self.config.exit_ms, self.config.enter_ms),
        }
    }

    fn begin(&mut self, from: usize, to: usize, kind: TransitionKind) -> Navigation {
        let (exit_ms, _) = self.durations(kind);
        let id = self.animator.play(Target::Stage, kind.exit(exit_ms));
        self.phase = Phase::Transitioning(Transition {
            from,
            to,
            kind,
            stage: Stage::Exiting(id),
        });
        log::debug!("slide {from} -> {to} ({kind:?})");
        Navigation::Started { from, to, kind }
    }

    fn on_settled(&mut self, settled: Settled, now_ms: f64) {
        let Phase::Transitioning(transition) = self.phase else {
            return;
        };
        let (Stage::Exiting(current) | Stage::Entering(current)) = transition.stage;
        if settled.id() != current {
            // reveal tweens and stale ids
            return;
        }
        match (transition.stage, settled) {
            (Stage::Exiting(_), Settled::Finished(_)) => self.swap_in(transition),
            (Stage::Entering(_), Settled::Finished(_)) => self.settle(transition.to, now_ms),
            (stage, Settled::Dropped(_)) => {
                log::warn!("stage animation lost mid-transition, settling on slide {}", transition.to);
                if matches!(stage, Stage::Exiting(_)) {
                    self.disarm(transition.from);
                    self.arm(transition.to, self.config.arm_delay_ms);
                }
                self.animator.place(Target::Stage, Pose::VISIBLE);
                self.settle(transition.to, now_ms);
            }
        }
    }

    fn swap_in(&mut self, transition: Transition) {
        self.disarm(transition.from);
        self.arm(transition.to, self.config.arm_delay_ms);
        let (_, enter_ms) = self.durations(transition.kind);
        let id = self
            .animator
            .play(Target::Stage, transition.kind.enter(enter_ms));
        self.phase = Phase::Transitioning(Transition {
            stage: Stage::Entering(id),
            ..transition
        });
    }

    fn settle(&mut self, active: usize, now_ms: f64) {
        self.phase = Phase::Idle { active };
        self.auto_advance_at = self.interval_ms().map(|interval| now_ms + interval);
        log::debug!("settled on slide {active}");
    }

    fn disarm(&mut self, index: usize) {
        if let Some(slide) = self.slides.get(index) {
            for reveal in replay::entrance(slide) {
                self.animator.release(reveal.target);
            }
        }
        self.armed = None;
    }

    /// Put every reveal of the slide back in its hidden pose, then replay the
    /// whole script `offset_ms` from now.
    fn arm(&mut self, index: usize, offset_ms: f64) {
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        let script = replay::entrance(slide);
        for reveal in &script {
            self.animator.place(reveal.target, reveal.hidden());
        }
        for reveal in script {
            let tween = reveal.tween.delay(reveal.tween.delay_ms + offset_ms);
            self.animator.play(reveal.target, tween);
        }
        self.armed = Some(slide.template);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SLIDES;
    use crate::motion::{Tween, TweenEngine};

    const FRAME_MS: f64 = 16.0;

    /// Wraps the real engine and records what the stage was asked to do.
    #[derive(Default)]
    struct Recorder {
        engine: TweenEngine<Target>,
        stage_tweens: Vec<Tween>,
        released: Vec<Target>,
    }

    impl Animator<Target> for Recorder {
        fn play(&mut self, target: Target, tween: Tween) -> AnimationId {
            if target == Target::Stage {
                self.stage_tweens.push(tween);
            }
            self.engine.play(target, tween)
        }

        fn place(&mut self, target: Target, pose: Pose) {
            self.engine.place(target, pose)
        }

        fn release(&mut self, target: Target) {
            self.engine.release(target)
        }

        fn cancel_all(&mut self) {
            self.engine.cancel_all()
        }

        fn advance(&mut self, now_ms: f64) -> Vec<Settled> {
            self.engine.advance(now_ms)
        }

        fn pose(&self, target: Target) -> Pose {
            self.engine.pose(target)
        }
    }

    fn manual() -> SequencerConfig {
        SequencerConfig {
            auto_advance: None,
            ..SequencerConfig::default()
        }
    }

    struct Harness {
        seq: Sequencer<'static, Recorder>,
        now: f64,
    }

    impl Harness {
        fn new(config: SequencerConfig) -> Self {
            Self {
                seq: Sequencer::new(&SLIDES, Recorder::default(), config),
                now: 0.0,
            }
        }

        fn tick(&mut self, ms: f64) {
            self.now += ms;
            self.seq.tick(self.now);
        }

        /// Tick until the running transition is over.
        fn settle(&mut self) {
            self.tick(FRAME_MS);
            for _ in 0..1_000 {
                if !self.seq.is_transitioning() {
                    return;
                }
                self.tick(FRAME_MS);
            }
            panic!("transition never settled");
        }

        fn go_to(&mut self, index: usize) {
            while self.seq.active_index() != index {
                self.seq.advance();
                self.settle();
            }
        }
    }

    #[test]
    fn test_starts_idle_on_first_slide() {
        let h = Harness::new(manual());
        assert_eq!(h.seq.phase(), Phase::Idle { active: 0 });
        assert_eq!(h.seq.armed(), Some(TemplateKind::Title));
        assert!(!h.seq.is_transitioning());
        assert_eq!(h.seq.pose(Target::Stage), Pose::VISIBLE);
        // first slide's reveals wait in their hidden pose
        assert_eq!(h.seq.pose(Target::Heading).opacity, 0.0);
    }

    #[test]
    fn test_advance_visits_every_slide_and_wraps() {
        let mut h = Harness::new(manual());
        let mut seen = Vec::new();
        for _ in 0..5 {
            assert!(matches!(h.seq.advance(), Navigation::Started { .. }));
            h.settle();
            seen.push(h.seq.active_index());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_advance_ignored_while_transitioning() {
        let mut h = Harness::new(manual());
        assert!(matches!(h.seq.advance(), Navigation::Started { .. }));
        for _ in 0..10 {
            assert_eq!(h.seq.advance(), Navigation::Ignored(Ignored::Busy));
            assert_eq!(h.seq.retreat(), Navigation::Ignored(Ignored::Busy));
            assert_eq!(h.seq.jump_to(3), Navigation::Ignored(Ignored::Busy));
        }
        h.settle();
        assert_eq!(h.seq.active_index(), 1);
        // one exit, one entrance
        assert_eq!(h.seq.animator().stage_tweens.len(), 2);
    }

    #[test]
    fn test_index_changes_when_exit_finishes() {
        let mut h = Harness::new(manual());
        h.seq.advance();
        h.tick(FRAME_MS);
        assert!(h.seq.is_transitioning());
        assert_eq!(h.seq.active_index(), 0);
        h.tick(500.0);
        assert!(h.seq.is_transitioning());
        assert_eq!(h.seq.active_index(), 1);
        assert_eq!(h.seq.armed(), Some(TemplateKind::BulletList));
        h.tick(FRAME_MS);
        h.tick(500.0);
        assert!(!h.seq.is_transitioning());
    }

    #[test]
    fn test_retreat_then_advance_round_trips() {
        let mut h = Harness::new(manual());
        h.go_to(3);
        h.seq.retreat();
        h.settle();
        assert_eq!(h.seq.active_index(), 2);
        h.seq.advance();
        h.settle();
        assert_eq!(h.seq.active_index(), 3);
    }

    #[test]
    fn test_retreat_wraps_from_first_slide() {
        let mut h = Harness::new(manual());
        h.seq.retreat();
        h.settle();
        assert_eq!(h.seq.active_index(), SLIDES.len() - 1);
    }

    #[test]
    fn test_retreat_from_third_slide_uses_mirrored_zoom() {
        let mut h = Harness::new(manual());
        h.go_to(2);
        let nav = h.seq.retreat();
        assert_eq!(
            nav,
            Navigation::Started {
                from: 2,
                to: 1,
                kind: TransitionKind::Directional {
                    style: TransitionStyle::Zoom,
                    direction: Direction::Backward,
                },
            }
        );
        h.settle();
        assert_eq!(h.seq.active_index(), 1);
        let tweens = &h.seq.animator().stage_tweens;
        let exit = tweens[tweens.len() - 2];
        let enter = tweens[tweens.len() - 1];
        assert_eq!(exit.to.scale, 1.2);
        assert_eq!(enter.from.scale, 0.8);
    }

    #[test]
    fn test_jump_to_cross_fades_once() {
        let mut h = Harness::new(manual());
        let before = h.seq.animator().stage_tweens.len();
        assert_eq!(
            h.seq.jump_to(3),
            Navigation::Started {
                from: 0,
                to: 3,
                kind: TransitionKind::CrossFade,
            }
        );
        h.settle();
        assert_eq!(h.seq.active_index(), 3);
        let tweens = &h.seq.animator().stage_tweens[before..];
        assert_eq!(tweens.len(), 2);
        assert!(tweens
            .iter()
            .all(|t| !t.from.is_displaced() && !t.to.is_displaced()));
    }

    #[test]
    fn test_jump_to_same_slide_is_noop() {
        let mut h = Harness::new(manual());
        assert_eq!(h.seq.jump_to(0), Navigation::Ignored(Ignored::SameSlide));
        assert!(!h.seq.is_transitioning());
        assert!(h.seq.animator().stage_tweens.is_empty());
    }

    #[test]
    fn test_jump_to_out_of_range_is_noop() {
        let mut h = Harness::new(manual());
        assert_eq!(
            h.seq.jump_to(SLIDES.len()),
            Navigation::Ignored(Ignored::OutOfRange)
        );
        assert_eq!(h.seq.jump_to(usize::MAX), Navigation::Ignored(Ignored::OutOfRange));
        assert!(!h.seq.is_transitioning());
    }

    #[test]
    fn test_reset_returns_to_first_slide() {
        let mut h = Harness::new(manual());
        h.go_to(4);
        assert!(matches!(h.seq.reset(), Navigation::Started { to: 0, .. }));
        h.settle();
        assert_eq!(h.seq.active_index(), 0);
        assert_eq!(h.seq.armed(), Some(TemplateKind::Title));
    }

    #[test]
    fn test_unmount_mid_transition() {
        let mut h = Harness::new(SequencerConfig {
            auto_advance: Some(Duration::from_millis(1_000)),
            ..SequencerConfig::default()
        });
        h.seq.advance();
        h.tick(FRAME_MS);
        h.seq.unmount();
        assert!(!h.seq.is_transitioning());
        assert!(h.seq.animator().engine.is_idle());

        let frame = h.seq.snapshot();
        for _ in 0..100 {
            h.tick(250.0);
        }
        assert_eq!(h.seq.snapshot(), frame);
        assert_eq!(h.seq.advance(), Navigation::Ignored(Ignored::Unmounted));
        assert_eq!(h.seq.jump_to(2), Navigation::Ignored(Ignored::Unmounted));
    }

    #[test]
    fn test_dropped_exit_still_settles() {
        let mut h = Harness::new(manual());
        h.seq.advance();
        h.tick(FRAME_MS);
        // the stage element disappears before the exit can finish
        h.seq.animator.release(Target::Stage);
        h.tick(FRAME_MS);
        assert!(!h.seq.is_transitioning());
        assert_eq!(h.seq.active_index(), 1);
        assert_eq!(h.seq.pose(Target::Stage), Pose::VISIBLE);
        assert!(matches!(h.seq.advance(), Navigation::Started { .. }));
    }

    #[test]
    fn test_dropped_entrance_still_settles() {
        let mut h = Harness::new(manual());
        h.seq.advance();
        h.tick(FRAME_MS);
        h.tick(500.0);
        assert!(matches!(
            h.seq.phase(),
            Phase::Transitioning(Transition {
                stage: Stage::Entering(_),
                ..
            })
        ));
        h.seq.animator.release(Target::Stage);
        h.tick(FRAME_MS);
        assert_eq!(h.seq.phase(), Phase::Idle { active: 1 });
    }

    #[test]
    fn test_auto_advance_fires_on_interval() {
        let mut h = Harness::new(SequencerConfig {
            auto_advance: Some(Duration::from_millis(5_000)),
            ..SequencerConfig::default()
        });
        // first frame arms the timer
        h.tick(FRAME_MS);
        h.tick(4_900.0);
        assert!(!h.seq.is_transitioning());
        h.tick(200.0);
        assert!(h.seq.is_transitioning());
        h.settle();
        assert_eq!(h.seq.active_index(), 1);

        // rearmed after the slide change
        h.tick(4_000.0);
        assert!(!h.seq.is_transitioning());
        h.tick(1_100.0);
        assert!(h.seq.is_transitioning());
    }

    #[test]
    fn test_auto_advance_skips_when_busy_without_backlog() {
        // shorter than a full transition, so it always fires mid-flight once
        let mut h = Harness::new(SequencerConfig {
            auto_advance: Some(Duration::from_millis(300)),
            ..SequencerConfig::default()
        });
        h.tick(FRAME_MS);
        h.seq.advance();
        let mut indices = vec![h.seq.active_index()];
        for _ in 0..200 {
            h.tick(FRAME_MS);
            if indices.last() != Some(&h.seq.active_index()) {
                indices.push(h.seq.active_index());
            }
        }
        // every change is a single step forward, nothing was queued up
        for pair in indices.windows(2) {
            assert_eq!(pair[1], (pair[0] + 1) % SLIDES.len());
        }
    }

    #[test]
    fn test_manual_navigation_rearms_timer() {
        let mut h = Harness::new(SequencerConfig {
            auto_advance: Some(Duration::from_millis(5_000)),
            ..SequencerConfig::default()
        });
        h.tick(FRAME_MS);
        // just before the timer is due
        h.tick(4_900.0);
        assert!(matches!(h.seq.jump_to(2), Navigation::Started { .. }));
        h.settle();
        assert_eq!(h.seq.active_index(), 2);

        // the old deadline passed mid-jump without moving on
        h.tick(4_900.0);
        assert!(!h.seq.is_transitioning());
        assert_eq!(h.seq.active_index(), 2);
        h.tick(200.0);
        assert!(h.seq.is_transitioning());
        h.settle();
        assert_eq!(h.seq.active_index(), 3);
    }

    #[test]
    fn test_auto_advance_disabled() {
        let mut h = Harness::new(manual());
        for _ in 0..120 {
            h.tick(1_000.0);
            assert!(!h.seq.is_transitioning());
            assert_eq!(h.seq.active_index(), 0);
        }
        assert!(h.seq.animator().stage_tweens.is_empty());
    }

    #[test]
    fn test_title_slide_comes_to_rest() {
        let mut h = Harness::new(manual());
        h.tick(FRAME_MS);
        h.tick(3_000.0);
        assert!(h.seq.animator().engine.is_idle());
        assert_eq!(h.seq.pose(Target::Traveler), Pose::VISIBLE);

        // nothing left to animate, so frames stop changing
        let rested = h.seq.snapshot();
        h.tick(FRAME_MS);
        assert_eq!(h.seq.snapshot(), rested);
    }

    #[test]
    fn test_entrance_replays_identically() {
        let mut h = Harness::new(manual());
        h.seq.advance();
        h.settle();
        h.tick(3_000.0);
        h.tick(3_000.0);
        let shown = h.seq.snapshot();
        assert_eq!(shown.pose(Target::Bullet(0)), Pose::VISIBLE);

        // leave and come back to slide 1
        h.go_to(0);
        h.seq.jump_to(1);
        h.tick(FRAME_MS);
        h.tick(400.0);
        // right after arming everything is hidden again
        assert_eq!(h.seq.armed(), Some(TemplateKind::BulletList));
        assert_eq!(h.seq.pose(Target::Bullet(0)).opacity, 0.0);
        h.settle();
        h.tick(3_000.0);
        h.tick(3_000.0);
        assert_eq!(h.seq.snapshot().poses, shown.poses);
    }

    #[test]
    fn test_snapshot_covers_active_template() {
        let mut h = Harness::new(manual());
        h.go_to(2);
        let frame = h.seq.snapshot();
        assert_eq!(frame.active, 2);
        assert!(!frame.transitioning);
        assert_eq!(frame.armed, Some(TemplateKind::TimelineMap));
        let checkpoints = SLIDES[2].checkpoints().len();
        assert!(frame.poses.contains_key(&Target::Stage));
        assert!(frame.poses.contains_key(&Target::Checkpoint(checkpoints - 1)));
        assert!(!frame.poses.contains_key(&Target::Bullet(0)));
    }

    #[test]
    fn test_empty_slide_list() {
        let mut seq = Sequencer::new(&[], TweenEngine::<Target>::new(), manual());
        assert_eq!(seq.advance(), Navigation::Ignored(Ignored::NoSlides));
        assert_eq!(seq.jump_to(0), Navigation::Ignored(Ignored::NoSlides));
        seq.tick(100.0);
        assert!(seq.active_slide().is_none());
        assert_eq!(seq.armed(), None);
    }

    #[test]
    fn test_single_slide_replays_itself() {
        let mut seq = Sequencer::new(&SLIDES[..1], TweenEngine::<Target>::new(), manual());
        assert!(matches!(
            seq.advance(),
            Navigation::Started { from: 0, to: 0, .. }
        ));
        let mut now = 0.0;
        while seq.is_transitioning() {
            now += FRAME_MS;
            seq.tick(now);
        }
        assert_eq!(seq.active_index(), 0);
        assert_eq!(seq.jump_to(0), Navigation::Ignored(Ignored::SameSlide));
    }
}
