//! Entrance scripts: what each template reveals, in which order, and when.

use crate::motion::{Easing, Pose, Tween};

use super::slide::{Slide, TemplateKind};

/// Stable handle for one animatable element of the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The container every slide is rendered into
    Stage,
    Heading,
    Subtitle,
    Tagline,
    AccentBar,
    Corner,
    Origin,
    Destination,
    Traveler,
    Socials,
    Bullet(usize),
    Footnote,
    Segment(usize),
    Marker(usize),
    Checkpoint(usize),
    Actions,
    Ornaments,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub target: Target,
    pub tween: Tween,
}

impl Reveal {
    fn new(target: Target, from: Pose, to: Pose, duration_ms: f64, delay_ms: f64) -> Self {
        Self {
            target,
            tween: Tween::new(from, to).duration(duration_ms).delay(delay_ms),
        }
    }

    fn eased(mut self, easing: Easing) -> Self {
        self.tween = self.tween.easing(easing);
        self
    }

    /// Pose the element waits in until its turn comes.
    pub fn hidden(&self) -> Pose {
        self.tween.from
    }
}

/// The reveal script for `slide`, in play order.
pub fn entrance(slide: &Slide) -> Vec<Reveal> {
    match slide.template {
        TemplateKind::Title => title(),
        TemplateKind::BulletList => bullet_list(slide),
        TemplateKind::TimelineMap => timeline_map(slide),
        TemplateKind::CallToAction => call_to_action(),
    }
}

fn fade(target: Target, duration_ms: f64, delay_ms: f64) -> Reveal {
    Reveal::new(target, Pose::HIDDEN, Pose::VISIBLE, duration_ms, delay_ms)
}

fn accent_bar() -> Reveal {
    Reveal::new(
        Target::AccentBar,
        Pose::HIDDEN.with_scale_x(0.0),
        Pose::VISIBLE.with_opacity(0.8),
        800.0,
        0.0,
    )
    .eased(Easing::Power2InOut)
}

fn title() -> Vec<Reveal> {
    vec![
        Reveal::new(
            Target::Heading,
            Pose::HIDDEN.with_y(-20.0),
            Pose::VISIBLE,
            800.0,
            0.0,
        ),
        fade(Target::Subtitle, 800.0, 300.0),
        fade(Target::Socials, 800.0, 600.0),
        fade(Target::Origin, 500.0, 0.0),
        fade(Target::Destination, 500.0, 0.0),
        // the flight itself loops in CSS, see `.hero-travel`
        fade(Target::Traveler, 500.0, 1_500.0),
    ]
}

fn bullet_list(slide: &Slide) -> Vec<Reveal> {
    let mut script = vec![
        accent_bar(),
        fade(Target::Heading, 800.0, 0.0),
        fade(Target::Subtitle, 800.0, 200.0),
        fade(Target::Tagline, 800.0, 400.0),
    ];
    script.extend((0..slide.bullets().len()).map(|i| {
        Reveal::new(
            Target::Bullet(i),
            Pose::HIDDEN.with_x(-20.0),
            Pose::VISIBLE,
            600.0,
            600.0 + 200.0 * i as f64,
        )
    }));
    if slide.footnote.is_some() {
        script.push(Reveal::new(
            Target::Footnote,
            Pose::HIDDEN.with_y(20.0),
            Pose::VISIBLE,
            800.0,
            1_600.0,
        ));
    }
    script.push(Reveal::new(
        Target::Corner,
        Pose::HIDDEN,
        Pose::VISIBLE.with_opacity(0.1),
        1_000.0,
        1_500.0,
    ));
    script
}

fn timeline_map(slide: &Slide) -> Vec<Reveal> {
    let count = slide.checkpoints().len();
    let mut script = vec![
        accent_bar(),
        Reveal::new(
            Target::Heading,
            Pose::HIDDEN.with_y(-20.0),
            Pose::VISIBLE,
            800.0,
            0.0,
        )
        .eased(Easing::Power2Out),
        Reveal::new(
            Target::Subtitle,
            Pose::HIDDEN.with_y(-15.0),
            Pose::VISIBLE,
            800.0,
            200.0,
        )
        .eased(Easing::Power2Out),
        Reveal::new(
            Target::Tagline,
            Pose::HIDDEN.with_y(-10.0),
            Pose::VISIBLE,
            800.0,
            400.0,
        )
        .eased(Easing::Power2Out),
    ];

    // segments only join neighbouring markers
    let segments = count.saturating_sub(1);
    script.extend((0..segments).map(|i| {
        let duration = if i + 1 == segments { 600.0 } else { 500.0 };
        Reveal::new(
            Target::Segment(i),
            Pose::HIDDEN.with_scale_y(0.0),
            Pose::VISIBLE,
            duration,
            600.0 + 200.0 * i as f64,
        )
        .eased(Easing::Power2InOut)
    }));
    for i in 0..count {
        let step = 200.0 * i as f64;
        script.push(
            Reveal::new(
                Target::Marker(i),
                Pose::HIDDEN.with_scale(0.5),
                Pose::VISIBLE,
                500.0,
                700.0 + step,
            )
            .eased(Easing::BackOut(1.7)),
        );
        let offset = if i % 2 == 0 { 20.0 } else { -20.0 };
        script.push(
            Reveal::new(
                Target::Checkpoint(i),
                Pose::HIDDEN.with_x(offset),
                Pose::VISIBLE,
                800.0,
                900.0 + step,
            )
            .eased(Easing::BackOut(1.7)),
        );
    }
    script.push(
        Reveal::new(
            Target::Corner,
            Pose::HIDDEN.with_scale(0.8),
            Pose::VISIBLE.with_opacity(0.1),
            1_000.0,
            1_500.0,
        )
        .eased(Easing::Power2Out),
    );
    script
}

fn call_to_action() -> Vec<Reveal> {
    let rise = |target, delay_ms| {
        Reveal::new(
            target,
            Pose::HIDDEN.with_y(30.0),
            Pose::VISIBLE,
            800.0,
            delay_ms,
        )
        .eased(Easing::Power3Out)
    };
    vec![
        rise(Target::Heading, 0.0),
        rise(Target::Tagline, 200.0),
        rise(Target::Actions, 400.0),
        rise(Target::Socials, 600.0),
        Reveal::new(
            Target::Ornaments,
            Pose::HIDDEN,
            Pose::VISIBLE.with_opacity(0.2),
            1_000.0,
            800.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::slide::{Body, Checkpoint, CheckpointIcon};

    const CHECKPOINTS: [Checkpoint; 4] = [
        Checkpoint {
            icon: CheckpointIcon::Money,
            heading: "a",
            description: "",
        },
        Checkpoint {
            icon: CheckpointIcon::Travel,
            heading: "b",
            description: "",
        },
        Checkpoint {
            icon: CheckpointIcon::Code,
            heading: "c",
            description: "",
        },
        Checkpoint {
            icon: CheckpointIcon::Rocket,
            heading: "d",
            description: "",
        },
    ];

    fn slide(template: TemplateKind, body: Body, footnote: Option<&'static str>) -> Slide {
        Slide {
            id: 1,
            template,
            title: "t",
            subtitle: "s",
            tagline: "l",
            body,
            footnote,
            backdrop: "",
        }
    }

    fn delay_of(script: &[Reveal], target: Target) -> f64 {
        script
            .iter()
            .find(|r| r.target == target)
            .map(|r| r.tween.delay_ms)
            .expect("target should be in the script")
    }

    #[test]
    fn test_bullets_are_staggered() {
        let script = entrance(&slide(
            TemplateKind::BulletList,
            Body::Lines("one\ntwo\nthree"),
            Some("Chicago"),
        ));
        assert_eq!(delay_of(&script, Target::Bullet(0)), 600.0);
        assert_eq!(delay_of(&script, Target::Bullet(1)), 800.0);
        assert_eq!(delay_of(&script, Target::Bullet(2)), 1_000.0);
        assert_eq!(delay_of(&script, Target::Footnote), 1_600.0);
        assert!(script.iter().all(|r| r.target != Target::Bullet(3)));
    }

    #[test]
    fn test_footnote_only_when_present() {
        let script = entrance(&slide(TemplateKind::BulletList, Body::Lines("one"), None));
        assert!(script.iter().all(|r| r.target != Target::Footnote));
    }

    #[test]
    fn test_timeline_reveals_in_sequence() {
        let script = entrance(&slide(
            TemplateKind::TimelineMap,
            Body::Checkpoints(&CHECKPOINTS),
            None,
        ));
        let segments = script
            .iter()
            .filter(|r| matches!(r.target, Target::Segment(_)))
            .count();
        assert_eq!(segments, 3);
        for i in 0..4 {
            let marker = delay_of(&script, Target::Marker(i));
            let checkpoint = delay_of(&script, Target::Checkpoint(i));
            assert!(marker < checkpoint);
        }
        // checkpoints alternate sides, so they slide in from alternating edges
        let from_x = |i| {
            script
                .iter()
                .find(|r| r.target == Target::Checkpoint(i))
                .map(|r| r.hidden().x)
                .unwrap()
        };
        assert_eq!(from_x(0), 20.0);
        assert_eq!(from_x(1), -20.0);
    }

    #[test]
    fn test_every_reveal_starts_hidden() {
        let slides = [
            slide(TemplateKind::Title, Body::Empty, None),
            slide(TemplateKind::BulletList, Body::Lines("a\nb"), Some("x")),
            slide(
                TemplateKind::TimelineMap,
                Body::Checkpoints(&CHECKPOINTS),
                None,
            ),
            slide(TemplateKind::CallToAction, Body::Empty, None),
        ];
        for s in &slides {
            let script = entrance(s);
            assert!(!script.is_empty());
            assert!(script.iter().all(|r| r.hidden().opacity == 0.0));
            assert!(script.iter().all(|r| r.target != Target::Stage));
        }
    }

    #[test]
    fn test_scripts_are_deterministic() {
        let s = slide(TemplateKind::BulletList, Body::Lines("a\nb"), Some("x"));
        assert_eq!(entrance(&s), entrance(&s));
    }
}
