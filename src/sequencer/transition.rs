use crate::motion::{Pose, Tween};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The three directional hand-offs, cycled by the index of the slide being
/// left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStyle {
    Horizontal,
    Vertical,
    Zoom,
}

impl TransitionStyle {
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Horizontal,
            1 => Self::Vertical,
            _ => Self::Zoom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Directional {
        style: TransitionStyle,
        direction: Direction,
    },
    CrossFade,
}

impl TransitionKind {
    pub fn directional(from_index: usize, direction: Direction) -> Self {
        Self::Directional {
            style: TransitionStyle::for_index(from_index),
            direction,
        }
    }

    pub fn is_directional(&self) -> bool {
        matches!(self, Self::Directional { .. })
    }

    /// Where the outgoing slide ends up and where the incoming one starts.
    fn poses(&self) -> (Pose, Pose) {
        use Direction::*;
        use TransitionStyle::*;

        let hidden = Pose::HIDDEN;
        match *self {
            Self::CrossFade => (hidden, hidden),
            Self::Directional { style, direction } => match (style, direction) {
                (Horizontal, Forward) => (hidden.with_x(100.0), hidden.with_x(-100.0)),
                (Horizontal, Backward) => (hidden.with_x(-100.0), hidden.with_x(100.0)),
                (Vertical, Forward) => (hidden.with_y(-50.0), hidden.with_y(50.0)),
                (Vertical, Backward) => (hidden.with_y(50.0), hidden.with_y(-50.0)),
                (Zoom, Forward) => (hidden.with_scale(0.8), hidden.with_scale(1.2)),
                (Zoom, Backward) => (hidden.with_scale(1.2), hidden.with_scale(0.8)),
            },
        }
    }

    pub fn exit(&self, duration_ms: f64) -> Tween {
        Tween::new(Pose::VISIBLE, self.poses().0).duration(duration_ms)
    }

    pub fn enter(&self, duration_ms: f64) -> Tween {
        Tween::new(self.poses().1, Pose::VISIBLE).duration(duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_cycles_every_three() {
        let styles = (0..7).map(TransitionStyle::for_index).collect::<Vec<_>>();
        assert_eq!(
            styles,
            vec![
                TransitionStyle::Horizontal,
                TransitionStyle::Vertical,
                TransitionStyle::Zoom,
                TransitionStyle::Horizontal,
                TransitionStyle::Vertical,
                TransitionStyle::Zoom,
                TransitionStyle::Horizontal,
            ]
        );
    }

    #[test]
    fn test_backward_mirrors_forward() {
        for index in 0..3 {
            let forward = TransitionKind::directional(index, Direction::Forward);
            let backward = TransitionKind::directional(index, Direction::Backward);
            assert_eq!(forward.exit(500.0).to, backward.enter(500.0).from);
            assert_eq!(forward.enter(500.0).from, backward.exit(500.0).to);
        }
    }

    #[test]
    fn test_horizontal_forward_offsets() {
        let kind = TransitionKind::directional(3, Direction::Forward);
        assert_eq!(kind.exit(500.0).to, Pose::HIDDEN.with_x(100.0));
        assert_eq!(kind.enter(500.0).from, Pose::HIDDEN.with_x(-100.0));
        assert_eq!(kind.enter(500.0).to, Pose::VISIBLE);
    }

    #[test]
    fn test_cross_fade_only_touches_opacity() {
        let kind = TransitionKind::CrossFade;
        assert!(!kind.is_directional());
        assert!(!kind.exit(400.0).to.is_displaced());
        assert!(!kind.enter(400.0).from.is_displaced());
    }
}
