use std::time::Duration;

/// How long a settle or wheel step animates.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

/// Timing of a translate transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Zero-length transition: the content jumps straight to its target.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }

    /// The transition used after a release or wheel step.
    pub fn settle() -> Self {
        Self::new(SETTLE_DURATION, Easing::EaseOut)
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::settle()
    }
}

/// Progress curve of a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic deceleration: fast start, gentle landing on the row.
    EaseOut,
}

impl Easing {
    /// Map linear progress in `0.0..=1.0` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => t * (2.0 - t),
        }
    }
}
