use std::time::Instant;

use crate::transitions::Transition;

/// The rendered translate of the picker content.
///
/// Holds either a resting value or an in-flight transition between two values.
/// The logical position lives in [`ScrollState`](crate::ScrollState); this only
/// answers "where is the content drawn right now".
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    from: f32,
    to: f32,
    start: Option<Instant>,
    transition: Transition,
    /// Completion of the current transition has already been reported.
    reported: bool,
}

impl Motion {
    pub fn at_rest(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: None,
            transition: Transition::instant(),
            reported: true,
        }
    }

    /// Move to `value` with no transition, cancelling any in-flight one.
    pub fn jump(&mut self, value: f32) {
        *self = Self::at_rest(value);
    }

    /// Start a transition from `from` to `to`.
    /// Instant transitions and no-op moves jump without producing a completion.
    pub fn animate(&mut self, from: f32, to: f32, now: Instant, transition: Transition) {
        if transition.is_instant() || from == to {
            self.jump(to);
            return;
        }

        *self = Self {
            from,
            to,
            start: Some(now),
            transition,
            reported: false,
        };
    }

    /// Final value of the current transition.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(start) = self.start else {
            return self.to;
        };

        let elapsed = now.saturating_duration_since(start);
        let progress = elapsed.as_secs_f32() / self.transition.duration.as_secs_f32();
        if progress >= 1.0 {
            return self.to;
        }
        let eased = self.transition.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match self.start {
            Some(start) => now.saturating_duration_since(start) < self.transition.duration,
            None => false,
        }
    }

    /// Returns true exactly once, the first time it is asked after the
    /// current transition has run its full duration.
    pub fn finish(&mut self, now: Instant) -> bool {
        if self.reported || self.is_animating(now) {
            return false;
        }
        self.reported = true;
        self.start = None;
        true
    }
}
