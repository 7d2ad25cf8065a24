use std::time::Instant;

use crate::event::PickerEvent;
use crate::resolver::{self, Direction};
use crate::state::{Column, ScrollState};
use crate::transitions::Transition;

/// Wheel deltas at or below this magnitude are ignored.
pub const WHEEL_THRESHOLD: f32 = 1.0;

/// Steps the scroll state one row per wheel event.
///
/// The selection is reported when the step's transition completes, not when
/// the wheel event arrives.
#[derive(Debug, Default)]
pub struct WheelDriver {
    transiting: bool,
}

impl WheelDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a wheel step is animating and its completion is pending.
    pub fn is_transiting(&self) -> bool {
        self.transiting
    }

    /// Returns true if the content moved.
    pub fn wheel(
        &mut self,
        state: &mut ScrollState,
        column: &Column,
        delta_y: f32,
        now: Instant,
        transition: Transition,
    ) -> bool {
        if delta_y.abs() <= WHEEL_THRESHOLD {
            return false;
        }

        let row_height = column.geometry.row_height;
        let (step, direction) = if delta_y > 0.0 {
            (-row_height, Direction::Forward)
        } else {
            (row_height, Direction::Backward)
        };

        let Some(target) = column.resolve(state.translate() + step, direction) else {
            log::debug!("[wheel] no selectable row {:?} of {}", direction, state.index());
            return false;
        };

        if !state.step_to(target, now, transition) {
            return false;
        }
        log::debug!("[wheel] step {:?} -> index {}", direction, target.index);
        self.transiting = true;
        true
    }

    /// Handle the surface's transition-completion signal.
    pub fn transition_end(&mut self, state: &mut ScrollState, column: &Column) -> Option<PickerEvent> {
        if !self.transiting {
            return None;
        }
        self.transiting = false;

        let Some(index) = resolver::index_by_walk(&column.geometry, &column.items, state.translate())
        else {
            log::warn!("[wheel] translate {} matches no row", state.translate());
            return None;
        };
        state.notify(column, index)
    }

    /// Drop a pending completion, e.g. when a drag takes over.
    pub fn cancel(&mut self) {
        self.transiting = false;
    }
}
