//! Touch and mouse drag handling.
//!
//! A gesture is press → any number of moves → release. Moves track the pointer
//! 1:1; the release either settles on the dragged distance, flings with the
//! release velocity, or (for a tap) brings the tapped row to the centre.

use std::collections::VecDeque;
use std::time::Instant;

use crate::event::{PickerEvent, Pointer};
use crate::resolver::{self, FLING_WINDOW};
use crate::state::{Column, ScrollState};
use crate::transitions::Transition;

/// Maximum number of trailing move samples kept for velocity estimation.
pub const SAMPLE_WINDOW: usize = 40;

/// Net drag distances up to this many pixels count as a tap.
pub const TAP_THRESHOLD: f32 = 10.0;

/// One pointer position recorded during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub at: Instant,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    pointer: Pointer,
    start: f32,
    /// Time of the press, or of the latest move.
    last_move_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Pressed(Gesture),
    Dragging(Gesture),
}

/// Drives the scroll state from press/move/release sequences.
#[derive(Debug, Default)]
pub struct DragDriver {
    phase: Phase,
    samples: VecDeque<DragSample>,
}

impl DragDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between a press and its release.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// True once the active gesture has moved.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn samples(&self) -> &VecDeque<DragSample> {
        &self.samples
    }

    pub fn press(&mut self, state: &mut ScrollState, pointer: Pointer, y: f32, now: Instant) {
        log::trace!("[drag] press {:?} at y={}", pointer, y);
        state.begin_gesture();
        self.samples.clear();
        self.phase = Phase::Pressed(Gesture {
            pointer,
            start: y,
            last_move_at: now,
        });
    }

    pub fn move_to(
        &mut self,
        state: &mut ScrollState,
        column: &Column,
        pointer: Pointer,
        y: f32,
        now: Instant,
    ) -> Option<PickerEvent> {
        let Some(mut gesture) = self.gesture(pointer) else {
            log::trace!("[drag] ignoring move from {:?} without press", pointer);
            return None;
        };
        log::trace!("[drag] move to y={}", y);
        gesture.last_move_at = now;
        self.phase = Phase::Dragging(gesture);

        self.samples.push_back(DragSample { at: now, y });
        if self.samples.len() > SAMPLE_WINDOW {
            self.samples.pop_front();
        }

        let live = state.translate() + (y - gesture.start);
        state.track(column, live)
    }

    pub fn release(
        &mut self,
        state: &mut ScrollState,
        column: &Column,
        pointer: Pointer,
        y: f32,
        now: Instant,
        transition: Transition,
    ) -> Vec<PickerEvent> {
        let Some(gesture) = self.gesture(pointer) else {
            log::trace!("[drag] ignoring release from {:?} without press", pointer);
            return Vec::new();
        };
        self.phase = Phase::Idle;

        let diff = self.settle_distance(column, gesture, y, now);
        state.commit(column, diff, now, transition)
    }

    /// Abandon the active gesture without settling.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.samples.clear();
    }

    fn gesture(&self, pointer: Pointer) -> Option<Gesture> {
        match self.phase {
            Phase::Pressed(gesture) | Phase::Dragging(gesture) if gesture.pointer == pointer => {
                Some(gesture)
            }
            _ => None,
        }
    }

    fn settle_distance(&self, column: &Column, gesture: Gesture, y: f32, now: Instant) -> f32 {
        let net = y - gesture.start;

        if net.abs() <= TAP_THRESHOLD {
            let diff = column.geometry.center_y() - y;
            log::debug!("[drag] tap at y={}, centring by {}", y, diff);
            return diff;
        }

        if now.saturating_duration_since(gesture.last_move_at) > FLING_WINDOW {
            log::debug!("[drag] settled drag of {}", net);
            return net;
        }

        match resolver::fling_distance(&self.samples) {
            Some(projected) => {
                log::debug!("[drag] fling: projected {} + net {}", projected, net);
                projected + net
            }
            None => 0.0,
        }
    }
}
