use std::time::Instant;

use crate::event::PickerEvent;
use crate::geometry::Geometry;
use crate::item::Item;
use crate::motion::Motion;
use crate::resolver::{self, Direction, Target};
use crate::transitions::Transition;

/// The rows of one picker and the geometry they are laid out with.
#[derive(Debug, Clone)]
pub struct Column {
    pub items: Vec<Item>,
    pub geometry: Geometry,
}

impl Column {
    pub fn new(items: Vec<Item>, geometry: Geometry) -> Self {
        Self { items, geometry }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_translate(&self) -> f32 {
        self.geometry.max_translate()
    }

    pub fn min_translate(&self) -> f32 {
        self.geometry.min_translate(self.items.len())
    }

    pub fn resolve(&self, translate: f32, direction: Direction) -> Option<Target> {
        resolver::resolve(&self.geometry, &self.items, translate, direction)
    }

    fn event(&self, index: usize, change: bool) -> PickerEvent {
        let item = self.items[index].clone();
        if change {
            PickerEvent::Change { index, item }
        } else {
            PickerEvent::Scroll { index, item }
        }
    }
}

/// Scroll position of one picker instance.
///
/// Both drivers read and write this. At rest `translate` always equals
/// `geometry.translate_for_index(index)`.
#[derive(Debug, Clone)]
pub struct ScrollState {
    translate: f32,
    index: usize,
    /// Last index reported through a `Change` event.
    notified: usize,
    /// Row last shown under the slot during the current drag.
    last_previewed: Option<usize>,
    motion: Motion,
}

impl ScrollState {
    /// Rest at `index`, which is taken as already notified.
    pub fn at_index(column: &Column, index: usize) -> Self {
        let translate = column.geometry.translate_for_index(index);
        Self {
            translate,
            index,
            notified: index,
            last_previewed: None,
            motion: Motion::at_rest(translate),
        }
    }

    pub fn translate(&self) -> f32 {
        self.translate
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the last `Change` event.
    pub fn notified(&self) -> usize {
        self.notified
    }

    pub fn rendered_translate(&self, now: Instant) -> f32 {
        self.motion.value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.motion.is_animating(now)
    }

    pub(crate) fn finish_motion(&mut self, now: Instant) -> bool {
        self.motion.finish(now)
    }

    /// Start a drag from the committed row, which counts as already previewed.
    pub(crate) fn begin_gesture(&mut self) {
        self.last_previewed = Some(self.index);
    }

    /// Draw the content at `live` with no transition, for 1:1 drag tracking.
    ///
    /// Returns a `Scroll` preview when the row nearest `live` is in range,
    /// selectable and not yet previewed.
    pub(crate) fn track(&mut self, column: &Column, live: f32) -> Option<PickerEvent> {
        self.motion.jump(live);

        let snapped = resolver::snap_to_row(live, column.geometry.row_height);
        if snapped > column.max_translate() || snapped < column.min_translate() {
            return None;
        }

        let index = usize::try_from(resolver::index_from_translate(&column.geometry, snapped)).ok()?;
        if !column.items.get(index)?.is_selectable() {
            return None;
        }

        if self.last_previewed == Some(index) {
            return None;
        }
        self.last_previewed = Some(index);
        Some(column.event(index, false))
    }

    /// Settle `diff` pixels away from the current position and animate there.
    ///
    /// If every row past the landing point is disabled the content returns to
    /// its current row and nothing is reported.
    pub(crate) fn commit(
        &mut self,
        column: &Column,
        diff: f32,
        now: Instant,
        transition: Transition,
    ) -> Vec<PickerEvent> {
        let previewed = self.last_previewed.take();
        let from = self.motion.value_at(now);

        let Some(target) = column.resolve(self.translate + diff, Direction::of(diff)) else {
            log::debug!(
                "[picker] no selectable row past {} (diff {}), staying at {}",
                self.translate + diff,
                diff,
                self.index
            );
            self.motion.animate(from, self.translate, now, transition);
            return Vec::new();
        };

        log::debug!(
            "[picker] commit diff={} -> index {} translate {}",
            diff,
            target.index,
            target.translate
        );
        self.place(target);
        self.motion.animate(from, self.translate, now, transition);

        let mut events = Vec::new();
        let changed = target.index != self.notified;
        if changed || previewed.is_some_and(|index| index != target.index) {
            events.push(column.event(target.index, false));
        }
        if changed {
            self.notified = target.index;
            events.push(column.event(target.index, true));
        }
        events
    }

    /// Move to `target` without notifying. Returns true if the position changed.
    pub(crate) fn step_to(&mut self, target: Target, now: Instant, transition: Transition) -> bool {
        if target.translate == self.translate {
            return false;
        }
        let from = self.motion.value_at(now);
        self.place(target);
        self.motion.animate(from, self.translate, now, transition);
        true
    }

    /// Report `index` as the committed selection if it hasn't been already.
    pub(crate) fn notify(&mut self, column: &Column, index: usize) -> Option<PickerEvent> {
        if index == self.notified {
            return None;
        }
        self.notified = index;
        Some(column.event(index, true))
    }

    fn place(&mut self, target: Target) {
        self.translate = target.translate;
        self.index = target.index;
    }
}
