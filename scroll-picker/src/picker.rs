use std::fmt;
use std::time::Instant;

use crate::drag::DragDriver;
use crate::error::PickerError;
use crate::event::{Input, PickerEvent, Pointer};
use crate::geometry::Geometry;
use crate::item::Item;
use crate::options::{Listener, PickerOptions};
use crate::resolver;
use crate::state::{Column, ScrollState};
use crate::transitions::Transition;
use crate::wheel::WheelDriver;

/// A single picker column.
///
/// Feed it [`Input`]s from the host's event loop. Every call returns the
/// events it produced, in order, after delivering them to the `on_scroll` /
/// `on_change` listeners given in the options.
pub struct Picker {
    column: Column,
    state: ScrollState,
    drag: DragDriver,
    wheel: WheelDriver,
    transition: Transition,
    on_change: Option<Listener>,
    on_scroll: Option<Listener>,
}

impl Picker {
    /// Attach a picker to its rows.
    ///
    /// `measured_row_height` is the rendered height of one row; it is used
    /// unless the options override it. The initial selection is reported to
    /// `on_change` before this returns.
    pub fn new(options: PickerOptions, measured_row_height: f32) -> Result<Self, PickerError> {
        let geometry = options.geometry(measured_row_height)?;
        let PickerOptions {
            items,
            initial_index,
            transition,
            on_change,
            on_scroll,
            ..
        } = options;

        let index = match initial_index {
            Some(index) if items.get(index).is_some_and(Item::is_selectable) => index,
            Some(index) => {
                log::warn!(
                    "[picker] initial index {} is out of range or disabled, using default",
                    index
                );
                resolver::default_index(&items)?
            }
            None => resolver::default_index(&items)?,
        };

        let column = Column::new(items, geometry);
        let state = ScrollState::at_index(&column, index);
        log::debug!(
            "[picker] attached {} rows, index {} translate {}",
            column.len(),
            index,
            state.translate()
        );

        let mut picker = Self {
            column,
            state,
            drag: DragDriver::new(),
            wheel: WheelDriver::new(),
            transition,
            on_change,
            on_scroll,
        };
        let initial = PickerEvent::Change {
            index,
            item: picker.column.items[index].clone(),
        };
        picker.dispatch(vec![initial]);
        Ok(picker)
    }

    /// Process one input.
    pub fn handle(&mut self, input: Input, now: Instant) -> Vec<PickerEvent> {
        match input {
            Input::Press { pointer, y } => {
                self.press(pointer, y, now);
                Vec::new()
            }
            Input::Move { pointer, y } => self.move_to(pointer, y, now),
            Input::Release { pointer, y } => self.release(pointer, y, now),
            Input::Leave { y } => self.release(Pointer::Mouse, y, now),
            Input::Wheel { delta_y } => self.wheel(delta_y, now),
            Input::TransitionEnd => self.transition_end(),
        }
    }

    pub fn press(&mut self, pointer: Pointer, y: f32, now: Instant) {
        // A drag takes over from any pending wheel step.
        self.wheel.cancel();
        self.drag.press(&mut self.state, pointer, y, now);
    }

    pub fn move_to(&mut self, pointer: Pointer, y: f32, now: Instant) -> Vec<PickerEvent> {
        let events = self
            .drag
            .move_to(&mut self.state, &self.column, pointer, y, now)
            .into_iter()
            .collect();
        self.dispatch(events)
    }

    pub fn release(&mut self, pointer: Pointer, y: f32, now: Instant) -> Vec<PickerEvent> {
        let events = self.drag.release(
            &mut self.state,
            &self.column,
            pointer,
            y,
            now,
            self.transition,
        );
        self.dispatch(events)
    }

    pub fn wheel(&mut self, delta_y: f32, now: Instant) -> Vec<PickerEvent> {
        let moved = self
            .wheel
            .wheel(&mut self.state, &self.column, delta_y, now, self.transition);

        // A step that didn't start an animation (instant transition, or the
        // content was already drawn at the target mid-drag) never completes
        // on its own.
        if moved && !self.state.is_animating(now) {
            return self.transition_end();
        }
        Vec::new()
    }

    /// The surface finished animating the content.
    pub fn transition_end(&mut self) -> Vec<PickerEvent> {
        let events = self
            .wheel
            .transition_end(&mut self.state, &self.column)
            .into_iter()
            .collect();
        self.dispatch(events)
    }

    /// Advance time for hosts without a native transition-end signal.
    /// Completes a wheel step once its transition has run.
    pub fn tick(&mut self, now: Instant) -> Vec<PickerEvent> {
        if self.state.finish_motion(now) {
            return self.transition_end();
        }
        Vec::new()
    }

    /// Settle on `index`, skipping disabled rows in the direction of travel.
    pub fn select(&mut self, index: usize, now: Instant) -> Result<Vec<PickerEvent>, PickerError> {
        if index >= self.column.len() {
            return Err(PickerError::IndexOutOfRange {
                index,
                len: self.column.len(),
            });
        }

        self.drag.cancel();
        self.wheel.cancel();
        let diff = self.column.geometry.translate_for_index(index) - self.state.translate();
        let events = self
            .state
            .commit(&self.column, diff, now, self.transition);
        Ok(self.dispatch(events))
    }

    /// The host moved the picker on the page.
    pub fn set_viewport_top(&mut self, viewport_top: f32) {
        self.column.geometry.viewport_top = viewport_top;
    }

    /// Index of the row in the selection slot.
    pub fn selected_index(&self) -> usize {
        self.state.index()
    }

    pub fn selected_item(&self) -> &Item {
        &self.column.items[self.state.index()]
    }

    /// Resting translate of the content.
    pub fn translate(&self) -> f32 {
        self.state.translate()
    }

    /// Where the content should be drawn at `now`.
    pub fn rendered_translate(&self, now: Instant) -> f32 {
        self.state.rendered_translate(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn items(&self) -> &[Item] {
        &self.column.items
    }

    pub fn geometry(&self) -> &Geometry {
        &self.column.geometry
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    fn dispatch(&mut self, events: Vec<PickerEvent>) -> Vec<PickerEvent> {
        for event in &events {
            let listener = match event {
                PickerEvent::Scroll { .. } => self.on_scroll.as_mut(),
                PickerEvent::Change { .. } => self.on_change.as_mut(),
            };
            if let Some(listener) = listener {
                listener(event.item(), event.index());
            }
        }
        events
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("column", &self.column)
            .field("state", &self.state)
            .field("drag", &self.drag)
            .field("wheel", &self.wheel)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}
