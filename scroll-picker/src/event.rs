use crate::item::Item;

/// Wheel delta reported for one notch of a terminal scroll wheel.
pub const LINE_WHEEL_DELTA: f32 = 100.0;

/// Which channel a press/move/release came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    Touch,
    Mouse,
}

/// Raw input consumed by a picker.
///
/// Pointer positions are page-space y coordinates in the same unit as the
/// picker's row height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Touch start or mouse button down.
    Press { pointer: Pointer, y: f32 },
    /// Touch move or mouse move with the button held.
    Move { pointer: Pointer, y: f32 },
    /// Touch end or mouse button up.
    Release { pointer: Pointer, y: f32 },
    /// Mouse left the picker. Ends a mouse drag like a release.
    Leave { y: f32 },
    /// Wheel scroll. Positive deltas scroll towards later rows.
    Wheel { delta_y: f32 },
    /// The rendering surface finished a translate transition.
    TransitionEnd,
}

impl Input {
    /// Convert a crossterm mouse event, scaling terminal rows by `cell_height`.
    /// Returns `None` for events the picker doesn't consume.
    pub fn from_mouse(event: &crossterm::event::MouseEvent, cell_height: f32) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};

        let y = event.row as f32 * cell_height;
        let pointer = Pointer::Mouse;
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Input::Press { pointer, y }),
            MouseEventKind::Drag(MouseButton::Left) => Some(Input::Move { pointer, y }),
            MouseEventKind::Up(MouseButton::Left) => Some(Input::Release { pointer, y }),
            MouseEventKind::ScrollDown => Some(Input::Wheel {
                delta_y: LINE_WHEEL_DELTA,
            }),
            MouseEventKind::ScrollUp => Some(Input::Wheel {
                delta_y: -LINE_WHEEL_DELTA,
            }),
            _ => None,
        }
    }
}

/// Notifications produced by a picker.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// The row under the selection slot changed during a drag, or at settle.
    Scroll { index: usize, item: Item },
    /// The committed selection changed.
    Change { index: usize, item: Item },
}

impl PickerEvent {
    pub fn index(&self) -> usize {
        match self {
            PickerEvent::Scroll { index, .. } | PickerEvent::Change { index, .. } => *index,
        }
    }

    pub fn item(&self) -> &Item {
        match self {
            PickerEvent::Scroll { item, .. } | PickerEvent::Change { item, .. } => item,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, PickerEvent::Change { .. })
    }
}
