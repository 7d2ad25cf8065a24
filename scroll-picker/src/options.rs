//! Picker configuration.

use std::fmt;

use crate::error::PickerError;
use crate::geometry::{Geometry, DEFAULT_OFFSET, DEFAULT_VISIBLE_ROWS};
use crate::item::Item;
use crate::transitions::Transition;

/// Callback invoked with the row and its index.
pub type Listener = Box<dyn FnMut(&Item, usize)>;

/// Options for building a [`Picker`](crate::Picker).
///
/// Anything left unset falls back to a default derived from the row height the
/// host measured for its rendered rows.
pub struct PickerOptions {
    pub(crate) items: Vec<Item>,
    pub(crate) offset: usize,
    pub(crate) row_height: Option<f32>,
    pub(crate) body_height: Option<f32>,
    pub(crate) viewport_top: f32,
    pub(crate) initial_index: Option<usize>,
    pub(crate) transition: Transition,
    pub(crate) on_change: Option<Listener>,
    pub(crate) on_scroll: Option<Listener>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            offset: DEFAULT_OFFSET,
            row_height: None,
            body_height: None,
            viewport_top: 0.0,
            initial_index: None,
            transition: Transition::settle(),
            on_change: None,
            on_scroll: None,
        }
    }
}

impl PickerOptions {
    /// Create options for the given rows.
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the row index of the selection slot.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Override the measured row height.
    pub fn row_height(mut self, row_height: f32) -> Self {
        self.row_height = Some(row_height);
        self
    }

    /// Override the viewport height (five rows by default).
    pub fn body_height(mut self, body_height: f32) -> Self {
        self.body_height = Some(body_height);
        self
    }

    /// Page-space y of the viewport's top edge.
    pub fn viewport_top(mut self, viewport_top: f32) -> Self {
        self.viewport_top = viewport_top;
        self
    }

    /// Preselect a row. Ignored if out of range or disabled.
    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = Some(index);
        self
    }

    /// Transition used when the content settles on a row.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Settle instantly instead of animating (accessibility).
    pub fn reduced_motion(mut self) -> Self {
        self.transition = Transition::instant();
        self
    }

    pub fn on_change(mut self, listener: impl FnMut(&Item, usize) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn on_scroll(mut self, listener: impl FnMut(&Item, usize) + 'static) -> Self {
        self.on_scroll = Some(Box::new(listener));
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Merge the overrides over defaults derived from `measured_row_height`.
    pub fn geometry(&self, measured_row_height: f32) -> Result<Geometry, PickerError> {
        let row_height = self.row_height.unwrap_or(measured_row_height);
        let geometry = Geometry::new(self.offset, row_height)?
            .with_body_height(self.body_height.unwrap_or(DEFAULT_VISIBLE_ROWS * row_height))?;
        Ok(geometry.with_viewport_top(self.viewport_top))
    }
}

impl fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("items", &self.items)
            .field("offset", &self.offset)
            .field("row_height", &self.row_height)
            .field("body_height", &self.body_height)
            .field("viewport_top", &self.viewport_top)
            .field("initial_index", &self.initial_index)
            .field("transition", &self.transition)
            .field("on_change", &self.on_change.is_some())
            .field("on_scroll", &self.on_scroll.is_some())
            .finish()
    }
}
