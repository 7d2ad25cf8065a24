use crate::error::PickerError;

/// Default number of rows between the logical top and the selection slot.
pub const DEFAULT_OFFSET: usize = 2;

/// Default viewport height, in rows.
pub const DEFAULT_VISIBLE_ROWS: f32 = 5.0;

/// Row geometry of one picker column, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Rows between the logical top of the list and the selection slot.
    pub offset: usize,
    pub row_height: f32,
    /// Visible viewport height.
    pub body_height: f32,
    /// Page-space y of the viewport's top edge.
    pub viewport_top: f32,
}

impl Geometry {
    /// Geometry with the default viewport of five rows.
    pub fn new(offset: usize, row_height: f32) -> Result<Self, PickerError> {
        let row_height = positive("row height", row_height)?;
        Ok(Self {
            offset,
            row_height,
            body_height: DEFAULT_VISIBLE_ROWS * row_height,
            viewport_top: 0.0,
        })
    }

    pub fn with_body_height(mut self, body_height: f32) -> Result<Self, PickerError> {
        self.body_height = positive("body height", body_height)?;
        Ok(self)
    }

    pub fn with_viewport_top(mut self, viewport_top: f32) -> Self {
        self.viewport_top = viewport_top;
        self
    }

    /// Page-space y of the viewport's vertical centre.
    pub fn center_y(&self) -> f32 {
        self.viewport_top + self.body_height / 2.0
    }

    /// Largest translate: the first row sits in the selection slot.
    pub fn max_translate(&self) -> f32 {
        self.offset as f32 * self.row_height
    }

    /// Smallest translate: the last row sits in the selection slot.
    pub fn min_translate(&self, item_count: usize) -> f32 {
        -(self.row_height * (item_count as f32 - self.offset as f32 - 1.0))
    }

    /// Resting translate that puts `index` in the selection slot.
    pub fn translate_for_index(&self, index: usize) -> f32 {
        (self.offset as f32 - index as f32) * self.row_height
    }
}

fn positive(field: &'static str, value: f32) -> Result<f32, PickerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PickerError::InvalidGeometry { field, value })
    }
}
