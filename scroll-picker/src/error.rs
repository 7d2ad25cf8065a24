//! Picker error types

/// Errors that can occur while attaching or driving a picker.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PickerError {
    /// Every row is disabled, or there are no rows at all.
    #[error("No selectable item")]
    NoSelectableItem,

    /// Row and viewport heights must be finite, positive numbers of pixels.
    #[error("Invalid {field}: {value}")]
    InvalidGeometry {
        /// Which dimension was rejected.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A programmatic selection pointed past the end of the item list.
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of items in the picker.
        len: usize,
    },
}
