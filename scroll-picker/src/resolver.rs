//! Position resolution.
//!
//! Pure functions that turn a raw pixel translate into a valid resting position:
//! snap to the nearest row, clamp to the scroll range, map to an index and walk
//! past disabled rows. Nothing here mutates picker state; callers apply the
//! steps in that order and recompute the translate from the final index.

use std::collections::VecDeque;
use std::time::Duration;

use crate::drag::DragSample;
use crate::error::PickerError;
use crate::geometry::Geometry;
use crate::item::Item;

/// Samples older than this (relative to the newest one) don't count towards
/// release velocity.
pub const FLING_WINDOW: Duration = Duration::from_millis(100);

/// How long a fling keeps travelling at release velocity, in milliseconds.
pub const FLING_PROJECTION_MS: f32 = 150.0;

/// Direction of travel through the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
}

impl Direction {
    /// Direction implied by a settle diff. Zero walks backward.
    pub fn of(diff: f32) -> Self {
        if diff > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// A resolved resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub index: usize,
    pub translate: f32,
}

/// Round half up, matching how browsers round pixel positions.
fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Snap a translate to the nearest whole row.
pub fn snap_to_row(translate: f32, row_height: f32) -> f32 {
    round_half_up(translate / row_height) * row_height
}

/// Clamp a translate to the scrollable range of `item_count` rows.
pub fn clamp(geometry: &Geometry, item_count: usize, translate: f32) -> f32 {
    translate
        .min(geometry.max_translate())
        .max(geometry.min_translate(item_count))
}

/// Row index under the selection slot for a snapped translate.
/// May be out of range when `translate` is not clamped.
pub fn index_from_translate(geometry: &Geometry, translate: f32) -> i64 {
    round_half_up(geometry.offset as f32 - translate / geometry.row_height) as i64
}

/// Walk from `index` in `direction` until a selectable row is found.
///
/// The walk never wraps and takes at most `items.len()` steps; `None` means
/// every remaining row in that direction is disabled.
pub fn skip_disabled(items: &[Item], index: i64, direction: Direction) -> Option<usize> {
    let mut current = index;
    for _ in 0..=items.len() {
        let slot = usize::try_from(current).ok()?;
        let item = items.get(slot)?;
        if item.is_selectable() {
            return Some(slot);
        }
        current += direction.step();
    }
    None
}

/// Resolve a raw translate to a resting position.
///
/// Returns `None` when the disabled-row walk runs off the end of the list.
pub fn resolve(
    geometry: &Geometry,
    items: &[Item],
    translate: f32,
    direction: Direction,
) -> Option<Target> {
    let snapped = snap_to_row(translate, geometry.row_height);
    let clamped = clamp(geometry, items.len(), snapped);
    let index = skip_disabled(items, index_from_translate(geometry, clamped), direction)?;
    Some(Target {
        index,
        translate: geometry.translate_for_index(index),
    })
}

/// Starting row when no usable initial index was given: the middle row, or
/// the next selectable one after it (wrapping around once).
pub fn default_index(items: &[Item]) -> Result<usize, PickerError> {
    let len = items.len();
    let mut current = len / 2;
    for _ in 0..len {
        if items[current].is_selectable() {
            return Ok(current);
        }
        current = (current + 1) % len;
    }
    Err(PickerError::NoSelectableItem)
}

/// Extra travel implied by the pointer's velocity at release.
///
/// Velocity is measured between the oldest sample within [`FLING_WINDOW`] of
/// the newest one and the newest one itself. `None` when no such earlier
/// sample exists.
pub fn fling_distance(samples: &VecDeque<DragSample>) -> Option<f32> {
    let newest = samples.back()?;
    let oldest = samples
        .iter()
        .find(|sample| newest.at.saturating_duration_since(sample.at) < FLING_WINDOW)?;

    let elapsed_ms = newest.at.saturating_duration_since(oldest.at).as_secs_f32() * 1000.0;
    if elapsed_ms <= 0.0 {
        return None;
    }

    let velocity = (newest.y - oldest.y) / elapsed_ms;
    Some(velocity * FLING_PROJECTION_MS)
}

/// Find the row whose resting translate equals `translate` by stepping down
/// from the first row's position one row at a time.
pub fn index_by_walk(geometry: &Geometry, items: &[Item], translate: f32) -> Option<usize> {
    let tolerance = geometry.row_height * 1e-3;
    let mut position = geometry.max_translate();
    for index in 0..items.len() {
        if (position - translate).abs() <= tolerance {
            return Some(index);
        }
        position -= geometry.row_height;
    }
    None
}
