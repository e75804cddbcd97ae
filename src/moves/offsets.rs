//! Square arithmetic on the flat `0..=63` index.
//!
//! Board-edge wraparound is detected from the file distance between source
//! and destination instead of a grid structure: a legal step never changes
//! the file by more than the piece's reach.

use crate::game_state::chess_types::{file_of, Square};

/// Destination of `from + offset`, or `None` if it leaves the board or wraps
/// across an edge (file delta larger than `max_file_delta`).
#[inline]
pub const fn offset_target(from: Square, offset: i8, max_file_delta: u8) -> Option<Square> {
    let target = from as i16 + offset as i16;
    if target < 0 || target > 63 {
        return None;
    }
    let target = target as Square;
    if file_of(from).abs_diff(file_of(target)) > max_file_delta {
        return None;
    }
    Some(target)
}

/// Destinations of a fixed offset set, in table order.
#[inline]
pub fn offset_targets(
    from: Square,
    offsets: &'static [i8],
    max_file_delta: u8,
) -> impl Iterator<Item = Square> {
    offsets
        .iter()
        .filter_map(move |&offset| offset_target(from, offset, max_file_delta))
}
