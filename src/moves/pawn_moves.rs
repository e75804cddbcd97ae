//! Pawn geometry: push direction and the two capture diagonals.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::offsets::offset_target;

#[inline]
pub const fn pawn_push_offset(color: Color) -> i8 {
    match color {
        Color::Light => 8,
        Color::Dark => -8,
    }
}

/// Capture offsets for `color`, left diagonal first.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [i8; 2] {
    match color {
        Color::Light => [7, 9],
        Color::Dark => [-9, -7],
    }
}

/// Squares a pawn of `color` on `square` attacks, left diagonal first.
#[inline]
pub fn pawn_capture_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    pawn_capture_offsets(color)
        .into_iter()
        .filter_map(move |offset| offset_target(square, offset, 1))
}

/// Squares from which a pawn of `color` would attack `square`.
///
/// These are the capture diagonals walked backwards.
#[inline]
pub fn pawn_attacker_origins(color: Color, square: Square) -> impl Iterator<Item = Square> {
    pawn_capture_offsets(color)
        .into_iter()
        .filter_map(move |offset| offset_target(square, -offset, 1))
}
