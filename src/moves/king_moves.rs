use crate::game_state::chess_types::Square;
use crate::moves::offsets::offset_targets;

pub const KING_OFFSETS: [i8; 8] = [8, -8, 1, -1, 9, 7, -7, -9];
pub const KING_MAX_FILE_DELTA: u8 = 1;

/// King destinations from `square` in offset-table order (no castling).
#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    offset_targets(square, &KING_OFFSETS, KING_MAX_FILE_DELTA)
}

#[inline]
pub fn king_attacks(square: Square) -> u64 {
    king_targets(square).fold(0u64, |acc, sq| acc | (1u64 << sq))
}
