use crate::game_state::chess_types::Square;
use crate::moves::offsets::offset_targets;

pub const KNIGHT_OFFSETS: [i8; 8] = [17, 15, 10, 6, -17, -15, -10, -6];
pub const KNIGHT_MAX_FILE_DELTA: u8 = 2;

/// Knight destinations from `square` in offset-table order.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    offset_targets(square, &KNIGHT_OFFSETS, KNIGHT_MAX_FILE_DELTA)
}

#[inline]
pub fn knight_attacks(square: Square) -> u64 {
    knight_targets(square).fold(0u64, |acc, sq| acc | (1u64 << sq))
}
