//! Ray walking for rooks, bishops and queens.

use crate::game_state::chess_types::Square;
use crate::moves::offsets::offset_target;

pub const ORTHOGONAL_DIRECTIONS: [i8; 4] = [8, -8, 1, -1];
pub const DIAGONAL_DIRECTIONS: [i8; 4] = [9, 7, -7, -9];
pub const QUEEN_DIRECTIONS: [i8; 8] = [8, -8, 1, -1, 9, 7, -7, -9];

/// Squares along one direction from (but excluding) the origin, up to the edge.
#[derive(Debug, Clone)]
pub struct Ray {
    current: Square,
    direction: i8,
}

impl Ray {
    #[inline]
    pub const fn new(from: Square, direction: i8) -> Self {
        Self {
            current: from,
            direction,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        // Every unit step moves at most one file.
        let next = offset_target(self.current, self.direction, 1)?;
        self.current = next;
        Some(next)
    }
}

/// Squares a slider on `square` reaches given `occupancy`, the first blocker
/// included.
pub fn ray_attacks(square: Square, directions: &[i8], occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    for &direction in directions {
        for target in Ray::new(square, direction) {
            let bit = 1u64 << target;
            attacks |= bit;
            if (occupancy & bit) != 0 {
                break;
            }
        }
    }
    attacks
}
