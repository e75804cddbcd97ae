//! Static position evaluation.
//!
//! Scores are in tenths of a material point, so a pawn is worth 100 and a
//! half-point table entry is 5. The total is black-positive: the engine plays
//! black and maximizes it.

use crate::game_state::{chess_types::*, game_state::GameState};

pub type Score = i32;

/// Larger than any reachable evaluation.
pub const SCORE_INFINITY: Score = 1_000_000_000;

pub trait BoardScorer: Send + Sync {
    /// Black-positive score of `game_state`.
    fn score(&self, game_state: &GameState) -> Score;
}

/// Material plus piece-square table bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    #[inline]
    fn score(&self, game_state: &GameState) -> Score {
        eval_total(game_state)
    }
}

/// Material in tenths of a point (pawn 10 points = 100).
#[inline]
pub const fn piece_value(piece: PieceKind) -> Score {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 10_000,
    }
}

// Tables are indexed by square from white's side (index 0 = a1).

#[rustfmt::skip]
const PAWN_TABLE: [Score; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  60,  60,   0,   0,   0,
      5,   5,  10,  60,  60,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     20,  20,  20,  20,  20,  20,  20,  20,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [Score; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [Score; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [Score; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10,  10,  10,  10,  10,   5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [Score; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_TABLE: [Score; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

#[inline]
const fn white_table(piece: PieceKind) -> &'static [Score; 64] {
    match piece {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Positional bonus for a `color` `piece` on `square`. Black reads white's
/// table mirrored vertically.
#[inline]
pub const fn piece_square_value(color: Color, piece: PieceKind, square: Square) -> Score {
    let index = match color {
        Color::Light => square,
        Color::Dark => square ^ 56,
    };
    white_table(piece)[index as usize]
}

/// Material plus positional score of one side.
pub fn eval_side(game_state: &GameState, color: Color) -> Score {
    let mut score = 0;
    for piece in ALL_PIECE_KINDS {
        let mut bb = game_state.bitboard(color, piece);
        while bb != 0 {
            let square = bb.trailing_zeros() as Square;
            score += piece_value(piece) + piece_square_value(color, piece, square);
            bb &= bb - 1;
        }
    }
    score
}

#[inline]
pub fn eval_white(game_state: &GameState) -> Score {
    eval_side(game_state, Color::Light)
}

#[inline]
pub fn eval_black(game_state: &GameState) -> Score {
    eval_side(game_state, Color::Dark)
}

/// Black minus white, in tenths of a point: a bare pawn edge reads 100 where
/// the point scale reads 10, and a 0.5 table entry reads 5. Divide by ten for
/// the point scale. Search choices do not depend on the factor.
#[inline]
pub fn eval_total(game_state: &GameState) -> Score {
    eval_black(game_state) - eval_white(game_state)
}
