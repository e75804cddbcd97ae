//! Canonical chess-rule constants.
//!
//! Home squares and the standard starting layout used to initialize and
//! validate game state setup.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Starting bitboards indexed `[color][piece_kind]`.
pub const STARTING_PIECES: [[u64; 6]; 2] = [
    [
        0x0000_0000_0000_FF00,
        0x0000_0000_0000_0042,
        0x0000_0000_0000_0024,
        0x0000_0000_0000_0081,
        0x0000_0000_0000_0008,
        0x0000_0000_0000_0010,
    ],
    [
        0x00FF_0000_0000_0000,
        0x4200_0000_0000_0000,
        0x2400_0000_0000_0000,
        0x8100_0000_0000_0000,
        0x0800_0000_0000_0000,
        0x1000_0000_0000_0000,
    ],
];

pub const A1: Square = 0;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::Light => E1,
        Color::Dark => E8,
    }
}

/// Rank index a pawn of `color` starts on.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Square-level geometry of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub must_be_empty: u64,
    /// Squares the king passes through or lands on; none may be attacked.
    pub king_transit: [Square; 2],
}

pub const fn castle_path(color: Color, side: CastleSide) -> CastlePath {
    match (color, side) {
        (Color::Light, CastleSide::Kingside) => CastlePath {
            king_from: E1,
            king_to: G1,
            rook_from: H1,
            rook_to: F1,
            must_be_empty: (1 << F1) | (1 << G1),
            king_transit: [F1, G1],
        },
        (Color::Light, CastleSide::Queenside) => CastlePath {
            king_from: E1,
            king_to: C1,
            rook_from: A1,
            rook_to: D1,
            must_be_empty: (1 << 1) | (1 << C1) | (1 << D1),
            king_transit: [D1, C1],
        },
        (Color::Dark, CastleSide::Kingside) => CastlePath {
            king_from: E8,
            king_to: G8,
            rook_from: H8,
            rook_to: F8,
            must_be_empty: (1 << F8) | (1 << G8),
            king_transit: [F8, G8],
        },
        (Color::Dark, CastleSide::Queenside) => CastlePath {
            king_from: E8,
            king_to: C8,
            rook_from: A8,
            rook_to: D8,
            must_be_empty: (1 << 57) | (1 << C8) | (1 << D8),
            king_transit: [D8, C8],
        },
    }
}

/// Castling right lost when a rook leaves or is captured on `square`.
#[inline]
pub const fn rook_home_right(square: Square) -> CastlingRights {
    match square {
        A1 => CASTLE_LIGHT_QUEENSIDE,
        H1 => CASTLE_LIGHT_KINGSIDE,
        A8 => CASTLE_DARK_QUEENSIDE,
        H8 => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}
