//! Canonical board state representation.
//!
//! `GameState` stores twelve piece bitboards indexed by `[color][piece_kind]`,
//! the castling-rights mask and the side to move. It is `Copy`, so search
//! branches work on independent clones and never touch the live board.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_PIECES;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    // [color][piece_kind]; pairwise disjoint.
    pub pieces: [[u64; 6]; 2],
    pub castling_rights: CastlingRights,
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            castling_rights: 0,
            side_to_move: Color::Light,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position, white to move, all castling rights set.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            pieces: STARTING_PIECES,
            castling_rights: CASTLE_ALL,
            side_to_move: Color::Light,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn bitboard(&self, color: Color, piece: PieceKind) -> u64 {
        self.pieces[color.index()][piece.index()]
    }

    /// Union of the six bitboards of `color`.
    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.pieces[color.index()]
            .iter()
            .copied()
            .fold(0u64, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy(Color::Light) | self.occupancy(Color::Dark)
    }

    #[inline]
    pub fn empty_squares(&self) -> u64 {
        !self.occupancy_all()
    }

    /// Unique (color, kind) occupying `square`, if any. Off-board squares
    /// are empty.
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        if square > 63 {
            return None;
        }
        let mask = 1u64 << square;
        for color in ALL_COLORS {
            for piece in ALL_PIECE_KINDS {
                if (self.pieces[color.index()][piece.index()] & mask) != 0 {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|(color, _)| color)
    }

    /// Puts a piece on `square`, replacing whatever stood there.
    pub fn place_piece(&mut self, color: Color, piece: PieceKind, square: Square) {
        self.remove_piece(square);
        self.pieces[color.index()][piece.index()] |= 1u64 << square;
    }

    /// Clears `square` in every bitboard and returns what stood there.
    pub fn remove_piece(&mut self, square: Square) -> Option<(Color, PieceKind)> {
        let found = self.piece_at(square);
        if let Some((color, piece)) = found {
            self.pieces[color.index()][piece.index()] &= !(1u64 << square);
        }
        found
    }

    /// True if no square is set in more than one bitboard.
    pub fn bitboards_disjoint(&self) -> bool {
        let mut seen = 0u64;
        for bb in self.pieces.iter().flatten() {
            if seen & bb != 0 {
                return false;
            }
            seen |= bb;
        }
        true
    }
}
