//! In-place board mutation.
//!
//! `apply_move` takes bare (from, to) squares the way a UI reports them and
//! derives what the move does from board content. `make_move` applies a move
//! already tagged by the generator. Neither checks legality.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::rook_home_right;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::offsets::offset_target;

impl GameState {
    /// Moves the piece on `from` to `to`, handling captures, castling and
    /// castling-right bookkeeping. Fails without touching the board when
    /// `from` is empty or either square is off the board.
    ///
    /// A king moved onto its own rook on a home corner is read as a castling
    /// request and rewritten to the two-square king hop.
    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessResult<MoveKind> {
        check_on_board(from, to)?;
        let (color, piece) = self.piece_at(from).ok_or(ChessError::NoPieceOnSquare(from))?;
        let to = if piece == PieceKind::King {
            castle_target_for_rook_click(self, color, to).unwrap_or(to)
        } else {
            to
        };
        let kind = derive_move_kind(self, piece, from, to);
        self.execute_move(color, piece, from, to, kind);
        Ok(kind)
    }

    /// Applies a generator-tagged move. Castling is taken from the tag.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        check_on_board(mv.from, mv.to)?;
        let (color, piece) = self
            .piece_at(mv.from)
            .ok_or(ChessError::NoPieceOnSquare(mv.from))?;
        self.execute_move(color, piece, mv.from, mv.to, mv.kind);
        Ok(())
    }

    /// Copy of the board with `mv` applied.
    #[inline]
    pub fn after_move(&self, mv: Move) -> ChessResult<GameState> {
        let mut next = *self;
        next.make_move(mv)?;
        Ok(next)
    }

    fn execute_move(
        &mut self,
        color: Color,
        piece: PieceKind,
        from: Square,
        to: Square,
        kind: MoveKind,
    ) {
        if let Some(side) = kind.castle_side() {
            let rook_squares = match side {
                CastleSide::Kingside => offset_target(from, 3, 3).zip(offset_target(from, 1, 1)),
                CastleSide::Queenside => offset_target(from, -4, 4).zip(offset_target(from, -1, 1)),
            };
            if let Some((rook_from, rook_to)) = rook_squares {
                if self.piece_at(rook_from) == Some((color, PieceKind::Rook)) {
                    self.remove_piece(rook_from);
                    self.place_piece(color, PieceKind::Rook, rook_to);
                }
            }
        }

        if let Some((_, captured)) = self.remove_piece(to) {
            if captured == PieceKind::Rook {
                self.castling_rights &= !rook_home_right(to);
            }
        }

        self.pieces[color.index()][piece.index()] &= !(1u64 << from);
        self.pieces[color.index()][piece.index()] |= 1u64 << to;

        match piece {
            PieceKind::King => {
                self.castling_rights &= !(CastleSide::Kingside.rights_mask(color)
                    | CastleSide::Queenside.rights_mask(color));
            }
            PieceKind::Rook => self.castling_rights &= !rook_home_right(from),
            _ => {}
        }

        self.side_to_move = color.opposite();
    }
}

fn check_on_board(from: Square, to: Square) -> ChessResult<()> {
    if from > 63 || to > 63 {
        return Err(ChessError::InvalidSquare(format!("{from}->{to}")));
    }
    Ok(())
}

/// Kind of the (from, to) move for `piece`, read off the current board.
pub fn derive_move_kind(game_state: &GameState, piece: PieceKind, from: Square, to: Square) -> MoveKind {
    if piece == PieceKind::King && file_of(from).abs_diff(file_of(to)) == 2 {
        if to > from {
            MoveKind::CastleKingside
        } else {
            MoveKind::CastleQueenside
        }
    } else if game_state.piece_at(to).is_some() {
        MoveKind::Capture
    } else {
        MoveKind::Quiet
    }
}

/// Canonical king destination when a king is dropped on its own corner rook.
pub fn castle_target_for_rook_click(
    game_state: &GameState,
    color: Color,
    rook_square: Square,
) -> Option<Square> {
    if game_state.piece_at(rook_square) != Some((color, PieceKind::Rook)) {
        return None;
    }
    match (color, rook_square) {
        (Color::Light, 7) => Some(6),
        (Color::Light, 0) => Some(2),
        (Color::Dark, 63) => Some(62),
        (Color::Dark, 56) => Some(58),
        _ => None,
    }
}
