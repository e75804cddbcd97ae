use crate::game_state::chess_rules::{castle_path, king_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::step_kind;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        if let Some(kind) = step_kind(game_state, color, to) {
            out.push(Move::new(from, to, kind));
        }
    }

    if from != king_home(color) {
        return;
    }
    for (side, kind) in [
        (CastleSide::Kingside, MoveKind::CastleKingside),
        (CastleSide::Queenside, MoveKind::CastleQueenside),
    ] {
        if can_castle(game_state, color, side) {
            out.push(Move::new(from, castle_path(color, side).king_to, kind));
        }
    }
}

/// Castling is available when the right is still held, every square between
/// king and rook is empty, the king is not in check, and no square the king
/// crosses or lands on is attacked.
///
/// Rook presence is not checked; the rights mask is trusted for that.
pub fn can_castle(game_state: &GameState, color: Color, side: CastleSide) -> bool {
    if game_state.castling_rights & side.rights_mask(color) == 0 {
        return false;
    }

    let path = castle_path(color, side);
    if game_state.occupancy_all() & path.must_be_empty != 0 {
        return false;
    }

    if is_king_in_check(game_state, color) {
        return false;
    }

    let enemy = color.opposite();
    !path
        .king_transit
        .iter()
        .any(|&square| is_square_attacked(game_state, square, enemy))
}
