//! Full legal move generation pipeline.
//!
//! Walks the board square by square, collects pseudo-legal candidates from
//! the matching per-piece generator, then plays each candidate on a copy of
//! the board and drops those that leave the mover's own king in check. That
//! simulate-then-verify step is the only legality mechanism; pins are never
//! precomputed.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Pseudo-legal moves of whatever piece stands on `square`.
pub fn generate_pseudo_legal_moves_from(game_state: &GameState, square: Square, out: &mut Vec<Move>) {
    let Some((color, piece)) = game_state.piece_at(square) else {
        return;
    };
    match piece {
        PieceKind::Pawn => generate_pawn_moves(game_state, square, color, out),
        PieceKind::Knight => generate_knight_moves(game_state, square, color, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, square, color, out),
        PieceKind::Rook => generate_rook_moves(game_state, square, color, out),
        PieceKind::Queen => generate_queen_moves(game_state, square, color, out),
        PieceKind::King => generate_king_moves(game_state, square, color, out),
    }
}

/// Legal moves of the piece on `square`, in generation order.
pub fn legal_moves_from_square(game_state: &GameState, square: Square) -> Vec<Move> {
    let Some(color) = game_state.color_at(square) else {
        return Vec::new();
    };
    let mut pseudo = Vec::with_capacity(28);
    generate_pseudo_legal_moves_from(game_state, square, &mut pseudo);

    let mut legal = Vec::with_capacity(pseudo.len());
    retain_legal(game_state, color, &pseudo, &mut legal);
    legal
}

/// Every legal move of `color`, ordered by source square (0..63) and then by
/// each piece generator's internal order. Search relies on this order.
pub fn generate_all_legal_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    let own = game_state.occupancy(color);
    let mut pseudo = Vec::with_capacity(64);
    let mut legal = Vec::with_capacity(64);

    for square in 0..64u8 {
        if own & (1u64 << square) == 0 {
            continue;
        }
        pseudo.clear();
        generate_pseudo_legal_moves_from(game_state, square, &mut pseudo);
        retain_legal(game_state, color, &pseudo, &mut legal);
    }

    legal
}

#[inline]
pub fn has_legal_move(game_state: &GameState, color: Color) -> bool {
    !generate_all_legal_moves(game_state, color).is_empty()
}

fn retain_legal(game_state: &GameState, color: Color, candidates: &[Move], out: &mut Vec<Move>) {
    for &mv in candidates {
        let mut next = *game_state;
        if next.make_move(mv).is_ok() && !is_king_in_check(&next, color) {
            out.push(mv);
        }
    }
}

#[inline]
pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(game_state, color) && !has_legal_move(game_state, color)
}

/// No legal move while not in check. Not treated as game-ending by search.
#[inline]
pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !is_king_in_check(game_state, color) && !has_legal_move(game_state, color)
}

/// True if either color is checkmated, regardless of the side to move.
pub fn is_game_over(game_state: &GameState) -> bool {
    ALL_COLORS
        .into_iter()
        .any(|color| is_checkmate(game_state, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    fn play(game: &mut GameState, moves: &[(Square, Square)]) {
        for &(from, to) in moves {
            game.apply_move(from, to).expect("scripted move should apply");
        }
    }

    #[test]
    fn startpos_has_twenty_moves_for_either_side() {
        let game = GameState::new_game();
        assert_eq!(generate_all_legal_moves(&game, Color::Light).len(), 20);
        assert_eq!(generate_all_legal_moves(&game, Color::Dark).len(), 20);
    }

    #[test]
    fn black_has_twenty_replies_to_e4() {
        let mut game = GameState::new_game();
        game.apply_move(12, 28).expect("e2e4 should apply");
        assert_eq!(generate_all_legal_moves(&game, Color::Dark).len(), 20);
    }

    #[test]
    fn generation_order_follows_square_then_piece_order() {
        let game = GameState::new_game();
        let moves = generate_all_legal_moves(&game, Color::Light);
        let first: Vec<_> = moves.iter().take(4).map(|mv| mv.squares()).collect();
        assert_eq!(first, vec![(1, 18), (1, 16), (6, 23), (6, 21)]);
        assert_eq!(moves[4].squares(), (8, 16));
        assert_eq!(moves[5].squares(), (8, 24));
        assert!(moves.windows(2).all(|pair| pair[0].from <= pair[1].from));
    }

    #[test]
    fn every_legal_move_keeps_own_king_safe() {
        let positions = [
            STARTING_POSITION_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/8/8/8/3q4/4K3 w - - 0 1",
        ];
        for fen in positions {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            for color in ALL_COLORS {
                for mv in generate_all_legal_moves(&game, color) {
                    let next = game.after_move(mv).expect("legal move should apply");
                    assert!(!is_king_in_check(&next, color), "{fen}: {mv} leaves king in check");
                    assert!(next.bitboards_disjoint());
                }
            }
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // White knight on e2 is pinned by the rook on e8.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(legal_moves_from_square(&game, 12).is_empty());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = GameState::new_game();
        play(&mut game, &[(13, 21), (52, 36), (14, 30), (59, 31)]);
        assert!(is_king_in_check(&game, Color::Light));
        assert!(generate_all_legal_moves(&game, Color::Light).is_empty());
        assert!(is_checkmate(&game, Color::Light));
        assert!(is_game_over(&game));
    }

    #[test]
    fn scholars_mate_ends_the_game() {
        let mut game = GameState::new_game();
        play(
            &mut game,
            &[(12, 28), (52, 36), (5, 26), (57, 42), (3, 39), (62, 45), (39, 53)],
        );
        assert!(generate_all_legal_moves(&game, Color::Dark).is_empty());
        assert!(is_game_over(&game));
    }

    #[test]
    fn stalemate_is_not_game_over() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(is_stalemate(&game, Color::Dark));
        assert!(!is_checkmate(&game, Color::Dark));
        assert!(!is_game_over(&game));
    }

    #[test]
    fn castling_is_dropped_when_it_would_land_in_check() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let moves = legal_moves_from_square(&game, 4);
        assert!(moves.iter().any(|mv| mv.kind == MoveKind::CastleKingside));
        assert!(moves.iter().any(|mv| mv.kind == MoveKind::CastleQueenside));

        let game = GameState::from_fen("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let moves = legal_moves_from_square(&game, 4);
        assert!(!moves.iter().any(|mv| mv.kind == MoveKind::CastleKingside));
    }
}
