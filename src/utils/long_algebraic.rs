use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::derive_move_kind;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Coordinate text of a move, e.g. `e2e4` or `e1g1` for white castling.
pub fn move_to_long_algebraic(mv: Move) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(mv.from)?,
        square_to_algebraic(mv.to)?
    ))
}

/// Parses coordinate text against `game_state`, tagging the move with the
/// kind the board implies. Legality is not checked here.
pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidMoveText(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let (_, piece) = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceOnSquare(from))?;

    Ok(Move::new(from, to, derive_move_kind(game_state, piece, from, to)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_push_parses_as_quiet() {
        let game = GameState::new_game();
        let mv = long_algebraic_to_move("e2e4", &game).expect("move should parse");
        assert_eq!(mv, Move::new(12, 28, MoveKind::Quiet));
        assert_eq!(move_to_long_algebraic(mv).expect("move should format"), "e2e4");
    }

    #[test]
    fn capture_and_castle_kinds_come_from_the_board() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = long_algebraic_to_move("e1g1", &game).expect("castle should parse");
        assert_eq!(castle.kind, MoveKind::CastleKingside);
        let castle = long_algebraic_to_move("e8c8", &game).expect("castle should parse");
        assert_eq!(castle.kind, MoveKind::CastleQueenside);
        let capture = long_algebraic_to_move("a1a8", &game).expect("capture should parse");
        assert_eq!(capture.kind, MoveKind::Capture);
    }

    #[test]
    fn malformed_text_is_rejected() {
        let game = GameState::new_game();
        assert!(matches!(
            long_algebraic_to_move("e2", &game),
            Err(ChessError::InvalidMoveText(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("z2e4", &game),
            Err(ChessError::InvalidSquare(_))
        ));
        assert_eq!(
            long_algebraic_to_move("e4e5", &game),
            Err(ChessError::NoPieceOnSquare(28))
        );
    }
}
