use crate::game_state::chess_types::Square;

/// Errors surfaced by board mutation, notation parsing and game sessions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The source square of a move holds no piece; the board is left untouched.
    #[error("no piece on square {0}")]
    NoPieceOnSquare(Square),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// The move is not among the legal moves of the selected piece.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("piece on square {0} does not belong to the side to move")]
    NotPlayersTurn(Square),

    /// An engine answered without a move although legal moves exist.
    #[error("engine {0} returned no move with legal moves available")]
    EngineReturnedNoMove(String),

    #[error("the game is already over")]
    GameOver,
}

pub type ChessResult<T> = Result<T, ChessError>;
