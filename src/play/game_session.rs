//! A live game between a human and an engine.
//!
//! The session owns the board. Each human move is checked against the legal
//! moves of the selected piece before it is applied; the engine then answers
//! on the same board. The session reports when the game has ended.

use log::{info, warn};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::castle_target_for_rook_click;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves_from_square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    WhiteWins,
    BlackWins,
    Stalemate,
}

/// What one call to `submit_player_move` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player_move: Move,
    pub engine_move: Option<Move>,
    pub status: SessionStatus,
}

pub struct GameSession {
    game_state: GameState,
    player_color: Color,
    engine: Box<dyn Engine>,
    history: Vec<Move>,
}

impl GameSession {
    /// Human plays white from the initial position.
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self::from_position(GameState::new_game(), Color::Light, engine)
    }

    pub fn from_position(game_state: GameState, player_color: Color, engine: Box<dyn Engine>) -> Self {
        Self {
            game_state,
            player_color,
            engine,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn player_color(&self) -> Color {
        self.player_color
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Outcome from the point of view of the side to move.
    pub fn status(&self) -> SessionStatus {
        let side = self.game_state.side_to_move;
        if has_legal_move(&self.game_state, side) {
            return SessionStatus::InProgress;
        }
        if !is_king_in_check(&self.game_state, side) {
            return SessionStatus::Stalemate;
        }
        match side {
            Color::Light => SessionStatus::BlackWins,
            Color::Dark => SessionStatus::WhiteWins,
        }
    }

    /// Legal moves of the player's piece on `square`; empty for anything else.
    pub fn legal_moves_for(&self, square: Square) -> Vec<Move> {
        if self.game_state.color_at(square) != Some(self.player_color) {
            return Vec::new();
        }
        legal_moves_from_square(&self.game_state, square)
    }

    /// Validates and plays the player's move, then lets the engine reply if
    /// the game is still going. Rejected moves leave the board untouched.
    ///
    /// Moving the king onto one of its own home-corner rooks requests
    /// castling on that side.
    pub fn submit_player_move(&mut self, from: Square, to: Square) -> ChessResult<TurnReport> {
        if self.status() != SessionStatus::InProgress {
            return Err(ChessError::GameOver);
        }
        if from > 63 || to > 63 {
            return Err(ChessError::InvalidSquare(format!("{from}->{to}")));
        }

        let (color, piece) = self
            .game_state
            .piece_at(from)
            .ok_or(ChessError::NoPieceOnSquare(from))?;
        if color != self.player_color || color != self.game_state.side_to_move {
            return Err(ChessError::NotPlayersTurn(from));
        }

        let target = if piece == PieceKind::King {
            castle_target_for_rook_click(&self.game_state, color, to).unwrap_or(to)
        } else {
            to
        };

        let Some(player_move) = legal_moves_from_square(&self.game_state, from)
            .into_iter()
            .find(|mv| mv.to == target)
        else {
            warn!("rejected illegal move {from} -> {to}");
            return Err(ChessError::IllegalMove { from, to });
        };

        self.game_state.make_move(player_move)?;
        self.history.push(player_move);
        info!("player {} plays {player_move}", color.name());

        let mut status = self.status();
        let engine_move = if status == SessionStatus::InProgress {
            let reply = self.play_engine_move()?;
            status = self.status();
            reply
        } else {
            None
        };

        Ok(TurnReport {
            player_move,
            engine_move,
            status,
        })
    }

    /// Asks the engine for a move for the side to move and applies it.
    /// Returns `None` when the side to move has no legal move.
    pub fn play_engine_move(&mut self) -> ChessResult<Option<Move>> {
        if !has_legal_move(&self.game_state, self.game_state.side_to_move) {
            return Ok(None);
        }
        let out = self.engine.choose_move(&self.game_state)?;
        let Some(mv) = out.best_move else {
            return Err(ChessError::EngineReturnedNoMove(self.engine.name().to_owned()));
        };
        let legal = legal_moves_from_square(&self.game_state, mv.from);
        if self.game_state.color_at(mv.from) != Some(self.game_state.side_to_move)
            || !legal.contains(&mv)
        {
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        self.game_state.make_move(mv)?;
        self.history.push(mv);
        info!(
            "{} ({}) plays {mv}",
            self.engine.name(),
            self.game_state.side_to_move.opposite().name()
        );
        Ok(Some(mv))
    }
}
