//! Perft: leaf counts of the legal move tree.
//!
//! Used to check move generation against known node counts. Published
//! tables only match up to the depth where en-passant or promotion first
//! becomes possible, since neither is generated.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
    }
}

/// Counts leaves `depth` plies below `game_state`, `color` moving first.
pub fn perft(game_state: &GameState, color: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_all_legal_moves(game_state, color) {
        let Ok(next) = game_state.after_move(mv) else {
            continue;
        };
        if depth == 1 {
            total.nodes += 1;
            match mv.kind {
                MoveKind::Capture => total.captures += 1,
                MoveKind::CastleKingside | MoveKind::CastleQueenside => total.castles += 1,
                MoveKind::Quiet => {}
            }
        } else {
            total.merge(perft(&next, color.opposite(), depth - 1));
        }
    }
    total
}

/// Node count per root move, in generation order.
pub fn perft_divide(game_state: &GameState, color: Color, depth: u8) -> Vec<(Move, u64)> {
    generate_all_legal_moves(game_state, color)
        .into_iter()
        .filter_map(|mv| {
            let next = game_state.after_move(mv).ok()?;
            let nodes = perft(&next, color.opposite(), depth.saturating_sub(1)).nodes;
            Some((mv, nodes))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_perft_matches_reference_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, Color::Light, 1).nodes, 20);
        assert_eq!(perft(&game, Color::Light, 2).nodes, 400);
        let depth_three = perft(&game, Color::Light, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
    }

    #[test]
    fn kiwipete_shallow_counts_match_reference() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let depth_one = perft(&game, Color::Light, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);
    }

    #[test]
    fn divide_sums_to_total() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, Color::Light, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
