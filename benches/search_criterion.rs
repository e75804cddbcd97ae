use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bitboard_minimax::game_state::chess_types::Color;
use bitboard_minimax::game_state::game_state::GameState;
use bitboard_minimax::search::board_scoring::PieceSquareScorer;
use bitboard_minimax::search::minimax::{search_root, SearchConfig};

const POSITIONS: &[(&str, &str)] = &[
    (
        "after_e4",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
    ),
    (
        "open_center",
        "r3k2r/ppp2ppp/2n5/3q4/3P4/2N5/PPP2PPP/R3K2R b KQkq - 0 1",
    ),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_black");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");

        for depth in [2u8, 3] {
            for alpha_beta in [true, false] {
                let config = SearchConfig { depth, alpha_beta };

                // Correctness guard before benchmarking.
                let pruned = search_root(&game, Color::Dark, &PieceSquareScorer, SearchConfig::with_depth(depth));
                let probe = search_root(&game, Color::Dark, &PieceSquareScorer, config);
                assert_eq!(probe.best_move, pruned.best_move, "{name} depth {depth}");

                let label = if alpha_beta { "ab" } else { "full" };
                group.bench_with_input(
                    BenchmarkId::from_parameter(format!("{name}_d{depth}_{label}")),
                    &config,
                    |b, config| {
                        b.iter(|| {
                            let result =
                                search_root(black_box(&game), Color::Dark, &PieceSquareScorer, *config);
                            black_box(result.best_score)
                        });
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
