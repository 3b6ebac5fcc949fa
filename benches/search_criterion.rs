use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sapling_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use sapling_chess::game_state::game_state::GameState;
use sapling_chess::search::board_scoring::MaterialMobilityScorer;
use sapling_chess::search::negamax::{search_best_move, SearchConfig, SearchOutcome};

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "start",
        fen: STARTING_POSITION_FEN,
    },
    SearchCase {
        name: "italian",
        fen: "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
    },
    SearchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    SearchCase {
        name: "king_pawn",
        fen: "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1",
    },
];

fn bench_search(c: &mut Criterion) {
    let depth = std::env::var("SAPLING_BENCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(3)
        .max(1);
    let config = SearchConfig::new(depth).expect("depth is at least one");

    let mut group = c.benchmark_group("negamax_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in CASES {
        let mut game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard: every case has a move and search leaves the position alone.
        let before = game.clone();
        let outcome = search_best_move(&mut game, &MaterialMobilityScorer, config)
            .expect("search should run");
        assert!(matches!(outcome, SearchOutcome::BestMove(_)), "{} has no move", case.name);
        assert_eq!(game, before, "search changed the position for {}", case.name);

        group.bench_with_input(
            BenchmarkId::new(case.name, format!("d{depth}")),
            &config,
            |b, config| {
                b.iter(|| {
                    let outcome =
                        search_best_move(black_box(&mut game), &MaterialMobilityScorer, *config)
                            .expect("search should run");
                    black_box(outcome.best_move())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
