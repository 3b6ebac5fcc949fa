use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sapling_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use sapling_chess::game_state::game_state::GameState;
use sapling_chess::move_generation::perft::perft;

/// Reference position with known node counts for depths `1..`.
struct PerftReference {
    name: &'static str,
    fen: &'static str,
    nodes_by_depth: &'static [u64],
    /// Deepest depth timed in the quick suite.
    quick_depth: usize,
}

const REFERENCES: &[PerftReference] = &[
    PerftReference {
        name: "start",
        fen: STARTING_POSITION_FEN,
        nodes_by_depth: &[20, 400, 8902, 197_281],
        quick_depth: 3,
    },
    PerftReference {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        nodes_by_depth: &[48, 2039, 97_862],
        quick_depth: 2,
    },
    PerftReference {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        nodes_by_depth: &[14, 191, 2812, 43_238],
        quick_depth: 3,
    },
    PerftReference {
        name: "promotions",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        nodes_by_depth: &[6, 264, 9467],
        quick_depth: 2,
    },
];

/// `SAPLING_BENCH_SUITE=standard` times every listed depth; otherwise only
/// the cheap ones.
fn standard_suite() -> bool {
    std::env::var("SAPLING_BENCH_SUITE").is_ok_and(|value| value.eq_ignore_ascii_case("standard"))
}

fn bench_perft(c: &mut Criterion) {
    let standard = standard_suite();
    let mut group = c.benchmark_group(if standard { "perft_standard" } else { "perft_quick" });
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for reference in REFERENCES {
        let mut game = GameState::from_fen(reference.fen).expect("benchmark FEN should parse");
        let max_depth = if standard {
            reference.nodes_by_depth.len()
        } else {
            reference.quick_depth
        };

        for (depth, &expected) in (1u8..).zip(&reference.nodes_by_depth[..max_depth]) {
            // Wrong counts make timings meaningless; check before measuring.
            let counts = perft(&mut game, depth).expect("perft should run");
            assert_eq!(
                counts.nodes as u64, expected,
                "{} depth {depth}: expected {expected} nodes",
                reference.name
            );

            group.throughput(Throughput::Elements(expected));
            group.bench_function(BenchmarkId::new(reference.name, depth), |b| {
                b.iter(|| {
                    let counts = perft(black_box(&mut game), black_box(depth))
                        .expect("perft should run");
                    black_box(counts.nodes)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
