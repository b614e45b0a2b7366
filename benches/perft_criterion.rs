use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use minimax_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use minimax_chess::move_generation::perft::perft;
use minimax_chess::utils::fen_parser::parse_fen;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

// Depths are limited to lines without en passant or under-promotion.
const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq",
        expected_nodes: &[48],
    },
    BenchCase {
        name: "position_6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w -",
        expected_nodes: &[46, 2079],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w -",
        expected_nodes: &[46, 2079, 89_890],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("MINIMAX_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let game = parse_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
