use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_draughts::game_state::draughts_rules::STARTING_POSITION_LAYOUT;
use plum_draughts::game_state::game_state::GameState;
use plum_draughts::move_generation::perft::perft_legal;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    max_depth: u8,
    /// Known node counts for the first depths; deeper ones are only checked
    /// for stability between runs.
    expected_nodes: &'static [usize],
}

const QUEENS_MIDGAME: &str = "\
.d.d....
..d...d.
.D.d....
........
...l.L..
l...l...
.l...l..
l.......
light";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: STARTING_POSITION_LAYOUT,
        max_depth: 5,
        expected_nodes: &[7, 49],
    },
    BenchCase {
        name: "queens_midgame",
        layout: QUEENS_MIDGAME,
        max_depth: 4,
        expected_nodes: &[],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: STARTING_POSITION_LAYOUT,
        max_depth: 8,
        expected_nodes: &[7, 49],
    },
    BenchCase {
        name: "queens_midgame",
        layout: QUEENS_MIDGAME,
        max_depth: 6,
        expected_nodes: &[],
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_layout(case.layout).expect("benchmark layout should parse");

        for depth in 1..=case.max_depth {
            // Correctness guard before benchmarking.
            let warmup = perft_legal(&game, depth);
            if let Some(expected) = case.expected_nodes.get(usize::from(depth) - 1) {
                assert_eq!(
                    warmup.nodes, *expected,
                    "node mismatch in warmup for {} depth {}",
                    case.name, depth
                );
            }
            let expected_nodes = warmup.nodes;

            group.throughput(Throughput::Elements(expected_nodes as u64));
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft_legal(black_box(&bench_game), black_box(depth));
                        assert_eq!(count.nodes, *expected);
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
