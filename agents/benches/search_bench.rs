use checkers_agents::{best_move, negamax, SearchConfig, SearchStats};
use checkers_core::{layouts, perft, Board, GameState, Side};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_search(c: &mut Criterion) {
    let state = GameState::new();

    let mut group = c.benchmark_group("best_move_startpos");
    for depth in 3..=5 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let config = SearchConfig::depth(depth).with_seed(0);
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(0);
                best_move(&state, &config, &mut rng)
            })
        });
    }
    group.finish();

    c.bench_function("negamax_depth_5_startpos", |b| {
        b.iter(|| {
            let mut stats = SearchStats::default();
            negamax(&state, 5, f64::MIN, f64::MAX, &mut stats)
        })
    });

    let board = Board::from_diagram(layouts::SINGLE_JUMP).unwrap();
    let jump = GameState::from_board(board, Side::Red);
    c.bench_function("best_move_depth_6_single_jump", |b| {
        let config = SearchConfig::depth(6);
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            best_move(&jump, &config, &mut rng)
        })
    });
}

fn bench_perft(c: &mut Criterion) {
    let state = GameState::new();
    c.bench_function("perft_5_startpos", |b| b.iter(|| perft(&state, 5)));
}

criterion_group!(benches, bench_search, bench_perft);
criterion_main!(benches);
