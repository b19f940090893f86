//! Benchmarks for the coalition solver.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use symmetric_coalitions::coalition::IntegerPartitions;
use symmetric_coalitions::games::random::random_worth_table;
use symmetric_coalitions::SymmetricGame;

fn partition_benchmark(c: &mut Criterion) {
    c.bench_function("partitions_of_40", |b| {
        b.iter(|| IntegerPartitions::new(black_box(40)).count())
    });
}

fn solve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_random_game");
    for n in [8usize, 12, 16, 20] {
        let game = SymmetricGame::new(n, random_worth_table(n, 42)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &game, |b, game| {
            b.iter(|| game.solve().unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, partition_benchmark, solve_benchmark);
criterion_main!(benches);
