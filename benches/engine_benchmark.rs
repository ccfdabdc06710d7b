#[macro_use]
extern crate criterion;

use std::sync::Arc;

use criterion::{black_box, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tictactoe_rl::{EpsilonGreedyPolicy, GreedyPolicy, Policy, TicTacToe, ValueTable};

// Plays the lowest free cell until the game ends
fn play_out(n: usize) -> usize {
    let mut game = TicTacToe::new(n, 'X', 'O', 'X').unwrap();
    let mut moves = 0;
    while let Some(&index) = game.available_moves().first() {
        game.play(index).unwrap();
        moves += 1;
    }
    moves
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");

    // Test different board sizes
    for n in [3, 5, 8].iter() {
        group.bench_with_input(BenchmarkId::new("board_size", n), n, |b, &n| {
            b.iter(|| black_box(play_out(n)))
        });
    }

    group.finish();
}

fn random_table(num_states: usize, num_actions: usize) -> Arc<ValueTable> {
    let mut rng = StdRng::seed_from_u64(0);
    let values = (0..num_states * num_actions).map(|_| rng.gen()).collect();
    Arc::new(ValueTable::from_shape(num_states, num_actions, values).unwrap())
}

fn bench_policy_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_select");

    for num_actions in [9, 25, 64].iter() {
        let table = random_table(1000, *num_actions);
        let feasible: Vec<usize> = (0..*num_actions).step_by(2).collect();

        let greedy = GreedyPolicy::new(Arc::clone(&table));
        group.bench_with_input(
            BenchmarkId::new("greedy", num_actions),
            num_actions,
            |b, &_| b.iter(|| black_box(greedy.select(black_box(500), Some(feasible.as_slice())))),
        );

        let epsilon_greedy = EpsilonGreedyPolicy::new(Arc::clone(&table), 0.1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        group.bench_with_input(
            BenchmarkId::new("epsilon_greedy", num_actions),
            num_actions,
            |b, &_| {
                b.iter(|| {
                    black_box(epsilon_greedy.select_with_rng(
                        black_box(500),
                        Some(feasible.as_slice()),
                        &mut rng,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_game, bench_policy_select);
criterion_main!(benches);
