use common::Board;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use tictactoe_player_server::move_calculator::resolve_cell;
use tictactoe_player_server::near_tie::{highest_activation_indices, output_activations};
use tictactoe_player_server::server_config::OccupiedCellPolicy;

fn sample_activations() -> Vec<f64> {
    let mut activations: Vec<f64> = (0..54).map(|i| (i % 7) as f64 / 7.0).collect();
    activations.extend_from_slice(&[0.9, 0.88, 0.5, 0.5, 0.5, 0.5, 0.1, 0.1, 0.1]);
    activations
}

fn bench_one_hot_encoding(c: &mut Criterion) {
    let board = Board::parse("XIOIXIOII").unwrap();
    c.bench_function("one_hot_string_mid_game", |b| {
        b.iter(|| black_box(&board).one_hot_string());
    });
}

fn bench_near_tie_selection(c: &mut Criterion) {
    let activations = sample_activations();
    c.bench_function("near_tie_indices", |b| {
        b.iter(|| {
            let outputs = output_activations(black_box(&activations)).unwrap();
            highest_activation_indices(outputs, 0.1)
        });
    });
}

fn bench_resolve_occupied_cell(c: &mut Criterion) {
    let board = Board::parse("XOIIIIIII").unwrap();
    let near_ties = [0, 1, 5];
    let mut rng = StdRng::seed_from_u64(11);
    c.bench_function("resolve_cell_resample", |b| {
        b.iter(|| {
            resolve_cell(
                black_box(&board),
                &near_ties,
                OccupiedCellPolicy::ResampleNearTies,
                &mut rng,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_one_hot_encoding,
    bench_near_tie_selection,
    bench_resolve_occupied_cell
);
criterion_main!(benches);
