use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use agent_chess::board::apply::{apply_move, undo_move};
use agent_chess::board::placement::{load_position, starting_placement};
use agent_chess::moves::generator::generate_legal_moves;
use agent_chess::search::zobrist::ZobristTable;

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    let position = load_position(&starting_placement()).expect("benchmark position should load");

    group.bench_function("legal_moves_startpos", |b| {
        let mut position = position.clone();
        b.iter(|| {
            let moves = generate_legal_moves(black_box(&mut position))
                .expect("generation should succeed");
            assert_eq!(moves.len(), 20);
            black_box(moves.len())
        });
    });

    group.bench_function("apply_undo_round_trip", |b| {
        let mut position = position.clone();
        let moves = generate_legal_moves(&mut position).expect("generation should succeed");
        b.iter(|| {
            for mv in &moves {
                apply_move(black_box(&mut position), *mv).expect("apply should succeed");
                undo_move(black_box(&mut position)).expect("undo should succeed");
            }
            black_box(position.history.len())
        });
    });

    group.bench_function("fingerprint_startpos", |b| {
        let table = ZobristTable::new();
        b.iter(|| black_box(table.fingerprint(black_box(&position))));
    });

    group.finish();
}

criterion_group!(movegen_benches, bench_movegen);
criterion_main!(movegen_benches);
