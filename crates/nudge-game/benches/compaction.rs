use nudge_core::rng::RngHandle;
use nudge_game::{gen_random_game, parse_pgsolver_str, to_pgsolver_string};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn compaction_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let game = gen_random_game(2_000, 4, 64, &mut rng).unwrap();
    let text = to_pgsolver_string(&game);

    c.bench_function("without_node", |b| {
        b.iter(|| black_box(game.without_node(black_box(1_000)).unwrap()));
    });

    c.bench_function("parse_pgsolver", |b| {
        b.iter(|| black_box(parse_pgsolver_str(black_box(&text)).unwrap()));
    });
}

criterion_group!(benches, compaction_bench);
criterion_main!(benches);
