use criterion::{criterion_group, criterion_main, Criterion};
use narrator_engine::animation::{blend_step, AggregateConvergence};
use narrator_engine::snapshot::Snapshot;
use narrator_engine::{FaceParams, Narrator};

fn bench_blend_step(c: &mut Criterion) {
    let target = Snapshot::from_values([0.25; 14]);
    let policy = AggregateConvergence::default();

    c.bench_function("blend_step", |b| {
        b.iter(|| {
            let mut params = FaceParams::default();
            blend_step(&mut params, &target, 1.0 / 60.0, &policy)
        })
    });
}

fn bench_rig_update(c: &mut Criterion) {
    let mut narrator = Narrator::new();
    narrator.params.head_rotation = 0.3;
    narrator.params.smile_amount = 1.2;

    c.bench_function("rig_update", |b| {
        b.iter(|| narrator.update().unwrap())
    });
}

criterion_group!(benches, bench_blend_step, bench_rig_update);
criterion_main!(benches);
