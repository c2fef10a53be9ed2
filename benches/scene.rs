use criterion::{Criterion, criterion_group, criterion_main};
use great_circle_flights::{FlightRegistry, SceneBuilder};

fn scene_benchmark(c: &mut Criterion) {
    let registry = FlightRegistry::builtin();
    let selection = registry.default_selection();
    let builder = SceneBuilder::new(&registry);

    c.bench_function("scene", |b| {
        b.iter(|| {
            let mut warnings = Vec::new();
            builder.build(&selection, &mut warnings).unwrap()
        });
    });
}

criterion_group!(benches, scene_benchmark);
criterion_main!(benches);
