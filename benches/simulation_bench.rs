use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nbody_engine::bodies::random_bodies;
use nbody_engine::{NullReporter, SimulationConfig, Simulator, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let simulator = Simulator::new(random_bodies(64, &mut rng));
    let seconds = 10;

    let mut group = c.benchmark_group("simulate");

    group.bench_function(BenchmarkId::new("sequential", seconds), |b| {
        let config = SimulationConfig {
            strategy: Strategy::Sequential,
            seconds,
            ..Default::default()
        };
        b.iter(|| simulator.simulate(&config, &mut NullReporter::new()).unwrap());
    });

    for threads in [2, 4, 8] {
        group.bench_function(BenchmarkId::new("parallel", threads), |b| {
            let config = SimulationConfig {
                strategy: Strategy::Parallel,
                threads,
                seconds,
                ..Default::default()
            };
            b.iter(|| simulator.simulate(&config, &mut NullReporter::new()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
