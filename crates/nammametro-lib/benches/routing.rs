use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use nammametro_lib::{bengaluru_network, plan_route, solve, Priority};

fn benchmark_routing(c: &mut Criterion) {
    let network = bengaluru_network();
    let source = network
        .resolve_station("Challaghatta")
        .expect("station exists");
    let goal = network
        .resolve_station("Kempegowda International Airport")
        .expect("station exists");

    c.bench_function("solve_time_full_network", |b| {
        b.iter(|| {
            let paths = solve(&network, source, Priority::Time).expect("solve succeeds");
            black_box(paths.distance[goal])
        });
    });

    c.bench_function("plan_route_price_cross_city", |b| {
        b.iter(|| {
            let outcome =
                plan_route(&network, source, goal, Priority::Price).expect("plan succeeds");
            black_box(outcome)
        });
    });
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);
