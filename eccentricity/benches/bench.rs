use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eccentricity::{compute_shortest_paths, graph_eccentricities, Graph};
use rand::{rngs::StdRng, SeedableRng};

fn bench_shortest_paths(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let g = Graph::random(1_000, 0.05, 20, &mut rng);

    c.bench_function("dijkstra_1k_er_p005", |b| {
        b.iter(|| {
            let res = compute_shortest_paths(&g, black_box(0)).unwrap();
            black_box(res.eccentricity);
        })
    });

    let small = Graph::random(60, 0.2, 20, &mut rng);
    c.bench_function("all_eccentricities_60", |b| {
        b.iter(|| {
            let m = graph_eccentricities(black_box(&small)).unwrap();
            black_box(m.diameter);
        })
    });
}

criterion_group!(benches, bench_shortest_paths);
criterion_main!(benches);
