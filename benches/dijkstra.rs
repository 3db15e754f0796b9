use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_planning::graph::generators::{generate_random_connected, generate_window_grid, window_label};
use path_planning::{Dijkstra, ShortestPathEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_random_graphs(c: &mut Criterion) {
    let dijkstra = Dijkstra::new();
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("dijkstra_random_connected");

    for &size in &[1_000usize, 10_000] {
        let graph = generate_random_connected(size, size * 2, 100.0, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| dijkstra.compute_distances(graph, black_box(&0usize)).unwrap())
        });
    }

    group.finish();
}

fn bench_window_grid(c: &mut Criterion) {
    let dijkstra = Dijkstra::new();
    let graph = generate_window_grid(100, 100, 1.0, 2.0).unwrap();
    let start = window_label(1, 1);
    let end = window_label(100, 100);

    c.bench_function("dijkstra_window_grid_100x100", |b| {
        b.iter(|| dijkstra.shortest_path(&graph, black_box(&start), black_box(&end)).unwrap())
    });
}

criterion_group!(benches, bench_random_graphs, bench_window_grid);
criterion_main!(benches);
