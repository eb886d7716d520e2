use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jpmesh::{Coordinate, JapanMesh, MeshLevel, parse_mesh_code};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn generate_fixed_codes(size: usize, seed: u64, level: MeshLevel) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed); // シード固定
    (0..size)
        .map(|_| JapanMesh::random_at_using(&mut rng, level).hyphenated_code())
        .collect()
}

fn generate_fixed_coordinates(size: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            Coordinate::from_degrees(
                rng.random_range(122.0..154.0),
                rng.random_range(20.0..46.0),
            )
        })
        .collect()
}

fn bench_mesh_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mesh Conversions");

    let coords = generate_fixed_coordinates(1_000, 12345);

    for level in MeshLevel::ALL {
        let codes = generate_fixed_codes(1_000, 67890, level);

        group.bench_with_input(
            BenchmarkId::new("ParseMeshCode", level),
            &codes,
            |b, codes| {
                b.iter(|| {
                    for code in codes {
                        black_box(parse_mesh_code(code).ok());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("FromCoordinate", level),
            &coords,
            |b, coords| {
                b.iter(|| {
                    for coord in coords {
                        black_box(JapanMesh::from_coordinate(*coord, level).ok());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mesh_conversions);
criterion_main!(benches);
