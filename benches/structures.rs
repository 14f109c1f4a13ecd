use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use suffixdex::{IndexConfig, LongestPrefixMatch, StructureKind};

static QUERIES: [&[u8]; 3] = [b"AA", b"AGTCCAG", b"ACATACTAGATCCACCA"];

fn random_dna(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| b"ACGT"[rng.random_range(0..4)]).collect()
}

fn construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let config = IndexConfig::default();

    for window_size in [250, 1000] {
        let text = random_dna(window_size, 42);

        for kind in StructureKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), window_size),
                &text,
                |b, text| b.iter(|| config.construct(kind, black_box(text))),
            );
        }
    }

    group.finish();
}

fn search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let text = random_dna(1000, 42);
    let config = IndexConfig::default();

    for kind in StructureKind::ALL {
        let index = config.construct(kind, &text);

        for query in QUERIES {
            group.bench_function(BenchmarkId::new(kind.to_string(), query.len()), |b| {
                b.iter(|| index.longest_prefix_match(black_box(query)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, construction, search);
criterion_main!(benches);
