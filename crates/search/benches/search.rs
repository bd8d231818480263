//! Benchmarks for catalog search and suggestions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecrist_search::{get_search_suggestions, normalize, search_products, Catalog, NewProduct};

fn create_catalog(count: usize) -> Catalog {
    let seed = Catalog::seed();
    let mut catalog = Catalog::new();
    for i in 0..count {
        let base = &seed.records()[i % seed.len()];
        catalog.insert(
            NewProduct::new(
                format!("{} {}", base.name, i),
                base.description.clone(),
                base.category.clone(),
            )
            .with_material(base.material.clone().unwrap_or_default()),
        );
    }
    catalog
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("Champú ecológico sin envases plásticos, formulado con ingredientes naturales.")))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [10, 100, 1000].iter() {
        let catalog = create_catalog(*size);

        group.bench_with_input(BenchmarkId::new("exact", size), size, |b, _| {
            b.iter(|| search_products(black_box(catalog.records()), black_box("bambu"), None))
        });

        group.bench_with_input(BenchmarkId::new("fuzzy", size), size, |b, _| {
            b.iter(|| {
                search_products(
                    black_box(catalog.records()),
                    black_box("bambu sostenivle"),
                    Some("higiene"),
                )
            })
        });
    }

    group.finish();
}

fn bench_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggestions");

    for size in [10, 100].iter() {
        let catalog = create_catalog(*size);
        group.bench_with_input(BenchmarkId::new("typo", size), size, |b, _| {
            b.iter(|| get_search_suggestions(black_box(catalog.records()), black_box("jabones")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_search, bench_suggestions);
criterion_main!(benches);
