use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use aromes_catalog::{Criterion as Field, FilterEngine, Product, SortOrder};

const BRANDS: &[&str] = &["Creed", "Dior", "Chanel", "Guerlain", "Hermès"];
const CATEGORIES: &[&str] = &["Homme", "Femme", "Mixte"];

fn snapshot(len: usize) -> Vec<Product> {
    (0..len)
        .map(|i| Product {
            id: format!("p-{i}").parse().unwrap(),
            name: format!("Parfum {:04}", (i * 7919) % len.max(1)),
            brand: BRANDS[i % BRANDS.len()].to_string(),
            price: ((i * 37) % 1500) as f64,
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            size: if i % 2 == 0 { "50ml" } else { "100ml" }.to_string(),
            format: "Eau de Parfum".to_string(),
            rating: ((i * 13) % 50) as f64 / 10.0,
            review_count: ((i * 101) % 400) as u32,
        })
        .collect()
}

fn bench_apply_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_filters");

    for &len in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("default_criteria", len), &len, |b, &len| {
            let mut engine = FilterEngine::with_default_page_size(snapshot(len));
            b.iter(|| {
                engine.apply_filters();
                black_box(engine.filtered_count())
            });
        });

        group.bench_with_input(BenchmarkId::new("full_criteria", len), &len, |b, &len| {
            let mut engine = FilterEngine::with_default_page_size(snapshot(len));
            engine.set(Field::Category("Homme".to_string())).unwrap();
            engine.set(Field::Brand("Dior".to_string())).unwrap();
            engine.set(Field::PriceMin(Some(100.0))).unwrap();
            engine.set(Field::PriceMax(Some(1_000.0))).unwrap();
            engine.set(Field::Search("parfum".to_string())).unwrap();
            engine.set(Field::Sort(SortOrder::Popularity)).unwrap();
            b.iter(|| {
                engine.apply_filters();
                black_box(engine.filtered_count())
            });
        });
    }

    group.finish();
}

fn bench_page(c: &mut Criterion) {
    let mut engine = FilterEngine::with_default_page_size(snapshot(10_000));

    c.bench_function("page_mid_catalog", |b| {
        b.iter(|| black_box(engine.page(black_box(400))).products.len())
    });
}

criterion_group!(benches, bench_apply_filters, bench_page);
criterion_main!(benches);
