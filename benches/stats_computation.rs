use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use std::time::Duration;

use menu_rs::models::{Course, MenuItem, NewMenuItem};
use menu_rs::services::{compute_stats, MenuStore};

fn menu_with_size(size: usize) -> Vec<MenuItem> {
    let courses = [Course::Starter, Course::Main, Course::Dessert];

    (0..size)
        .map(|i| {
            MenuItem::new(NewMenuItem::new(
                format!("Benchmark Dish {}", i),
                format!("Description for benchmark dish {}", i),
                courses[i % courses.len()],
                Decimal::new(1000 + (i as i64 % 500) * 25, 2),
            ))
        })
        .collect()
}

fn bench_compute_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_stats");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(5));

    for dataset_size in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("dataset_size", dataset_size),
            dataset_size,
            |b, &size| {
                let items = menu_with_size(size);
                b.iter(|| black_box(compute_stats(black_box(&items))));
            },
        );
    }
    group.finish();
}

fn bench_add_then_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_store");

    group.bench_function("add_then_remove", |b| {
        b.iter_batched(
            || {
                let mut store = MenuStore::new();
                for item in menu_with_size(100) {
                    store.add_item(NewMenuItem::new(
                        item.name,
                        item.description,
                        item.course,
                        item.price,
                    ));
                }
                store
            },
            |mut store| {
                let item = store.add_item(NewMenuItem::new(
                    "Benchmark Special",
                    "",
                    Course::Main,
                    Decimal::new(9999, 2),
                ));
                black_box(store.remove_item(&item.id))
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_compute_stats, bench_add_then_remove);
criterion_main!(benches);
