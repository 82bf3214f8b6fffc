//! 動的ディスパッチと静的ディスパッチのパフォーマンス比較ベンチマーク
//!
//! 同じ料理を作る二つの経路の差を測定

use criterion::{criterion_group, criterion_main, Criterion};
use food_factory::factory::static_factory::{
    cook_static, StaticCurryFactory, StaticRamenFactory,
};
use food_factory::{get_factory, CurryFactory, FoodFactory, FoodFactoryProvider, FoodKind, RamenFactory};
use std::time::Duration;

/// 動的ディスパッチ（Box<dyn FoodFactory>）のベンチマーク
fn benchmark_dynamic_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dynamic Dispatch");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("selector + cook", |b| {
        b.iter(|| {
            let factory = get_factory("Ramen").unwrap();
            std::hint::black_box(factory.cook())
        })
    });

    group.bench_function("provider + cook", |b| {
        b.iter(|| {
            let factory = FoodFactoryProvider::create(FoodKind::Curry);
            std::hint::black_box(factory.cook())
        })
    });

    group.bench_function("reused boxed factory", |b| {
        let factory = FoodFactoryProvider::create(FoodKind::Ramen);
        b.iter(|| std::hint::black_box(factory.cook()))
    });

    group.finish();
}

/// 静的ディスパッチ（ジェネリクス）のベンチマーク
fn benchmark_static_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Static Dispatch");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("cook_static ramen", |b| {
        b.iter(|| std::hint::black_box(cook_static::<StaticRamenFactory>()))
    });

    group.bench_function("cook_static curry", |b| {
        b.iter(|| std::hint::black_box(cook_static::<StaticCurryFactory>()))
    });

    group.finish();
}

/// メモリサイズ測定
fn benchmark_memory_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Memory Sizes");

    group.bench_function("Factory Sizes", |b| {
        b.iter(|| {
            let ramen_size = std::mem::size_of::<RamenFactory>();
            let curry_size = std::mem::size_of::<CurryFactory>();
            let boxed_size = std::mem::size_of::<Box<dyn FoodFactory>>();

            std::hint::black_box((ramen_size, curry_size, boxed_size))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_dynamic_dispatch,
    benchmark_static_dispatch,
    benchmark_memory_sizes
);
criterion_main!(benches);
