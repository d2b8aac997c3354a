use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scrutineer::{
    Lifetime, Service, ServiceCatalog, ServiceCollection, ServiceCollectionCatalogExt,
    SingletonService,
};
use std::sync::Arc;

trait Widget: Service {
    fn id(&self) -> u32;
}

struct BenchWidget;

impl Service for BenchWidget {}
impl SingletonService for BenchWidget {}
impl Widget for BenchWidget {
    fn id(&self) -> u32 {
        1
    }
}

fn build_catalog(size: usize) -> ServiceCatalog {
    let mut catalog = ServiceCatalog::new();
    for _ in 0..size {
        catalog
            .add_type::<BenchWidget>()
            .as_singleton()
            .implements::<dyn Widget, _>(|_| Arc::new(BenchWidget));
    }
    catalog
}

fn bench_catalog_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_pass");
    for size in [1usize, 16, 256] {
        let catalog = build_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                let mut services = ServiceCollection::new();
                services.add_services_from(catalog);
                black_box(services.len())
            })
        });
    }
    group.finish();
}

fn bench_direct_registration(c: &mut Criterion) {
    c.bench_function("direct_add_factory_256", |b| {
        b.iter(|| {
            let mut services = ServiceCollection::new();
            for _ in 0..256 {
                services.add_factory::<BenchWidget, _>(Lifetime::Transient, |_| BenchWidget);
            }
            black_box(services.len())
        })
    });
}

criterion_group!(benches, bench_catalog_pass, bench_direct_registration);
criterion_main!(benches);
