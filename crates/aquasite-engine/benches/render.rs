use aquasite_engine::render::{Surface, plan_page};
use aquasite_engine::store::PageRecord;
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_render_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = common::generate_page(100);

    group.bench_function("plan_preview", |b| {
        b.iter(|| {
            let plan = plan_page(&content, Surface::Preview);
            std::hint::black_box(plan);
        });
    });

    group.bench_function("plan_reader", |b| {
        b.iter(|| {
            let plan = plan_page(&content, Surface::Reader);
            std::hint::black_box(plan);
        });
    });

    let stored = PageRecord {
        content: content.clone(),
        features: None,
    }
    .to_json();

    group.bench_function("decode_page", |b| {
        b.iter(|| {
            let record = PageRecord::from_json(stored.clone());
            std::hint::black_box(record)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_planning);
criterion_main!(benches);
