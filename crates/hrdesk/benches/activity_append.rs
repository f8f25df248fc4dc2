use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hrdesk_core::{ActivityLogger, SystemClock};
use hrdesk_store::{FileStore, PersistenceAdapter};
use std::hint::black_box;
use std::sync::Arc;

fn bench_activity_append_memory(c: &mut Criterion) {
    let logger = ActivityLogger::new(PersistenceAdapter::in_memory(), Arc::new(SystemClock));
    for i in 0..200 {
        logger.log_section(&format!("Section {i}")).unwrap();
    }

    c.bench_function("activity_append_memory_200", |b| {
        b.iter(|| {
            logger.record_page(black_box("/attendance"), None).unwrap();
        });
    });
}

fn bench_activity_append_file(c: &mut Criterion) {
    let temp = tempfile::TempDir::new().unwrap();
    let adapter = PersistenceAdapter::new(Arc::new(FileStore::new(temp.path())));
    let logger = ActivityLogger::new(adapter, Arc::new(SystemClock));

    c.bench_function("activity_append_file", |b| {
        b.iter_batched(
            || logger.clear().unwrap(),
            |_| {
                logger
                    .record_page(black_box("/reports"), Some("Reports"))
                    .unwrap();
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_activity_append_memory,
    bench_activity_append_file
);
criterion_main!(benches);
