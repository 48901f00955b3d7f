use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dir_index::models::{DirectoryEntry, Locale};
use dir_index::render::render_index;

/// Entries with characters that force escaping in both the script and the fallback list
fn generate_entries(num_entries: usize) -> Vec<DirectoryEntry> {
    (0..num_entries)
        .map(|i| DirectoryEntry::new(format!("It's <page> {}", i), format!("it's page {}", i)))
        .collect()
}

fn bench_render_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_index");

    for size in [10, 100, 1_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let entries = generate_entries(size);
            b.iter(|| render_index(black_box(&entries), Locale::English));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_index);
criterion_main!(benches);
