//! Criterion benchmarks for easy_log

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use easy_log::prelude::*;
use std::sync::Arc;

/// Discards every batch
struct NullWriter;

impl LogWriter for NullWriter {
    fn write(&mut self, lines: &[String]) -> Result<()> {
        black_box(lines);
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Submission Benchmarks
// ============================================================================

fn bench_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("submission");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .min_level(Level::Info)
        .flush_threshold(1024)
        .writer(NullWriter)
        .build()
        .unwrap();
    let client = logger.client("bench");

    group.bench_function("filtered", |b| {
        b.iter(|| client.debug(black_box("Debug message")));
    });

    group.bench_function("plain", |b| {
        b.iter(|| client.info(black_box("Info message")));
    });

    group.bench_function("template", |b| {
        b.iter(|| {
            client
                .submit(Level::Info, black_box("user {0} did {1}"), &[&42, &"login"])
                .unwrap()
        });
    });

    group.finish();
}

// ============================================================================
// Flush Benchmarks
// ============================================================================

fn bench_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush");

    for batch in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(batch as u64));
        group.bench_function(format!("ring_buffer_{}", batch), |b| {
            let logger = Logger::builder()
                .flush_threshold(usize::MAX)
                .writer(RingBufferWriter::new())
                .writer(NullWriter)
                .build()
                .unwrap();
            let client = logger.client("bench");

            b.iter_batched(
                || {
                    for i in 0..batch {
                        client.info(format!("message {}", i));
                    }
                },
                |_| logger.flush().unwrap(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// Contention Benchmarks
// ============================================================================

fn bench_concurrent_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");
    let threads = 4;
    let per_thread = 1_000;
    group.throughput(Throughput::Elements((threads * per_thread) as u64));

    let logger = Arc::new(
        Logger::builder()
            .flush_threshold(256)
            .writer(NullWriter)
            .build()
            .unwrap(),
    );

    group.bench_function("four_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        let client = logger.client(&format!("t{}", t));
                        for i in 0..per_thread {
                            client.info(format!("{}", i));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_submission,
    bench_flush,
    bench_concurrent_submission
);
criterion_main!(benches);
