#[macro_use]
extern crate criterion;

use std::hint::black_box;
use std::io;

use criterion::Criterion;

use conip::{Encoding, Separator, Sink, Terms};

// Generation throughput over the first million terms of the full sequence.
pub fn bench_terms(c: &mut Criterion) {
    c.bench_function("terms_1m", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for term in Terms::new().take(1 << 20) {
                sum = sum.wrapping_add(u64::from(term));
            }
            black_box(sum)
        })
    });
}

// Full reduced-alphabet streams through the sink, discarding the bytes.
pub fn bench_sink(c: &mut Criterion) {
    c.bench_function("sink_text_b16", |b| {
        b.iter(|| {
            Sink::new(io::sink(), Encoding::Text(Separator::Dot), 4096)
                .unwrap()
                .consume(Terms::with_max_symbol(15))
                .unwrap()
        })
    });

    c.bench_function("sink_binary_b16", |b| {
        b.iter(|| {
            Sink::new(io::sink(), Encoding::Binary, 4096)
                .unwrap()
                .consume(Terms::with_max_symbol(15))
                .unwrap()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10);

    targets = bench_terms, bench_sink
}
criterion_main!(benches);
