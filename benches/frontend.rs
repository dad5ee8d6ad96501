//! Benchmarks for the front-end: scanning, compiling, and hashing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rill::hash;
use rill::lexer::Scanner;
use rill::unicode;

/// A synthetic program exercising every token family.
fn sample_source(forms: usize) -> String {
    let mut out = String::new();
    for i in 0..forms {
        out.push_str(&format!(
            "(setq x{i} (cons {i} \"value {i}\")) ; form {i}\n(print 'x{i})\n"
        ));
    }
    out
}

fn bench_scan(c: &mut Criterion) {
    let source = sample_source(200);
    let codepoints = unicode::to_codepoints(source.as_bytes(), source.len());
    c.bench_function("scan_tokens", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(&codepoints));
            black_box(scanner.scan_tokens())
        })
    });
}

fn bench_compile(c: &mut Criterion) {
    let source = sample_source(200);
    let bytes = source.as_bytes();
    c.bench_function("compile", |b| {
        b.iter(|| rill::compile(black_box(bytes)).expect("compiles"))
    });
}

fn bench_hash(c: &mut Criterion) {
    let data: Vec<u8> = (0..4096u32).map(|i| i as u8).collect();
    c.bench_function("hash128_4k", |b| {
        b.iter(|| hash::hash128(black_box(&data), 0))
    });
}

criterion_group!(benches, bench_scan, bench_compile, bench_hash);
criterion_main!(benches);
