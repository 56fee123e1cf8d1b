//! Benchmarks for name parsing and transformation.
//!
//! Covers the hot paths of analyses that process large interaction datasets:
//! - Type classification and lazy type-parameter parsing
//! - Member parsing with parameter lists
//! - Token deserialization including legacy fixes
//! - Anonymization and readable rendering
//! - Interning through the name cache

extern crate namescope;

use criterion::{criterion_group, criterion_main, Criterion};
use namescope::prelude::*;
use std::hint::black_box;

const GENERIC_TYPE: &str = "System.Collections.Generic.Dictionary`2[[TKey -> p:string],[TValue -> System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0";
const METHOD: &str = "static [p:bool] [n.Outer`1[[T]]+Inner, MyProject].TryGet`1[[U -> p:int]](this [T] source, out [U] value, opt [p:string] key)";
const LEGACY_TOKEN: &str = "CSharp.MethodName:[System.Void, mscorlib, 4.0.0.0] [n.C1`1[[T1]]+C2[[T2]], P].M([System.Int32, mscorlib, 4.0.0.0] i)";

/// Benchmark classifying a nested generic type and walking its bindings.
fn bench_type_parse(c: &mut Criterion) {
    c.bench_function("type_parse_generic", |b| {
        b.iter(|| {
            let t = TypeName::new(black_box(GENERIC_TYPE));
            black_box(t.type_parameters().len())
        });
    });
}

/// Benchmark classification alone.
fn bench_classify(c: &mut Criterion) {
    let ids = ["p:int", "?", "T -> p:int", "d:[p:void] [n.D, P].()", "n.C[,], P", GENERIC_TYPE];
    c.bench_function("type_classify", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(namescope::names::classify(black_box(id)));
            }
        });
    });
}

/// Benchmark parsing a method and its parameter list.
fn bench_method_parse(c: &mut Criterion) {
    c.bench_function("method_parse", |b| {
        b.iter(|| {
            let m = MethodName::new(black_box(METHOD)).unwrap();
            black_box(m.parameters().len())
        });
    });
}

/// Benchmark decoding a historical token, which runs every fix.
fn bench_deserialize_legacy(c: &mut Criterion) {
    c.bench_function("deserialize_legacy", |b| {
        b.iter(|| black_box(deserialize(black_box(LEGACY_TOKEN)).unwrap()));
    });
}

/// Benchmark anonymizing a local-project method.
fn bench_anonymize(c: &mut Criterion) {
    let method = MethodName::new(METHOD).unwrap();
    c.bench_function("anonymize_method", |b| {
        b.iter(|| black_box(black_box(&method).to_anonymous()));
    });
}

/// Benchmark readable rendering of a generic type.
fn bench_readable(c: &mut Criterion) {
    c.bench_function("readable_generic", |b| {
        b.iter(|| black_box(TypeName::new(black_box(GENERIC_TYPE)).to_readable()));
    });
}

/// Benchmark cache hits against fresh parses.
fn bench_cache(c: &mut Criterion) {
    let cache = NameCache::new();
    cache.method(METHOD).unwrap();
    c.bench_function("cache_hit_method", |b| {
        b.iter(|| black_box(cache.method(black_box(METHOD)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_type_parse,
    bench_classify,
    bench_method_parse,
    bench_deserialize_legacy,
    bench_anonymize,
    bench_readable,
    bench_cache
);
criterion_main!(benches);
