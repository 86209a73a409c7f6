use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_std_fmt(c: &mut Criterion) {
    c.bench_function("format!(\"{:x}\") i32::MIN", |b| {
        b.iter(|| format!("{:x}", black_box(i32::MIN)))
    });

    c.bench_function("format!(\"{:X}\") i64::MIN", |b| {
        b.iter(|| format!("{:X}", black_box(i64::MIN)))
    });

    c.bench_function("format!(\"{:b}\") -1i64", |b| {
        b.iter(|| format!("{:b}", black_box(-1i64)))
    });
}

criterion_group!(benches, bench_std_fmt);
criterion_main!(benches);
