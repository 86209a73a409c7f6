use integer_formatting::{Case, to_binary_string_64, to_hex_string_32, to_hex_string_64};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_formatting(c: &mut Criterion) {
    c.bench_function("to_hex_string_32 i32::MIN", |b| {
        b.iter(|| to_hex_string_32(black_box(i32::MIN), Case::Lowercase))
    });

    c.bench_function("to_hex_string_64 i64::MIN", |b| {
        b.iter(|| to_hex_string_64(black_box(i64::MIN), Case::Uppercase))
    });

    c.bench_function("to_binary_string_64 -1", |b| {
        b.iter(|| to_binary_string_64(black_box(-1), Case::Lowercase))
    });
}

criterion_group!(benches, bench_formatting);
criterion_main!(benches);
