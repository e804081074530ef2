// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rangelist::{ArrayRangeList, ChainRangeList, RangeStore};
use std::hint::black_box;
use std::ops::Range;

/// A reproducible mix of adds and removes over `0..domain`.
fn workload(ops: usize, domain: i64, seed: u64) -> Vec<(bool, Range<i64>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..ops)
        .map(|_| {
            let start = rng.random_range(0..domain);
            let end = (start + rng.random_range(1..64)).min(domain);
            (rng.random_bool(0.6), start..end)
        })
        .collect()
}

fn run<S>(store: &mut S, ops: &[(bool, Range<i64>)])
where
    S: RangeStore<i64>,
{
    for (is_add, range) in ops {
        if *is_add {
            store.add(range.clone());
        } else {
            store.remove(range.clone());
        }
    }
}

fn bench_stores(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_list");

    for &ops in &[1_000usize, 10_000] {
        let workload = workload(ops, (ops as i64) * 16, 0xBEEF);
        group.throughput(Throughput::Elements(ops as u64));

        group.bench_with_input(BenchmarkId::new("array", ops), &workload, |b, w| {
            b.iter(|| {
                let mut store = ArrayRangeList::new();
                run(&mut store, black_box(w));
                black_box(store.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("chain", ops), &workload, |b, w| {
            b.iter(|| {
                let mut store = ChainRangeList::new();
                run(&mut store, black_box(w));
                black_box(store.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stores);
criterion_main!(benches);
