use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use dpheap::heap::make_heap_by;
use dpheap::heap::pop_heap_by;
use dpheap::heap::push_heap_by;
use dpheap::heap::sort_heap_by;
use dpheap::merge::InputRange;
use dpheap::merge::nway_merge_by;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn shuffled(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data: Vec<i64> = (0..n as i64).collect();
    data.shuffle(&mut rng);
    data
}

fn less(a: &i64, b: &i64) -> bool {
    a < b
}

fn bench_make_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_heap");
    for &n in &SIZES {
        let base = shuffled(n, 0);
        group.bench_with_input(BenchmarkId::new("F4P1", n), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut data| make_heap_by::<_, _, 4, 1>(&mut data, less),
                criterion::BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("F2P512", n), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut data| make_heap_by::<_, _, 2, 512>(&mut data, less),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for &n in &SIZES {
        let mut base = shuffled(n, 1);
        make_heap_by::<_, _, 4, 1>(&mut base, less);

        group.bench_with_input(BenchmarkId::new("push_heap/F4P1", n), &base, |b, base| {
            b.iter_batched(
                || {
                    let mut data = base.clone();
                    data.push(n as i64 * 2);
                    data
                },
                |mut data| push_heap_by::<_, _, 4, 1>(&mut data, less),
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("pop_heap/F4P1", n), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut data| pop_heap_by::<_, _, 4, 1>(&mut data, less),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_sort_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_heap");
    for &n in &SIZES {
        let mut base = shuffled(n, 2);
        make_heap_by::<_, _, 4, 1>(&mut base, less);
        group.bench_with_input(BenchmarkId::new("F4P1", n), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut data| sort_heap_by::<_, _, 4, 1>(&mut data, less),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_nway_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("nway_merge");
    for &fanin in &[4usize, 16, 64] {
        let run_len = 10_000 / fanin.max(1);
        let runs: Vec<Vec<i64>> = (0..fanin)
            .map(|k| (0..run_len as i64).map(|i| i * fanin as i64 + k as i64).collect())
            .collect();
        let total: usize = runs.iter().map(|r| r.len()).sum();

        group.bench_with_input(BenchmarkId::new("ranges", fanin), &runs, |b, runs| {
            b.iter_batched(
                || {
                    let ranges: Vec<InputRange<'_, i64>> = runs.iter().map(|r| InputRange::new(r)).collect();
                    let out = vec![0i64; total];
                    (ranges, out)
                },
                |(mut ranges, mut out)| nway_merge_by::<_, _, 4, 1>(&mut ranges, &mut out, less),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_make_heap, bench_push_pop, bench_sort_heap, bench_nway_merge);
criterion_main!(benches);
