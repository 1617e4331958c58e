use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use transpose::matrix::transpose::{transpose_in_place, transpose_into};
use transpose::threaded::transpose_mt::transpose_multi;
use transpose::{DEFAULT_SEED, generate_matrix};

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    group.sample_size(20);

    for n in [256usize, 1024, 2048] {
        let orig = generate_matrix(n, DEFAULT_SEED);
        group.throughput(Throughput::Bytes((n * n * std::mem::size_of::<i32>()) as u64));

        group.bench_with_input(BenchmarkId::new("out_of_place", n), &orig, |b, orig| {
            let mut dst = vec![0; n * n];
            b.iter(|| transpose_into(black_box(orig.as_slice()), &mut dst, n, n));
        });

        group.bench_with_input(BenchmarkId::new("in_place", n), &orig, |b, orig| {
            let mut m = orig.clone();
            b.iter(|| transpose_in_place(black_box(&mut m)));
        });

        for threads in [2usize, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("threaded_{}", threads), n),
                &orig,
                |b, orig| {
                    let mut m = orig.clone();
                    b.iter(|| transpose_multi(black_box(&mut m), threads).unwrap());
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_transpose);
criterion_main!(benches);
