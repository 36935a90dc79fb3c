//! SHA-512/256 benchmarks.
//!
//! Run: `cargo bench -p hashes -- sha512_256`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashes::crypto::Sha512_256;
use traits::Digest;

const SIZES: [usize; 5] = [64, 256, 1024, 16384, 262144];

fn bench_oneshot(c: &mut Criterion) {
  let mut group = c.benchmark_group("sha512_256");

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Sha512_256::digest(data)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_oneshot);
criterion_main!(benches);
