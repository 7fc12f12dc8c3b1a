//! Engine benchmarks.
//!
//! Compares the engine against the official blake3 crate across input sizes,
//! and the engine's own kernels and drivers against each other.

use core::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, SamplingMode, Throughput, criterion_group, criterion_main};
use engine::{Blake3Bulk, bench as glue};

const MIB: usize = 1024 * 1024;

fn splitmix(state: &mut u64) -> u64 {
  *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
  let mut z = *state;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}

fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed;
  let mut out = vec![0u8; len];
  for word in out.chunks_exact_mut(8) {
    word.copy_from_slice(&splitmix(&mut state).to_le_bytes());
  }
  out
}

fn oneshot_comparison(c: &mut Criterion) {
  let mut group = c.benchmark_group("bulkhash/oneshot");
  group.sample_size(20);
  group.warm_up_time(Duration::from_secs(2));
  group.measurement_time(Duration::from_secs(4));
  group.sampling_mode(SamplingMode::Flat);

  for mib in [1usize, 2, 4, 8] {
    let len = mib * MIB;
    let data = black_box(pseudo_random_bytes(len, 0xB3B1_0000 + mib as u64));
    group.throughput(Throughput::Bytes(len as u64));

    group.bench_with_input(BenchmarkId::new("bulkhash", mib), &data, |b, d| {
      b.iter(|| black_box(Blake3Bulk::digest(black_box(d)).unwrap()))
    });

    group.bench_with_input(BenchmarkId::new("official", mib), &data, |b, d| {
      b.iter(|| black_box(*blake3::hash(black_box(d)).as_bytes()))
    });
  }

  group.finish();
}

fn kernel_comparison(c: &mut Criterion) {
  let data = black_box(pseudo_random_bytes(MIB, 0xB3B1_1111));

  let mut group = c.benchmark_group("bulkhash/kernels");
  group.sample_size(20);
  group.sampling_mode(SamplingMode::Flat);
  group.throughput(Throughput::Bytes(data.len() as u64));

  for &id in glue::ALL {
    group.bench_function(id.as_str(), |b| {
      b.iter(|| black_box(glue::digest_with_kernel(id, black_box(&data)).unwrap()))
    });
  }

  group.finish();
}

fn driver_comparison(c: &mut Criterion) {
  let data = black_box(pseudo_random_bytes(8 * MIB, 0xB3B1_2222));

  let mut group = c.benchmark_group("bulkhash/drivers");
  group.sample_size(20);
  group.sampling_mode(SamplingMode::Flat);
  group.throughput(Throughput::Bytes(data.len() as u64));

  group.bench_function("sequential", |b| {
    b.iter(|| black_box(glue::digest_sequential(black_box(&data)).unwrap()))
  });

  #[cfg(feature = "parallel")]
  group.bench_function("parallel", |b| {
    b.iter(|| black_box(glue::digest_parallel(black_box(&data)).unwrap()))
  });

  group.finish();
}

criterion_group!(benches, oneshot_comparison, kernel_comparison, driver_comparison);
criterion_main!(benches);
