//! Seal/open benchmarks across payload sizes, plus the open() failure paths.
//!
//! Run with: `cargo bench --bench timing`
//!
//! The failure group tracks how rejection cost compares across wrong-key,
//! tampered, truncated, and structurally short inputs. Rejections should not
//! be wildly cheaper to probe than valid opens are to perform; see also
//! `src/bin/timing.rs` for a standalone harness over the same inputs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use redoubt_seal::{Redoubt, SymmetricKey};

/// Payload sizes to benchmark.
const PAYLOAD_SIZES: &[usize] = &[64, 1024, 65_536, 1_048_576];

// ---------------------------------------------------------------------------
// Key generation and exchange encoding
// ---------------------------------------------------------------------------

fn bench_keygen(c: &mut Criterion) {
    let redoubt = Redoubt::new();
    let mut group = c.benchmark_group("keygen");

    group.bench_function("generate", |b| {
        b.iter(|| redoubt.generate_key());
    });

    group.bench_function("hex_roundtrip", |b| {
        let key = redoubt.generate_key();
        b.iter(|| {
            let key_hex = key.to_hex();
            SymmetricKey::from_hex(&key_hex).unwrap()
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Seal across payload sizes
// ---------------------------------------------------------------------------

fn bench_seal(c: &mut Criterion) {
    let redoubt = Redoubt::new();
    let key = redoubt.generate_key();

    let mut group = c.benchmark_group("seal");

    for &size in PAYLOAD_SIZES {
        let plaintext = vec![0x42u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &plaintext, |b, pt| {
            b.iter(|| redoubt.seal(&key, pt).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Open across payload sizes
// ---------------------------------------------------------------------------

fn bench_open(c: &mut Criterion) {
    let redoubt = Redoubt::new();
    let key = redoubt.generate_key();

    let mut group = c.benchmark_group("open");

    for &size in PAYLOAD_SIZES {
        let plaintext = vec![0x42u8; size];
        let ct = redoubt.seal(&key, &plaintext).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &ct, |b, ct| {
            b.iter(|| redoubt.open(&key, ct).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Open failure paths (1 KiB payload)
// ---------------------------------------------------------------------------

fn bench_open_failures(c: &mut Criterion) {
    let redoubt = Redoubt::new();
    let key = redoubt.generate_key();
    let wrong_key = redoubt.generate_key();

    let plaintext = vec![0x42u8; 1024];
    let ct = redoubt.seal(&key, &plaintext).unwrap();

    let mut tampered = ct.clone();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;

    let truncated = ct[..ct.len() - 1].to_vec();

    let mut group = c.benchmark_group("open_failure");

    group.bench_function("valid", |b| {
        b.iter(|| redoubt.open(&key, &ct).unwrap());
    });

    group.bench_function("wrong_key", |b| {
        b.iter(|| redoubt.open(&wrong_key, &ct).unwrap_err());
    });

    group.bench_function("tampered", |b| {
        b.iter(|| redoubt.open(&key, &tampered).unwrap_err());
    });

    group.bench_function("truncated_tag", |b| {
        b.iter(|| redoubt.open(&key, &truncated).unwrap_err());
    });

    group.bench_function("short", |b| {
        b.iter(|| redoubt.open(&key, b"short").unwrap_err());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_keygen,
    bench_seal,
    bench_open,
    bench_open_failures
);
criterion_main!(benches);
