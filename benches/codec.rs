//! Codec throughput benchmarks.
//!
//! Rings are pre-warmed and reused via `clear()`, so the numbers measure
//! encode and decode work rather than buffer setup.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use zoab::{MAX_SEG_LEN, Ring, ZoabRx, ZoabTx};

/// Scalar encode/decode pairs through one ring.
fn scalar_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_codec");
    let iterations = 10_000u64;
    group.throughput(Throughput::Elements(iterations));

    {
        let mut ring: Ring<16> = Ring::new();
        group.bench_function("u32_roundtrip", |b| {
            b.iter(|| {
                ring.clear();
                for i in 0..iterations {
                    ring.tx_u32(black_box(i as u32)).unwrap();
                    black_box(ring.rx_u32().unwrap());
                }
            })
        });
    }

    {
        let mut ring: Ring<16> = Ring::new();
        group.bench_function("u8_roundtrip", |b| {
            b.iter(|| {
                ring.clear();
                for i in 0..iterations {
                    ring.tx_u8(black_box(i as u8)).unwrap();
                    black_box(ring.rx_u8().unwrap());
                }
            })
        });
    }

    group.finish();
}

/// Data segmentation across payload sizes: below the segment cap, exactly
/// at it, and long enough to chain.
fn data_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_segmentation");

    {
        let payload = [0x5A_u8; 16];
        let mut ring: Ring<2048> = Ring::new();
        let mut buf = [0u8; MAX_SEG_LEN];
        group.throughput(Throughput::Bytes(16));
        group.bench_function("bytes_16", |b| {
            b.iter(|| {
                ring.clear();
                ring.tx_data(black_box(&payload), false).unwrap();
                loop {
                    let head = ring.rx_seg(&mut buf).unwrap();
                    black_box(&buf[..head.len]);
                    if !head.join {
                        break;
                    }
                }
            })
        });
    }

    {
        let payload = [0x5A_u8; MAX_SEG_LEN];
        let mut ring: Ring<2048> = Ring::new();
        let mut buf = [0u8; MAX_SEG_LEN];
        group.throughput(Throughput::Bytes(MAX_SEG_LEN as u64));
        group.bench_function("bytes_99_seg_cap", |b| {
            b.iter(|| {
                ring.clear();
                ring.tx_data(black_box(&payload), false).unwrap();
                loop {
                    let head = ring.rx_seg(&mut buf).unwrap();
                    black_box(&buf[..head.len]);
                    if !head.join {
                        break;
                    }
                }
            })
        });
    }

    {
        let payload = [0x5A_u8; 1024];
        let mut ring: Ring<2048> = Ring::new();
        let mut buf = [0u8; MAX_SEG_LEN];
        group.throughput(Throughput::Bytes(1024));
        group.bench_function("bytes_1024_chained", |b| {
            b.iter(|| {
                ring.clear();
                ring.tx_data(black_box(&payload), false).unwrap();
                loop {
                    let head = ring.rx_seg(&mut buf).unwrap();
                    black_box(&buf[..head.len]);
                    if !head.join {
                        break;
                    }
                }
            })
        });
    }

    group.finish();
}

/// Marker scan over a kilobyte of marker-free noise.
fn resync_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("resync_scan");

    let mut wire = vec![0u8; 1024];
    for (i, byte) in wire.iter_mut().enumerate() {
        *byte = (i % 127) as u8;
    }
    wire.extend_from_slice(&[0x80, 0x03, 0x01, 0x42]);
    group.throughput(Throughput::Bytes(wire.len() as u64));

    {
        let mut ring: Ring<2048> = Ring::new();
        group.bench_function("noise_1k", |b| {
            b.iter(|| {
                ring.clear();
                ring.extend(&wire);
                black_box(ring.rx_start());
                black_box(ring.rx_u8().unwrap());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, scalar_codec, data_segmentation, resync_scan);
criterion_main!(benches);
