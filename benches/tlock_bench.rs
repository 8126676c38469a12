// this file benchmarks the core operations of the tlock scheme

use ark_ec::Group;
use ark_std::{test_rng, UniformRand};
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use tlock::param::CIPHERSUITE;
use tlock::{tld, tle, DecryptionKey, Identity, MasterPublicKey, TlockG2, TlockScalar};

fn setup() -> (MasterPublicKey, TlockScalar) {
    let msk = TlockScalar::rand(&mut test_rng());
    let pk = MasterPublicKey::construct(CIPHERSUITE, TlockG2::generator() * msk);
    (pk, msk)
}

/// benchmark hashing a round identity onto the curve
fn bench_identity(c: &mut Criterion) {
    c.bench_function("identity: round to curve point", move |b| {
        b.iter(|| {
            let q = Identity::from_round(black_box(1000)).to_curve();
            assert!(q.is_ok());
        })
    });
}

/// benchmark verifying a beacon signature against a round and public key
fn bench_verify(c: &mut Criterion) {
    let (pk, msk) = setup();
    let key = Identity::from_round(1000).extract(msk).unwrap();

    c.bench_function("decryption key: verify", move |b| {
        b.iter(|| {
            assert!(black_box(&key).verify(1000, &pk));
        })
    });
}

/// benchmark a full encrypt and decrypt cycle over a range of message sizes
fn bench_tlock(c: &mut Criterion) {
    static KB: usize = 1024;

    let (pk, msk) = setup();
    let round = 1000u64;
    let key: DecryptionKey = Identity::from_round(round).extract(msk).unwrap();
    let esk = [2u8; 32];

    let mut group = c.benchmark_group("tlock");
    for size in [KB, 2 * KB, 4 * KB, 8 * KB, 16 * KB, 128 * KB, 256 * KB].iter() {
        let mut dummy_data = Vec::with_capacity(*size);
        (0..*size).for_each(|i| dummy_data.push(i as u8));

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &_size| {
            b.iter(|| {
                let ct = tle(
                    black_box(&pk),
                    black_box(round),
                    black_box(&dummy_data),
                    black_box(&esk),
                )
                .unwrap();
                let m = tld(&ct, &key).unwrap();
                assert_eq!(m.len(), dummy_data.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_identity, bench_verify, bench_tlock);
criterion_main!(benches);
