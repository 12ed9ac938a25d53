//! # Charset Bloom Benchmarks
//!
//! Claims to validate:
//! - `store` and `definitely_not_in_set` are O(length of hash output)
//! - Composite queries stop at the first member answering "absent"
//! - The binary-integer filter is a handful of bit operations

use charset_bloom::{
    Alphabet, AlphabetBloomFilter, BinaryIntegerBloomFilter, FilterConfigBuilder, HasherKind,
    IdentityHasher, MembershipFilter, Sha256Hasher, Value,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::Duration;

/// Random lowercase alphanumeric words of the given length
fn generate_words(count: usize, len: usize) -> Vec<Value> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let word: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(|b| (b as char).to_ascii_lowercase())
                .collect();
            Value::from(word)
        })
        .collect()
}

fn generate_integers(count: usize) -> Vec<Value> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Value::from(rng.gen_range(0u64..1 << 20)))
        .collect()
}

fn bench_alphabet_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("charset-bloom/alphabet");
    group.measurement_time(Duration::from_secs(5));

    for len in [8, 64, 512] {
        let words = generate_words(1, len);
        group.bench_with_input(BenchmarkId::new("store_identity", len), &words[0], |b, word| {
            let mut filter = AlphabetBloomFilter::lowercase_alphanumeric(IdentityHasher);
            b.iter(|| filter.store(black_box(word)))
        });
    }

    let words = generate_words(1000, 16);
    group.throughput(Throughput::Elements(1000));
    group.bench_function("query_sha256_1000", |b| {
        let mut filter = AlphabetBloomFilter::lowercase_alphanumeric(Sha256Hasher);
        for word in &words[..10] {
            let _ = filter.store(word);
        }
        b.iter(|| {
            words
                .iter()
                .filter(|word| filter.definitely_not_in_set(black_box(word)) == Ok(true))
                .count()
        })
    });

    group.finish();
}

fn bench_binary_integer_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("charset-bloom/binary-integer");

    let numbers = generate_integers(1000);
    group.throughput(Throughput::Elements(1000));
    group.bench_function("store_and_query_1000", |b| {
        b.iter(|| {
            let mut filter = BinaryIntegerBloomFilter::new();
            for number in &numbers[..100] {
                let _ = filter.store(number);
            }
            numbers
                .iter()
                .filter(|number| filter.definitely_not_in_set(black_box(number)) == Ok(true))
                .count()
        })
    });

    group.finish();
}

fn bench_multi_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("charset-bloom/multi-strategy");

    let words = generate_words(1000, 16);
    let mut filter = FilterConfigBuilder::new()
        .alphabet(Alphabet::FullAscii, HasherKind::Identity)
        .alphabet(Alphabet::LowercaseAlphanumeric, HasherKind::Sha256)
        .alphabet(Alphabet::Base64, HasherKind::Base64)
        .build()
        .and_then(|config| config.build_filter())
        .expect("benchmark config is valid");

    for word in &words[..50] {
        let _ = filter.store(word);
    }

    group.throughput(Throughput::Elements(1000));
    group.bench_function("query_three_members_1000", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|word| filter.definitely_not_in_set(black_box(word)) == Ok(true))
                .count()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_alphabet_filter,
    bench_binary_integer_filter,
    bench_multi_strategy
);
criterion_main!(benches);
