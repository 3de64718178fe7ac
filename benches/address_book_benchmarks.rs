//! Performance benchmarks for lookup paths.
//!
//! These benchmarks track how lookups scale with the number of entries:
//! - `find_phone` is a linear scan over a record's phones
//! - `find` is a hashed lookup by contact name

use address_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn phone_for(i: usize) -> String {
    format!("{:010}", i)
}

fn record_with_phones(count: usize) -> Record {
    let mut record = Record::new("Bench");
    for i in 0..count {
        record.add_phone(&phone_for(i)).unwrap();
    }
    record
}

fn book_with_records(count: usize) -> AddressBook {
    (0..count)
        .map(|i| Record::new(format!("Contact {}", i)))
        .collect()
}

/// Benchmark find_phone hitting the last phone in the list.
fn bench_find_phone(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_phone");

    for size in [10, 100, 1000] {
        let record = record_with_phones(size);
        let target = phone_for(size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| record.find_phone(black_box(&target)).is_some());
        });
    }

    group.finish();
}

/// Benchmark AddressBook::find by exact name.
fn bench_find_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_record");

    for size in [10, 1000, 100_000] {
        let book = book_with_records(size);
        let target = format!("Contact {}", size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| book.find(black_box(&target)).is_some());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_phone, bench_find_record);
criterion_main!(benches);
