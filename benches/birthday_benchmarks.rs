//! Performance benchmarks for the upcoming-birthday query.
//!
//! The query is a linear scan over the book, so these benchmarks measure:
//! - Books of increasing size
//! - Windows of increasing width
//! - The plain name lookup for comparison

use assistant_bot::models::{AddressBook, Record};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Build a book of `size` contacts with birthdays spread across the year.
fn build_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();

    for i in 0..size {
        let mut record = Record::new(format!("Contact {:06}", i)).unwrap();
        record.add_phone(format!("{:010}", i)).unwrap();

        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        let year = 1950 + (i % 60);
        record
            .add_birthday(&format!("{:02}.{:02}.{}", day, month, year))
            .unwrap();

        book.add_record(record);
    }

    book
}

/// Benchmark the scan over books of increasing size.
fn bench_scan_book_sizes(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

    let mut group = c.benchmark_group("upcoming_birthdays_book_size");

    for size in [10, 100, 1_000, 10_000].iter() {
        let book = build_book(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| book.upcoming_birthdays_from(today, 7));
        });
    }

    group.finish();
}

/// Benchmark the scan with windows of increasing width.
fn bench_scan_window_widths(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let book = build_book(1_000);

    let mut group = c.benchmark_group("upcoming_birthdays_window");

    for window in [7u32, 30, 90, 365].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(window), window, |b, &window| {
            b.iter(|| book.upcoming_birthdays_from(today, window));
        });
    }

    group.finish();
}

/// Benchmark the keyed lookup for comparison with the scan.
fn bench_find_by_name(c: &mut Criterion) {
    let book = build_book(10_000);

    c.bench_function("find_by_name_10k", |b| {
        b.iter(|| book.find("Contact 005000"));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_scan_book_sizes,
        bench_scan_window_widths,
        bench_find_by_name
}

criterion_main!(benches);
