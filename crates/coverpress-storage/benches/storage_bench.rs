// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for document fingerprinting and naming in the
// coverpress-storage crate.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use coverpress_core::{CoverText, MetadataFields, SubmissionId};
use coverpress_storage::{document_file_name, hash_bytes, percent_encode};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// SHA-256 fingerprinting from a single small page up to a large scan bundle.
fn bench_integrity_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_bytes");

    for &size in &[10 * 1024, 1024 * 1024, 16 * 1024 * 1024] {
        let data = vec![0xABu8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| hash_bytes(black_box(data)));
        });
    }

    group.finish();
}

/// Build a stored file name and its URL-encoded reference segment.
fn bench_naming(c: &mut Criterion) {
    let text = CoverText::default();
    let fields = MetadataFields {
        student_name: Some("لينا أحمد".into()),
        subject_name: Some("الرياضيات (1)".into()),
        ..MetadataFields::default()
    }
    .normalized();
    let id = SubmissionId::new();

    c.bench_function("document_file_name + percent_encode", |b| {
        b.iter(|| {
            let name = document_file_name(&text, black_box(&fields), &id);
            black_box(percent_encode(&name));
        });
    });
}

criterion_group!(benches, bench_integrity_hash, bench_naming);
criterion_main!(benches);
