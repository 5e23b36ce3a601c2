// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the coverpress-document crate: cover painting
// (no fonts, no network) and assembling a small multi-page document.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use coverpress_core::traits::NoOverlays;
use coverpress_core::{CoverConfig, MetadataFields};
use coverpress_document::{CoverFonts, CoverPageRenderer, DocumentAssembler};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Paint a cover with both overlays present (synthetic 200x200 graphics) and
/// the bundled fonts, so text rasterisation and the alpha-blend path are measured.
fn bench_cover_paint(c: &mut Criterion) {
    let fonts = CoverFonts::bundled().expect("bundled fonts");
    let renderer = CoverPageRenderer::new(CoverConfig::default(), fonts, NoOverlays);
    let graphic = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 200, Rgb([20, 80, 160])));
    let fields = MetadataFields::default();

    c.bench_function("cover_paint (overlays + text)", |b| {
        b.iter(|| {
            let overlays = coverpress_document::cover::renderer::Overlays {
                logo: Some(graphic.clone()),
                watermark: Some(graphic.clone()),
            };
            black_box(renderer.paint(black_box(&fields), overlays));
        });
    });
}

/// Assemble and serialize a three-page document from 300x400 images.
fn bench_assemble(c: &mut Criterion) {
    let page = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 400, Rgb([240, 240, 240])));

    c.bench_function("assemble 3 pages (300x400)", |b| {
        b.iter(|| {
            let mut assembler = DocumentAssembler::new();
            for _ in 0..3 {
                assembler.add_image(black_box(&page)).unwrap();
            }
            black_box(assembler.serialize().unwrap());
        });
    });
}

criterion_group!(benches, bench_cover_paint, bench_assemble);
criterion_main!(benches);
