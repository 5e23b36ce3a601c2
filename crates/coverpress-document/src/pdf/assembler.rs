// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document assembler — build one PDF from raster images using `printpdf` 0.8,
// one image per page, each fitted to the page without distortion.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use coverpress_core::error::{CoverpressError, Result};
use coverpress_core::PageSize;
use image::DynamicImage;
use printpdf::{
    ImageCompression, ImageOptimizationOptions, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions,
    PdfWarnMsg, Pt, RawImage, RawImageData, RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument, warn};

use crate::image::processor::{ImageProcessor, rgb8_raw};
use crate::pdf::layout::{Placement, fit_and_center};

/// Embedding resolution. At 72 dpi one image pixel is one point before scaling.
const EMBED_DPI: f32 = 72.0;

/// Encoder settings: full resolution, colour kept, Flate only.
///
/// printpdf's defaults downscale anything over 2 MB of raw pixels and may pick
/// JPEG, so every field is pinned here.
fn save_options() -> PdfSaveOptions {
    PdfSaveOptions {
        image_optimization: Some(ImageOptimizationOptions {
            quality: None,
            max_image_size: None,
            dither_greyscale: None,
            convert_to_greyscale: Some(false),
            auto_optimize: Some(false),
            format: Some(ImageCompression::Flate),
        }),
        ..PdfSaveOptions::default()
    }
}

/// Accumulates pages for one output document.
///
/// Pages are appended strictly in call order and never reordered or removed.
/// [`DocumentAssembler::serialize`] consumes the assembler, so a finished
/// document cannot be modified.
pub struct DocumentAssembler {
    doc: PdfDocument,
    pages: Vec<PdfPage>,
    placements: Vec<Placement>,
    page_size: PageSize,
}

impl DocumentAssembler {
    /// Create an empty A4 document.
    pub fn new() -> Self {
        Self::with_page_size(PageSize::A4)
    }

    /// Create an empty document whose pages all have `page_size`.
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self::titled("Coverpress Document", page_size)
    }

    /// Create an empty document with `title` in its metadata.
    pub fn titled(title: &str, page_size: PageSize) -> Self {
        Self {
            doc: PdfDocument::new(title),
            pages: Vec::new(),
            placements: Vec::new(),
            page_size,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Placement of every page so far, in page order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Decode `bytes` and append the image as a new page.
    #[instrument(skip(self, bytes), fields(bytes_len = bytes.len()))]
    pub fn add_image_bytes(&mut self, bytes: &[u8]) -> Result<Placement> {
        let processor = ImageProcessor::from_bytes(bytes)?;
        self.place(processor.as_dynamic())
    }

    /// Append `image` as a new page, fitted and centred.
    pub fn add_image(&mut self, image: &DynamicImage) -> Result<Placement> {
        self.place(image)
    }

    fn place(&mut self, image: &DynamicImage) -> Result<Placement> {
        let placement = fit_and_center(image.width(), image.height(), self.page_size)?;

        // RGB8 raw pixels keep the page lossless.
        let (width, height, pixels) = rgb8_raw(image);
        let raw = RawImage {
            pixels: RawImageData::U8(pixels),
            width: width as usize,
            height: height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = self.doc.add_image(&raw);

        // Native size at EMBED_DPI is width x height points.
        let scale_x = (placement.width / f64::from(width)) as f32;
        let scale_y = (placement.height / f64::from(height)) as f32;

        // PDF origin is bottom-left; centring makes the offset symmetric.
        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(placement.offset_x as f32)),
                translate_y: Some(Pt(placement.offset_y as f32)),
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(EMBED_DPI),
                rotate: None,
            },
        }];

        let (page_w, page_h) = self.page_dimensions();
        self.pages.push(PdfPage::new(page_w, page_h, ops));
        self.placements.push(placement);

        debug!(
            page = self.pages.len(),
            pixel_width = width,
            pixel_height = height,
            offset_x = placement.offset_x,
            offset_y = placement.offset_y,
            scaled_width = placement.width,
            scaled_height = placement.height,
            "Image placed on page"
        );
        Ok(placement)
    }

    /// Encode the finished document.
    ///
    /// Fails with [`CoverpressError::Serialization`] when there is nothing to
    /// encode or the encoder produced no output.
    #[instrument(skip(self), fields(pages = self.pages.len()))]
    pub fn serialize(self) -> Result<Vec<u8>> {
        let Self { mut doc, pages, .. } = self;
        if pages.is_empty() {
            return Err(CoverpressError::Serialization(
                "document has no pages".into(),
            ));
        }

        let page_count = pages.len();
        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&save_options(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "PDF encoder reported warnings");
        }
        if output.is_empty() {
            return Err(CoverpressError::Serialization(
                "PDF encoder produced no output".into(),
            ));
        }

        info!(page_count, bytes = output.len(), "Document serialized");
        Ok(output)
    }

    /// Page dimensions in printpdf's Mm units.
    fn page_dimensions(&self) -> (Mm, Mm) {
        let (width, height) = self.page_size.dimensions_mm();
        (Mm(width as f32), Mm(height as f32))
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}
