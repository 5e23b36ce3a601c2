// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cover page renderer — paints titles, the metadata table, and the optional
// logo and watermark onto a fixed 1190x1684 canvas using `imageproc` and
// `ab_glyph`.
//
// Overlay graphics are best-effort: any fetch or decode failure is logged and
// the cover is drawn without that graphic.

use ab_glyph::PxScale;
use coverpress_core::error::{CoverpressError, FetchError};
use coverpress_core::{CoverConfig, MetadataFields, OverlaySource};
use image::{DynamicImage, RgbaImage, imageops};
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::{debug, info, instrument, warn};

use crate::cover::bidi::visual_order;
use crate::cover::fonts::CoverFonts;
use crate::cover::layout::{
    self, CANVAS_HEIGHT, CANVAS_WIDTH, PixelRect, TextBlock, WHITE, aligned_x, centered_y,
};
use crate::image::processor::ImageProcessor;

/// The rendered cover page.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasImage {
    image: RgbaImage,
}

impl CanvasImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_dynamic(self) -> DynamicImage {
        DynamicImage::ImageRgba8(self.image)
    }

    /// Encode as PNG, e.g. for previewing the cover on its own.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, CoverpressError> {
        ImageProcessor::from_dynamic(DynamicImage::ImageRgba8(self.image.clone())).to_png_bytes()
    }
}

/// Decoded overlay graphics for one cover.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    pub logo: Option<DynamicImage>,
    pub watermark: Option<DynamicImage>,
}

/// Renders cover pages.
///
/// Holds no per-request state; one renderer can serve any number of covers.
pub struct CoverPageRenderer<S> {
    config: CoverConfig,
    fonts: CoverFonts,
    source: S,
}

impl<S: OverlaySource> CoverPageRenderer<S> {
    pub fn new(config: CoverConfig, fonts: CoverFonts, source: S) -> Self {
        Self {
            config,
            fonts,
            source,
        }
    }

    pub fn config(&self) -> &CoverConfig {
        &self.config
    }

    /// Fetch the overlays and paint the cover for `fields`.
    ///
    /// Never fails: missing fields render as empty values and unavailable
    /// overlays are left out.
    #[instrument(skip_all)]
    pub fn render(&self, fields: &MetadataFields) -> CanvasImage {
        let overlays = self.fetch_overlays();
        self.paint(fields, overlays)
    }

    /// Fetch logo and watermark concurrently.
    pub fn fetch_overlays(&self) -> Overlays {
        std::thread::scope(|scope| {
            let logo = scope.spawn(|| self.fetch_overlay("logo", self.config.logo_url.as_deref()));
            let watermark =
                self.fetch_overlay("watermark", self.config.watermark_url.as_deref());
            let logo = logo.join().unwrap_or_else(|_| {
                warn!("Logo fetch thread panicked");
                None
            });
            Overlays { logo, watermark }
        })
    }

    fn fetch_overlay(&self, kind: &str, url: Option<&str>) -> Option<DynamicImage> {
        let url = url?;
        let result = self.source.fetch(url).and_then(|bytes| {
            let image = image::load_from_memory(&bytes)
                .map_err(|err| FetchError::Decode(err.to_string()))?;
            if image.width() == 0 || image.height() == 0 {
                return Err(FetchError::Decode("empty image".into()));
            }
            Ok(image)
        });

        match result {
            Ok(image) => {
                debug!(kind, width = image.width(), height = image.height(), "Overlay fetched");
                Some(image)
            }
            Err(err) => {
                warn!(kind, url, error = %err, "Overlay unavailable, drawing cover without it");
                None
            }
        }
    }

    /// Paint the cover with already-decoded overlays. Deterministic.
    pub fn paint(&self, fields: &MetadataFields, overlays: Overlays) -> CanvasImage {
        let fields = fields.normalized();
        let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, WHITE);

        let blocks = layout::plan_text(&fields, &self.config.text);
        let (heading, rest) = blocks.split_at(1);

        self.draw_blocks(&mut canvas, heading);
        if let Some(logo) = overlays.logo {
            draw_overlay(&mut canvas, logo, layout::logo_rect(), 1.0);
        }
        self.draw_blocks(&mut canvas, rest);
        if let Some(watermark) = overlays.watermark {
            draw_overlay(
                &mut canvas,
                watermark,
                layout::watermark_rect(),
                self.config.effective_opacity(),
            );
        }

        info!(
            width = canvas.width(),
            height = canvas.height(),
            "Cover page rendered"
        );
        CanvasImage { image: canvas }
    }

    fn draw_blocks(&self, canvas: &mut RgbaImage, blocks: &[TextBlock]) {
        for block in blocks {
            draw_block(canvas, &self.fonts, block);
        }
    }
}

fn draw_block(canvas: &mut RgbaImage, fonts: &CoverFonts, block: &TextBlock) {
    let visual = visual_order(&block.text);
    if visual.trim().is_empty() {
        return;
    }

    let font = if block.style.is_bold() {
        fonts.bold()
    } else {
        fonts.regular()
    };
    let scale = PxScale::from(block.style.pixel_size());
    let (text_w, text_h) = text_size(scale, font, &visual);

    let x = aligned_x(&block.rect, text_w as f32, block.align);
    let y = centered_y(&block.rect, text_h as f32);
    draw_text_mut(
        canvas,
        block.color,
        x.round() as i32,
        y.round() as i32,
        scale,
        font,
        &visual,
    );
}

fn draw_overlay(canvas: &mut RgbaImage, graphic: DynamicImage, rect: PixelRect, opacity: f32) {
    let tile = ImageProcessor::from_dynamic(graphic)
        .resize_exact(rect.width, rect.height)
        .with_opacity(opacity)
        .into_rgba8();
    imageops::overlay(canvas, &tile, i64::from(rect.x), i64::from(rect.y));
}
