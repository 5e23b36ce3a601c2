// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode, resize, opacity and raw pixel export for images
// placed on the cover page or embedded as PDF pages. Operates on in-memory
// images using the `image` crate.

use image::{DynamicImage, ImageFormat, RgbaImage};
use coverpress_core::error::CoverpressError;
use tracing::{debug, instrument};

/// Image processing pipeline operating on a single in-memory image.
///
/// Each transformation consumes `self` and returns a new `ImageProcessor`
/// wrapping the result, enabling method chaining.
///
/// ```ignore
/// let logo = ImageProcessor::from_bytes(&bytes)?
///     .resize_exact(120, 120)
///     .with_opacity(0.2)
///     .into_rgba8();
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Create a processor from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, CoverpressError> {
        let img = image::load_from_memory(data).map_err(|err| {
            CoverpressError::Decode(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Consume the processor and return RGBA8 pixels.
    pub fn into_rgba8(self) -> RgbaImage {
        self.image.into_rgba8()
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Resize the image to exactly `width` x `height`, ignoring aspect ratio.
    /// Uses Lanczos3 filtering.
    pub fn resize_exact(self, width: u32, height: u32) -> Self {
        if self.image.width() == width && self.image.height() == height {
            return self;
        }
        let resized =
            self.image
                .resize_exact(width, height, image::imageops::FilterType::Lanczos3);
        Self { image: resized }
    }

    /// Multiply every pixel's alpha by `opacity` (clamped to 0.0..=1.0).
    ///
    /// An opacity of 1.0 leaves the image untouched.
    #[instrument(skip(self), fields(opacity))]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity >= 1.0 {
            return self;
        }

        let mut rgba = self.image.into_rgba8();
        for pixel in rgba.pixels_mut() {
            let alpha = f32::from(pixel.0[3]) * opacity;
            pixel.0[3] = alpha.round().clamp(0.0, 255.0) as u8;
        }
        debug!("Opacity applied");
        Self {
            image: DynamicImage::ImageRgba8(rgba),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, CoverpressError> {
        encode_to_format(&self.image, ImageFormat::Png)
    }
}

/// `(width, height, rgb_bytes)` of `image`, translucent pixels blended over white.
pub(crate) fn rgb8_raw(image: &DynamicImage) -> (u32, u32, Vec<u8>) {
    if !image.color().has_alpha() {
        let rgb = image.to_rgb8();
        let (w, h) = rgb.dimensions();
        return (w, h, rgb.into_raw());
    }

    let rgba = image.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut raw = Vec::with_capacity(w as usize * h as usize * 3);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let a = u32::from(a);
        let over_white = |c: u8| ((u32::from(c) * a + 255 * (255 - a) + 127) / 255) as u8;
        raw.extend_from_slice(&[over_white(r), over_white(g), over_white(b)]);
    }
    (w, h, raw)
}

/// Encode a `DynamicImage` into the specified format, returning the raw bytes.
fn encode_to_format(
    image: &DynamicImage,
    format: ImageFormat,
) -> Result<Vec<u8>, CoverpressError> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image.write_to(&mut cursor, format).map_err(|err| {
        CoverpressError::Serialization(format!("image encoding failed: {}", err))
    })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(w: u32, h: u32, px: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, px))
    }

    #[test]
    fn png_round_trip_keeps_dimensions() {
        let png = ImageProcessor::from_dynamic(solid(7, 3, Rgba([1, 2, 3, 255])))
            .to_png_bytes()
            .unwrap();
        let back = ImageProcessor::from_bytes(&png).unwrap();
        assert_eq!((back.width(), back.height()), (7, 3));
    }

    #[test]
    fn garbage_is_decode_error() {
        let result = ImageProcessor::from_bytes(b"definitely not an image");
        assert!(matches!(result, Err(CoverpressError::Decode(_))));
    }

    #[test]
    fn opacity_scales_alpha() {
        let img = ImageProcessor::from_dynamic(solid(2, 2, Rgba([10, 20, 30, 200])))
            .with_opacity(0.5)
            .into_rgba8();
        assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 100]);
    }

    #[test]
    fn full_opacity_is_noop() {
        let img = ImageProcessor::from_dynamic(solid(1, 1, Rgba([9, 9, 9, 77])))
            .with_opacity(1.0)
            .into_rgba8();
        assert_eq!(img.get_pixel(0, 0).0[3], 77);
    }

    #[test]
    fn resize_exact_ignores_ratio() {
        let img = ImageProcessor::from_dynamic(solid(40, 10, Rgba([0, 0, 0, 255])))
            .resize_exact(12, 12);
        assert_eq!((img.width(), img.height()), (12, 12));
    }

    #[test]
    fn raw_rgb_has_three_channels() {
        let (w, h, raw) = rgb8_raw(&solid(4, 5, Rgba([1, 2, 3, 255])));
        assert_eq!((w, h), (4, 5));
        assert_eq!(raw.len(), 4 * 5 * 3);
        assert_eq!(&raw[..3], &[1, 2, 3]);
    }

    #[test]
    fn transparent_pixels_flatten_to_white() {
        let (_, _, raw) = rgb8_raw(&solid(1, 1, Rgba([0, 0, 0, 0])));
        assert_eq!(raw, vec![255, 255, 255]);
    }
}
