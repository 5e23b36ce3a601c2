// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Aspect-fit-and-centre placement of a raster image on a fixed page.

use coverpress_core::PageSize;
use coverpress_core::error::{CoverpressError, Result};

/// Where an image lands on its page, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale a `pixel_width` x `pixel_height` image to the largest size that fits
/// `page` without distortion, then centre it.
///
/// Images wider than the page's aspect ratio span the full page width;
/// all others span the full page height. Zero-sized images are rejected.
pub fn fit_and_center(pixel_width: u32, pixel_height: u32, page: PageSize) -> Result<Placement> {
    if pixel_width == 0 || pixel_height == 0 {
        return Err(CoverpressError::InvalidImage {
            width: pixel_width,
            height: pixel_height,
        });
    }

    let ratio = f64::from(pixel_width) / f64::from(pixel_height);
    let (width, height) = if ratio > page.aspect_ratio() {
        (page.width_pt, page.width_pt / ratio)
    } else {
        (page.height_pt * ratio, page.height_pt)
    };

    Ok(Placement {
        offset_x: (page.width_pt - width) / 2.0,
        offset_y: (page.height_pt - height) / 2.0,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.01;

    #[test]
    fn landscape_fills_width() {
        let p = fit_and_center(2000, 1000, PageSize::A4).unwrap();
        assert!((p.width - 595.28).abs() < EPS);
        assert!((p.height - 297.64).abs() < EPS);
        assert!(p.offset_x.abs() < EPS);
        assert!((p.offset_y - 272.125).abs() < EPS);
    }

    #[test]
    fn portrait_fills_height() {
        let p = fit_and_center(1000, 2000, PageSize::A4).unwrap();
        assert!((p.height - 841.89).abs() < EPS);
        assert!((p.width - 420.945).abs() < EPS);
        assert!(p.offset_y.abs() < EPS);
        assert!((p.offset_x - 87.1675).abs() < EPS);
    }

    #[test]
    fn cover_canvas_fills_page_height() {
        // 1190/1684 is a hair narrower than A4.
        let p = fit_and_center(1190, 1684, PageSize::A4).unwrap();
        assert!((p.height - 841.89).abs() < EPS);
        assert!(p.width <= 595.28);
        assert!(p.offset_x >= 0.0);
    }

    #[test]
    fn square_is_centred_vertically() {
        let p = fit_and_center(500, 500, PageSize::A4).unwrap();
        assert!((p.width - 595.28).abs() < EPS);
        assert!((p.height - 595.28).abs() < EPS);
        assert!((p.offset_y - (841.89 - 595.28) / 2.0).abs() < EPS);
    }

    #[test]
    fn placement_stays_on_page_and_keeps_ratio() {
        for (w, h) in [(1, 1), (1, 10_000), (10_000, 1), (3024, 4032), (1920, 1080)] {
            let p = fit_and_center(w, h, PageSize::A4).unwrap();
            assert!(p.offset_x >= -1e-9 && p.offset_y >= -1e-9);
            assert!(p.offset_x + p.width <= 595.28 + 1e-9);
            assert!(p.offset_y + p.height <= 841.89 + 1e-9);
            let src = f64::from(w) / f64::from(h);
            assert!((p.width / p.height - src).abs() / src < 1e-9);
        }
    }

    #[test]
    fn zero_dimension_is_invalid() {
        assert!(matches!(
            fit_and_center(0, 100, PageSize::A4),
            Err(CoverpressError::InvalidImage { width: 0, height: 100 })
        ));
        assert!(fit_and_center(100, 0, PageSize::A4).is_err());
    }
}
