// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// coverpress-document — Document processing for Coverpress.
//
// Renders the metadata cover page onto a fixed raster canvas, and assembles
// the cover plus uploaded images into one A4 PDF with each image fitted and
// centred on its own page.

pub mod cover;
pub mod image;
pub mod pdf;

// Re-export the primary structs so callers can use `coverpress_document::DocumentAssembler` etc.
pub use cover::fonts::CoverFonts;
pub use cover::renderer::{CanvasImage, CoverPageRenderer};
pub use self::image::processor::ImageProcessor;
pub use pdf::assembler::DocumentAssembler;
pub use pdf::layout::{Placement, fit_and_center};
pub use pdf::reader::{PdfReader, page_count};
