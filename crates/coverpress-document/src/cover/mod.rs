// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cover module — the generated first page: layout plan, right-to-left text
// ordering, font loading, and the raster renderer.

pub mod bidi;
pub mod fonts;
pub mod layout;
pub mod renderer;

pub use fonts::CoverFonts;
pub use layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
pub use renderer::{CanvasImage, CoverPageRenderer};
