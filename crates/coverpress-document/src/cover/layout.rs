// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cover page geometry.
//
// Everything here is pure: the renderer asks for a list of text blocks and
// two overlay rectangles and paints them. Coordinates are canvas pixels with
// the origin at the top-left corner.

use coverpress_core::{CoverText, MetadataFields};
use image::Rgba;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1190;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 1684;

/// Height of every centred title band.
pub const TITLE_BAND_HEIGHT: f32 = 50.0;
pub const HEADING_Y: f32 = 50.0;
pub const INSTITUTION_Y: f32 = 260.0;
pub const TERM_Y: f32 = 310.0;
pub const ACADEMIC_YEAR_Y: f32 = 360.0;

pub const LOGO_SIZE: u32 = 120;
pub const LOGO_Y: u32 = 120;

/// Top of the first metadata row.
pub const DETAILS_Y: f32 = 440.0;
pub const DETAILS_ROW_HEIGHT: f32 = 40.0;
/// Share of the canvas width taken by the left column; the right column gets the rest.
pub const LEFT_COLUMN_RATIO: f32 = 0.39;
pub const RIGHT_COLUMN_RATIO: f32 = 0.61;
/// Gap kept clear at the page edge of each column.
pub const COLUMN_INSET: f32 = 50.0;

pub const WATERMARK_SIZE: u32 = 400;
/// Distance between the watermark's bottom edge and the canvas bottom.
pub const WATERMARK_BOTTOM_MARGIN: u32 = 50;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Floating-point rectangle used for text boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Integer pixel rectangle used for overlay graphics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Horizontal alignment inside a text box. Text is always centred vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush with the left edge.
    Near,
    Center,
    /// Flush with the right edge.
    Far,
}

/// Typeface role of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Large bold titles (28pt).
    Title,
    /// Secondary titles (20pt regular).
    Subtitle,
    /// Metadata rows (24pt bold).
    Field,
}

impl TextStyle {
    pub fn point_size(&self) -> f32 {
        match self {
            TextStyle::Title => 28.0,
            TextStyle::Subtitle => 20.0,
            TextStyle::Field => 24.0,
        }
    }

    /// Pixel height for the glyph rasteriser (points at 96 dpi).
    pub fn pixel_size(&self) -> f32 {
        self.point_size() * 96.0 / 72.0
    }

    pub fn is_bold(&self) -> bool {
        !matches!(self, TextStyle::Subtitle)
    }
}

/// One line of text with the box it is aligned in.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Logical (reading) order. The renderer converts to visual order.
    pub text: String,
    pub rect: Rect,
    pub align: Align,
    pub style: TextStyle,
    pub color: Rgba<u8>,
}

fn centered(text: &str, y: f32, style: TextStyle, color: Rgba<u8>) -> TextBlock {
    TextBlock {
        text: text.to_string(),
        rect: Rect::new(0.0, y, CANVAS_WIDTH as f32, TITLE_BAND_HEIGHT),
        align: Align::Center,
        style,
        color,
    }
}

/// Box of metadata row `row` (0-based) in the right-hand column.
pub fn right_column_rect(row: usize) -> Rect {
    let width = CANVAS_WIDTH as f32;
    Rect::new(
        LEFT_COLUMN_RATIO * width,
        DETAILS_Y + DETAILS_ROW_HEIGHT * row as f32,
        RIGHT_COLUMN_RATIO * width - COLUMN_INSET,
        DETAILS_ROW_HEIGHT,
    )
}

/// Box of metadata row `row` (0-based) in the left-hand column.
pub fn left_column_rect(row: usize) -> Rect {
    let width = CANVAS_WIDTH as f32;
    Rect::new(
        COLUMN_INSET,
        DETAILS_Y + DETAILS_ROW_HEIGHT * row as f32,
        LEFT_COLUMN_RATIO * width - COLUMN_INSET,
        DETAILS_ROW_HEIGHT,
    )
}

fn field(label: &str, value: &str, rect: Rect) -> TextBlock {
    TextBlock {
        text: format!("{label}{value}"),
        rect,
        align: Align::Far,
        style: TextStyle::Field,
        color: BLACK,
    }
}

/// All text on the cover, in drawing order.
///
/// `fields` should already be normalized; absent values render as empty.
pub fn plan_text(fields: &MetadataFields, text: &CoverText) -> Vec<TextBlock> {
    vec![
        centered(&text.heading, HEADING_Y, TextStyle::Title, BLACK),
        centered(&text.institution, INSTITUTION_Y, TextStyle::Title, BLACK),
        centered(&text.term, TERM_Y, TextStyle::Subtitle, RED),
        centered(&text.academic_year, ACADEMIC_YEAR_Y, TextStyle::Subtitle, BLACK),
        // Right column, read first in right-to-left order.
        field(&text.student_name_label, fields.student_name(), right_column_rect(0)),
        field(&text.subject_name_label, fields.subject_name(), right_column_rect(1)),
        field(&text.instructor_name_label, fields.instructor_name(), right_column_rect(2)),
        // Left column.
        field(&text.student_id_label, fields.student_id(), left_column_rect(0)),
        field(&text.subject_code_label, fields.subject_code(), left_column_rect(1)),
        field(&text.section_number_label, fields.section_number(), left_column_rect(2)),
    ]
}

/// Where the logo goes: horizontally centred under the heading.
pub fn logo_rect() -> PixelRect {
    PixelRect {
        x: (CANVAS_WIDTH - LOGO_SIZE) / 2,
        y: LOGO_Y,
        width: LOGO_SIZE,
        height: LOGO_SIZE,
    }
}

/// Where the watermark goes: horizontally centred, anchored near the bottom.
pub fn watermark_rect() -> PixelRect {
    PixelRect {
        x: (CANVAS_WIDTH - WATERMARK_SIZE) / 2,
        y: CANVAS_HEIGHT - WATERMARK_SIZE - WATERMARK_BOTTOM_MARGIN,
        width: WATERMARK_SIZE,
        height: WATERMARK_SIZE,
    }
}

/// Left x coordinate for a line `text_width` pixels wide in `rect`.
pub fn aligned_x(rect: &Rect, text_width: f32, align: Align) -> f32 {
    match align {
        Align::Near => rect.x,
        Align::Center => rect.x + (rect.width - text_width) / 2.0,
        Align::Far => rect.right() - text_width,
    }
}

/// Top y coordinate for a line `text_height` pixels tall, centred in `rect`.
pub fn centered_y(rect: &Rect, text_height: f32) -> f32 {
    rect.y + (rect.height - text_height) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> MetadataFields {
        MetadataFields {
            student_name: Some("Lina".into()),
            student_id: Some("0330".into()),
            subject_name: Some("Math 101".into()),
            subject_code: Some("M101".into()),
            instructor_name: Some("Sami".into()),
            section_number: Some("4".into()),
        }
        .normalized()
    }

    #[test]
    fn columns_split_39_61() {
        let right = right_column_rect(0);
        let left = left_column_rect(0);
        assert!((right.x - 464.1).abs() < 0.01);
        assert!((right.width - (725.9 - 50.0)).abs() < 0.01);
        assert_eq!(left.x, 50.0);
        assert!((left.right() - 464.1).abs() < 0.01);
        // Right column ends 50px before the canvas edge.
        assert!((right.right() - (1190.0 - 50.0)).abs() < 0.01);
    }

    #[test]
    fn rows_step_by_forty() {
        for row in 0..3 {
            assert_eq!(right_column_rect(row).y, 440.0 + 40.0 * row as f32);
            assert_eq!(left_column_rect(row).height, 40.0);
        }
    }

    #[test]
    fn plan_has_titles_then_six_fields() {
        let text = CoverText::default();
        let blocks = plan_text(&sample_fields(), &text);
        assert_eq!(blocks.len(), 10);
        assert_eq!(blocks[0].text, text.heading);
        assert_eq!(blocks[2].color, RED);
        assert!(blocks[4..].iter().all(|b| b.align == Align::Far));
        assert_eq!(blocks[4].text, format!("{}Lina", text.student_name_label));
        assert_eq!(blocks[5].text, format!("{}Math 101", text.subject_name_label));
        assert_eq!(blocks[6].text, format!("{}Sami", text.instructor_name_label));
        assert_eq!(blocks[7].text, format!("{}0330", text.student_id_label));
        assert_eq!(blocks[8].text, format!("{}M101", text.subject_code_label));
        assert_eq!(blocks[9].text, format!("{}4", text.section_number_label));
    }

    #[test]
    fn empty_fields_render_bare_labels() {
        let text = CoverText::default();
        let blocks = plan_text(&MetadataFields::default().normalized(), &text);
        assert_eq!(blocks[4].text, text.student_name_label);
        assert_eq!(blocks[9].text, text.section_number_label);
    }

    #[test]
    fn overlay_rects() {
        assert_eq!(
            logo_rect(),
            PixelRect { x: 535, y: 120, width: 120, height: 120 }
        );
        assert_eq!(
            watermark_rect(),
            PixelRect { x: 395, y: 1234, width: 400, height: 400 }
        );
    }

    #[test]
    fn alignment_math() {
        let rect = Rect::new(100.0, 0.0, 200.0, 40.0);
        assert_eq!(aligned_x(&rect, 50.0, Align::Near), 100.0);
        assert_eq!(aligned_x(&rect, 50.0, Align::Center), 175.0);
        assert_eq!(aligned_x(&rect, 50.0, Align::Far), 250.0);
        assert_eq!(centered_y(&rect, 20.0), 10.0);
    }

    #[test]
    fn pixel_sizes() {
        assert!((TextStyle::Field.pixel_size() - 32.0).abs() < 1e-4);
        assert!(TextStyle::Title.is_bold());
        assert!(!TextStyle::Subtitle.is_bold());
    }
}
