// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Coverpress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a submission. Embedded in the stored file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 32 lowercase hex digits, no dashes.
    pub fn simple(&self) -> String {
        self.0.simple().to_string()
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six metadata fields printed on the cover page.
///
/// Every field is optional at the request boundary. Use [`MetadataFields::normalized`]
/// to obtain the empty-string form the renderer works with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFields {
    pub student_name: Option<String>,
    pub student_id: Option<String>,
    pub subject_name: Option<String>,
    pub subject_code: Option<String>,
    pub instructor_name: Option<String>,
    pub section_number: Option<String>,
}

impl MetadataFields {
    /// Copy with every absent or empty value replaced by `Some("")` and the
    /// subject name sanitized.
    pub fn normalized(&self) -> Self {
        let norm = |v: &Option<String>| Some(v.clone().unwrap_or_default());
        Self {
            student_name: norm(&self.student_name),
            student_id: norm(&self.student_id),
            subject_name: Some(crate::sanitize(
                self.subject_name.as_deref().unwrap_or_default(),
            )),
            subject_code: norm(&self.subject_code),
            instructor_name: norm(&self.instructor_name),
            section_number: norm(&self.section_number),
        }
    }

    pub fn student_name(&self) -> &str {
        self.student_name.as_deref().unwrap_or_default()
    }

    pub fn student_id(&self) -> &str {
        self.student_id.as_deref().unwrap_or_default()
    }

    pub fn subject_name(&self) -> &str {
        self.subject_name.as_deref().unwrap_or_default()
    }

    pub fn subject_code(&self) -> &str {
        self.subject_code.as_deref().unwrap_or_default()
    }

    pub fn instructor_name(&self) -> &str {
        self.instructor_name.as_deref().unwrap_or_default()
    }

    pub fn section_number(&self) -> &str {
        self.section_number.as_deref().unwrap_or_default()
    }
}

/// Physical page size in PDF points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_pt: f64,
    pub height_pt: f64,
}

impl PageSize {
    /// ISO A4 in points.
    pub const A4: PageSize = PageSize {
        width_pt: 595.28,
        height_pt: 841.89,
    };

    pub fn aspect_ratio(&self) -> f64 {
        self.width_pt / self.height_pt
    }

    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f64, f64) {
        (pt_to_mm(self.width_pt), pt_to_mm(self.height_pt))
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Convert PDF points to millimetres.
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * 25.4 / 72.0
}

/// One uploaded image as received at the request boundary.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Original file name, used only for diagnostics.
    pub name: String,
    /// Encoded image bytes (PNG, JPEG, ...).
    pub bytes: Vec<u8>,
}

/// Everything the pipeline needs for one request.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    pub fields: MetadataFields,
    pub images: Vec<UploadedImage>,
}

/// What the caller gets back after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: SubmissionId,
    /// Name the document was stored under.
    pub file_name: String,
    /// Retrieval reference returned by the store.
    #[serde(rename = "FileUrl")]
    pub reference: String,
    pub page_count: usize,
    pub bytes_len: usize,
    /// SHA-256 of the stored document, lowercase hex.
    pub sha256: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_fills_missing_fields() {
        let fields = MetadataFields {
            student_name: Some("Lina".into()),
            ..Default::default()
        };
        let norm = fields.normalized();
        assert_eq!(norm.student_name(), "Lina");
        assert_eq!(norm.student_id, Some(String::new()));
        assert_eq!(norm.section_number, Some(String::new()));
        // Caller's value is untouched.
        assert_eq!(fields.student_id, None);
    }

    #[test]
    fn normalized_sanitizes_subject_only() {
        let fields = MetadataFields {
            subject_name: Some("Math (101)".into()),
            instructor_name: Some("Dr. (Sami)".into()),
            ..Default::default()
        };
        let norm = fields.normalized();
        assert_eq!(norm.subject_name(), "Math 101");
        assert_eq!(norm.instructor_name(), "Dr. (Sami)");
    }

    #[test]
    fn a4_aspect_ratio() {
        let ratio = PageSize::A4.aspect_ratio();
        assert!((ratio - 0.7071).abs() < 1e-3);
        let (w, h) = PageSize::A4.dimensions_mm();
        assert!((w - 210.0).abs() < 0.1);
        assert!((h - 297.0).abs() < 0.1);
    }

    #[test]
    fn submission_id_simple_has_no_dashes() {
        let id = SubmissionId::new();
        let simple = id.simple();
        assert_eq!(simple.len(), 32);
        assert!(!simple.contains('-'));
    }
}
