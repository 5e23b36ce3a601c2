// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — re-open finished documents with `lopdf` to check their page
// tree before they leave the pipeline.

use lopdf::{Document, Object, ObjectId};
use coverpress_core::error::CoverpressError;
use tracing::{debug, instrument};

/// Read-only view of a serialized PDF.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfReader {
    /// Parse PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, CoverpressError> {
        let document = Document::load_mem(data).map_err(|err| {
            CoverpressError::Serialization(format!("failed to re-read PDF: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// `(width, height)` in points of every page's MediaBox, in page order.
    ///
    /// Pages without a readable MediaBox are skipped.
    pub fn page_sizes(&self) -> Vec<(f64, f64)> {
        self.document
            .get_pages()
            .values()
            .filter_map(|id| media_box(&self.document, *id))
            .collect()
    }
}

/// Page count of serialized PDF bytes.
pub fn page_count(data: &[u8]) -> Result<usize, CoverpressError> {
    PdfReader::from_bytes(data).map(|reader| reader.page_count())
}

fn media_box(document: &Document, page_id: ObjectId) -> Option<(f64, f64)> {
    let page = document.get_object(page_id).ok()?.as_dict().ok()?;
    let rect = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if rect.len() != 4 {
        return None;
    }
    let coords: Vec<f64> = rect.iter().filter_map(number).collect();
    if coords.len() != 4 {
        return None;
    }
    Some((coords[2] - coords[0], coords[3] - coords[1]))
}

fn number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_serialization_error() {
        let result = PdfReader::from_bytes(b"%PDF-nope");
        assert!(matches!(result, Err(CoverpressError::Serialization(_))));
    }

    #[test]
    fn integer_and_real_numbers() {
        assert_eq!(number(&Object::Integer(3)), Some(3.0));
        assert_eq!(number(&Object::Real(1.5)), Some(1.5));
        assert_eq!(number(&Object::Null), None);
    }
}
