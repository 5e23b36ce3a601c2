// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Submission flow — cover page plus uploaded images into one stored PDF.
//
// One request is handled start to finish on the calling thread. Nothing is
// persisted unless every image decoded and the serialized document re-reads
// with the expected page count.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use coverpress_core::error::{CoverpressError, Result};
use coverpress_core::{
    AppConfig, CoverConfig, DocumentStore, MetadataFields, OverlaySource, SubmissionId,
    SubmissionReceipt, SubmissionRequest,
};
use coverpress_document::{CanvasImage, CoverFonts, CoverPageRenderer, DocumentAssembler};
use coverpress_remote::HttpOverlaySource;
use coverpress_storage::{LocalStore, document_file_name, hash_bytes};
use tracing::{info, instrument, warn};

/// Message returned when a request carries no images.
pub const NO_IMAGES_MESSAGE: &str = "No image files uploaded.";

/// Handles submissions against one overlay source and one document store.
pub struct SubmissionService {
    renderer: CoverPageRenderer<Arc<dyn OverlaySource>>,
    store: Arc<dyn DocumentStore>,
}

impl SubmissionService {
    pub fn new(
        config: CoverConfig,
        fonts: CoverFonts,
        overlays: Arc<dyn OverlaySource>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            renderer: CoverPageRenderer::new(config, fonts, overlays),
            store,
        }
    }

    /// Production wiring: HTTP overlays, configured fonts, local container.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fonts = CoverFonts::resolve(
            config.cover.font_path.as_deref(),
            config.cover.bold_font_path.as_deref(),
        )?;
        let overlays: Arc<dyn OverlaySource> =
            Arc::new(HttpOverlaySource::from_config(&config.cover));
        let store: Arc<dyn DocumentStore> = Arc::new(LocalStore::from_config(&config.storage));
        Ok(Self::new(config.cover.clone(), fonts, overlays, store))
    }

    /// Render only the cover page, e.g. for previewing.
    pub fn render_cover(&self, fields: &MetadataFields) -> CanvasImage {
        self.renderer.render(&fields.normalized())
    }

    /// Build, verify, and store the document for one request.
    #[instrument(skip_all, fields(images = request.images.len()))]
    pub fn submit(&self, request: SubmissionRequest) -> Result<SubmissionReceipt> {
        if request.images.is_empty() {
            return Err(CoverpressError::Validation(NO_IMAGES_MESSAGE.into()));
        }
        let started = Instant::now();
        let fields = request.fields.normalized();

        let cover = self.renderer.render(&fields);
        let mut assembler = DocumentAssembler::new();
        assembler.add_image(&cover.into_dynamic())?;

        for upload in &request.images {
            assembler.add_image_bytes(&upload.bytes).map_err(|err| {
                warn!(name = %upload.name, error = %err, "Upload rejected");
                err
            })?;
        }

        let expected_pages = 1 + request.images.len();
        let bytes = assembler.serialize()?;
        let pages = coverpress_document::page_count(&bytes)?;
        if pages != expected_pages {
            return Err(CoverpressError::Serialization(format!(
                "document has {pages} pages, expected {expected_pages}"
            )));
        }

        let id = SubmissionId::new();
        let file_name = document_file_name(&self.renderer.config().text, &fields, &id);
        let reference = self.store.store(&file_name, &bytes).map_err(|err| match err {
            CoverpressError::Persistence(_) => err,
            other => CoverpressError::Persistence(other.to_string()),
        })?;

        let receipt = SubmissionReceipt {
            id,
            file_name,
            reference,
            page_count: pages,
            bytes_len: bytes.len(),
            sha256: hash_bytes(&bytes),
            created_at: Utc::now(),
        };
        info!(
            id = %receipt.id,
            pages,
            bytes = receipt.bytes_len,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Submission stored"
        );
        Ok(receipt)
    }
}
