// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability traits for the collaborators the pipeline calls into.

use crate::error::{FetchError, Result};

/// Fetches overlay graphics (logo, watermark) by URL.
///
/// Implementations must bound every call in time. Any error is treated by the
/// renderer as "no graphic".
pub trait OverlaySource: Send + Sync {
    /// Return the raw encoded bytes behind `url`.
    fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError>;
}

/// Source that never has anything. Renders covers with text only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlays;

impl OverlaySource for NoOverlays {
    fn fetch(&self, _url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        Err(FetchError::Transport("overlays disabled".into()))
    }
}

/// Persists finished documents.
pub trait DocumentStore: Send + Sync {
    /// Store `bytes` under `file_name`, overwriting any existing entry, and
    /// return a reference the caller can use to retrieve it.
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String>;
}

impl<T: OverlaySource + ?Sized> OverlaySource for &T {
    fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        (**self).store(file_name, bytes)
    }
}

impl<T: OverlaySource + ?Sized> OverlaySource for std::sync::Arc<T> {
    fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: DocumentStore + ?Sized> DocumentStore for std::sync::Arc<T> {
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        (**self).store(file_name, bytes)
    }
}
