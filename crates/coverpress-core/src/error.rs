// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Coverpress.

use thiserror::Error;

/// Top-level error type for all Coverpress operations.
#[derive(Debug, Error)]
pub enum CoverpressError {
    // -- Request errors --
    #[error("invalid submission: {0}")]
    Validation(String),

    // -- Document errors --
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("invalid image dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("document serialization failed: {0}")]
    Serialization(String),

    #[error("font loading failed: {0}")]
    Font(String),

    // -- Storage / persistence --
    #[error("persistence failed: {0}")]
    Persistence(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to obtain an overlay graphic.
///
/// Never crosses the cover renderer: every variant means "draw without it".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch timed out after {0} ms")]
    Timeout(u64),

    #[error("remote returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("response exceeded {0} bytes")]
    TooLarge(u64),

    #[error("overlay could not be decoded: {0}")]
    Decode(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CoverpressError>;
