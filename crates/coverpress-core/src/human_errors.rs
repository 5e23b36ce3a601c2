// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Caller-facing failure messages.
//
// Internally every error keeps its detail for the logs. Callers only ever see
// one of two opaque outcomes.

use crate::error::CoverpressError;

/// How a failed request is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The caller sent something unusable (e.g. no images).
    BadRequest,
    /// Anything that went wrong on our side.
    Internal,
}

impl FailureKind {
    pub fn of(err: &CoverpressError) -> Self {
        match err {
            CoverpressError::Validation(_) => FailureKind::BadRequest,
            CoverpressError::Decode(_)
            | CoverpressError::InvalidImage { .. }
            | CoverpressError::Serialization(_)
            | CoverpressError::Font(_)
            | CoverpressError::Persistence(_)
            | CoverpressError::Config(_)
            | CoverpressError::Io(_)
            | CoverpressError::Json(_) => FailureKind::Internal,
        }
    }

    /// HTTP-style status code for the outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            FailureKind::BadRequest => 400,
            FailureKind::Internal => 500,
        }
    }
}

/// A failure as shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Collapse an error into its caller-facing form.
pub fn public_failure(err: &CoverpressError) -> PublicFailure {
    let kind = FailureKind::of(err);
    let message = match err {
        // Validation messages are written for the caller already.
        CoverpressError::Validation(detail) => detail.clone(),
        _ => "internal server error".to_string(),
    };
    PublicFailure { kind, message }
}
