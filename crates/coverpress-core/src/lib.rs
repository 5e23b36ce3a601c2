// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Coverpress — Core types, capability traits, configuration and error
// definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod sanitize;
pub mod traits;
pub mod types;

pub use config::{AppConfig, CoverConfig, CoverText, StorageConfig};
pub use error::{CoverpressError, FetchError};
pub use sanitize::{sanitize, sanitize_opt};
pub use traits::{DocumentStore, OverlaySource};
pub use types::*;
