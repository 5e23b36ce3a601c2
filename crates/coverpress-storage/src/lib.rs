// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! coverpress-storage — where finished documents go.
//!
//! Builds the stored file name from the submission metadata, persists the
//! bytes through a `DocumentStore` (local directory or in-memory), and
//! fingerprints every document with SHA-256 for the receipt.

pub mod integrity;
pub mod naming;
pub mod store;

pub use integrity::{hash_bytes, verify_hash};
pub use naming::{document_file_name, percent_encode};
pub use store::{LocalStore, MemoryStore};
