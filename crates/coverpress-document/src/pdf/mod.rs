// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — page placement, assembly, and read-back of finished documents.

pub mod assembler;
pub mod layout;
pub mod reader;

pub use assembler::DocumentAssembler;
pub use layout::{Placement, fit_and_center};
pub use reader::{PdfReader, page_count};
