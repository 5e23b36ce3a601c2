// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// coverpress-remote — fetches the cover page's overlay graphics.
//
// Every fetch is bounded by a timeout and a size cap. Callers treat any
// error as "no graphic".

pub mod http;

pub use http::HttpOverlaySource;
