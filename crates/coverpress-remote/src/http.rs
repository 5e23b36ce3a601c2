// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP(S) overlay source built on a blocking `ureq` agent.
//
// `file://` URLs are read from disk so covers can be rendered offline with
// locally stored graphics.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use coverpress_core::error::FetchError;
use coverpress_core::{CoverConfig, OverlaySource};
use tracing::{debug, instrument};

/// Fetches overlay graphics over HTTP(S) or from `file://` paths.
pub struct HttpOverlaySource {
    agent: ureq::Agent,
    timeout: Duration,
    max_bytes: u64,
}

impl HttpOverlaySource {
    /// Create a source whose every request completes or fails within `timeout`.
    pub fn new(timeout: Duration, max_bytes: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("coverpress/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            timeout,
            max_bytes,
        }
    }

    /// Build from the cover settings.
    pub fn from_config(config: &CoverConfig) -> Self {
        Self::new(
            Duration::from_secs(config.fetch_timeout_secs.max(1)),
            config.max_overlay_bytes,
        )
    }

    fn fetch_http(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(transport)) => {
                return Err(if is_timeout(&transport) {
                    FetchError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    FetchError::Transport(transport.to_string())
                });
            }
        };

        if let Some(declared) = response
            .header("Content-Length")
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            if declared > self.max_bytes {
                return Err(FetchError::TooLarge(self.max_bytes));
            }
        }

        self.read_capped(response.into_reader())
    }

    fn fetch_file(&self, path: &Path) -> Result<Vec<u8>, FetchError> {
        let file = std::fs::File::open(path)
            .map_err(|err| FetchError::Transport(format!("{}: {}", path.display(), err)))?;
        self.read_capped(file)
    }

    /// Read at most `max_bytes`; one byte more means the body is too large.
    fn read_capped(&self, reader: impl Read) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        reader
            .take(self.max_bytes + 1)
            .read_to_end(&mut body)
            .map_err(|err| {
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                ) {
                    FetchError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    FetchError::Transport(err.to_string())
                }
            })?;
        if body.len() as u64 > self.max_bytes {
            return Err(FetchError::TooLarge(self.max_bytes));
        }
        Ok(body)
    }
}

impl OverlaySource for HttpOverlaySource {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let body = if let Some(path) = url.strip_prefix("file://") {
            self.fetch_file(Path::new(path))?
        } else if url.starts_with("http://") || url.starts_with("https://") {
            self.fetch_http(url)?
        } else {
            return Err(FetchError::Transport(format!("unsupported URL scheme: {url}")));
        };
        debug!(bytes = body.len(), "Overlay downloaded");
        Ok(body)
    }
}

/// Whether a transport error was caused by the agent's timeout.
fn is_timeout(transport: &ureq::Transport) -> bool {
    let mut source = std::error::Error::source(transport);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            ) {
                return true;
            }
        }
        source = err.source();
    }
    transport.to_string().contains("timed out")
}
