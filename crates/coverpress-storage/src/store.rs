// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document stores — a local directory container and an in-memory map.
//
// Both implement `DocumentStore`: store the bytes under the given name,
// overwrite an existing entry of the same name, and return the public
// reference `{base}/{percent-encoded name}`. The local store re-reads every
// file it writes and checks its SHA-256 against the input.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use coverpress_core::error::{CoverpressError, Result};
use coverpress_core::{DocumentStore, StorageConfig};
use tracing::{debug, info, instrument};

use crate::integrity::{hash_bytes, verify_hash};
use crate::naming::percent_encode;

/// Stores documents as files in one container directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.root.clone(), config.public_base_url.clone())
    }

    /// Container directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path a document with `file_name` is (or would be) stored at.
    pub fn path_for(&self, file_name: &str) -> Result<PathBuf> {
        check_name(file_name)?;
        Ok(self.root.join(file_name))
    }

    /// Read a stored document back.
    pub fn read(&self, file_name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(file_name)?;
        std::fs::read(&path).map_err(|err| {
            CoverpressError::Persistence(format!("failed to read {}: {}", path.display(), err))
        })
    }
}

impl DocumentStore for LocalStore {
    #[instrument(skip(self, bytes), fields(bytes_len = bytes.len()))]
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let path = self.path_for(file_name)?;

        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|err| {
                CoverpressError::Persistence(format!(
                    "failed to create container {}: {}",
                    self.root.display(),
                    err
                ))
            })?;
            info!(root = %self.root.display(), "Created document container");
        }

        // Write next to the target and rename so readers never see a partial file.
        let partial = self.root.join(format!(".{file_name}.partial"));
        std::fs::write(&partial, bytes).map_err(|err| {
            CoverpressError::Persistence(format!("failed to write {}: {}", partial.display(), err))
        })?;
        std::fs::rename(&partial, &path).map_err(|err| {
            let _ = std::fs::remove_file(&partial);
            CoverpressError::Persistence(format!("failed to move into {}: {}", path.display(), err))
        })?;
        verify_hash(&self.read(file_name)?, &hash_bytes(bytes))?;

        let reference = reference(&self.public_base_url, file_name);
        debug!(%reference, "Document stored");
        Ok(reference)
    }
}

/// Keeps documents in memory. Useful for tests and dry runs.
#[derive(Debug)]
pub struct MemoryStore {
    public_base_url: String,
    documents: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_base_url("memory://coverpress")
    }

    pub fn with_base_url(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            documents: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.lock().get(file_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        check_name(file_name)?;
        self.lock().insert(file_name.to_string(), bytes.to_vec());
        Ok(reference(&self.public_base_url, file_name))
    }
}

fn reference(base: &str, file_name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), percent_encode(file_name))
}

/// Names must be a single, non-empty path component.
fn check_name(file_name: &str) -> Result<()> {
    if file_name.is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains(['/', '\\'])
    {
        return Err(CoverpressError::Persistence(format!(
            "invalid document name: {file_name:?}"
        )));
    }
    Ok(())
}
