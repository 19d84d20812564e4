// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed token store.
//!
//! Tokens are kept as a single JSON document and replaced with a
//! write-then-rename so a crash never leaves a half-written pair.

use std::path::PathBuf;

use crate::error::{ApiError, Result};
use crate::store::{StoredTokens, TokenStore};

/// Token store backed by a JSON file under the local data directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store rooted at the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<StoredTokens>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ApiError::Storage(format!("read {}: {}", self.path.display(), e))),
        };

        let tokens = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Storage(format!("parse {}: {}", self.path.display(), e)))?;

        Ok(Some(tokens))
    }

    async fn save(&self, tokens: &StoredTokens) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Storage(format!("create {}: {}", parent.display(), e)))?;
        }

        let bytes = serde_json::to_vec_pretty(tokens)
            .map_err(|e| ApiError::Storage(format!("serialize tokens: {}", e)))?;

        // Write to a sibling temp file and rename over the target so the
        // pair is replaced atomically.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| ApiError::Storage(format!("write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ApiError::Storage(format!("rename {}: {}", self.path.display(), e)))?;

        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Storage(format!(
                "remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
