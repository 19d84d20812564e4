// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state: the in-memory token pair plus its durable store.
//!
//! The session is an explicit, injectable object rather than process-wide
//! static state, so tests can run with isolated fake sessions. Both tokens
//! are installed together and cleared together; `is_logged_in` holds
//! exactly when an access token is present.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::store::{StoredTokens, TokenStore};

/// Shared session handle.
pub type SharedSession = Arc<Session>;

/// The client's authentication session.
pub struct Session {
    store: Arc<dyn TokenStore>,
    /// In-memory copy of the persisted pair.
    tokens: Mutex<Option<StoredTokens>>,
    /// Serializes refresh attempts so at most one is in flight.
    refresh_gate: tokio::sync::Mutex<()>,
    /// Bumped on every install/clear; lets a queued refresher detect that
    /// the winner already replaced the tokens while it waited on the gate.
    generation: AtomicU64,
}

impl Session {
    /// Create a session backed by the given store.
    pub fn new(store: Arc<dyn TokenStore>) -> SharedSession {
        Arc::new(Self {
            store,
            tokens: Mutex::new(None),
            refresh_gate: tokio::sync::Mutex::new(()),
            generation: AtomicU64::new(0),
        })
    }

    /// Load any persisted pair into memory.
    ///
    /// Call once at startup; a missing file just means logged out.
    pub async fn init(&self) -> Result<()> {
        let loaded = self.store.load().await?;
        if loaded.is_some() {
            tracing::debug!("Restored persisted session");
        }
        *self.tokens.lock().expect("session lock") = loaded;
        Ok(())
    }

    /// Whether an access token is currently held.
    pub fn is_logged_in(&self) -> bool {
        self.tokens.lock().expect("session lock").is_some()
    }

    /// Current access token, if logged in.
    pub fn access_token(&self) -> Option<String> {
        self.tokens
            .lock()
            .expect("session lock")
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    /// Current refresh token, if logged in.
    pub fn refresh_token(&self) -> Option<String> {
        self.tokens
            .lock()
            .expect("session lock")
            .as_ref()
            .map(|t| t.refresh_token.clone())
    }

    /// Install a new token pair in memory and persist it.
    ///
    /// The storage write completes before this returns, so a subsequent
    /// `load` observes the new pair.
    pub async fn install(&self, tokens: StoredTokens) -> Result<()> {
        self.store.save(&tokens).await?;
        *self.tokens.lock().expect("session lock") = Some(tokens);
        self.generation.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Drop the pair from memory and storage.
    pub async fn clear(&self) -> Result<()> {
        self.store.clear().await?;
        *self.tokens.lock().expect("session lock") = None;
        self.generation.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Monotonic counter of token installs/clears.
    pub(crate) fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Gate serializing refresh attempts.
    pub(crate) fn refresh_gate(&self) -> &tokio::sync::Mutex<()> {
        &self.refresh_gate
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}
