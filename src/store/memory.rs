//! In-memory token store for tests (offline mode).

use std::sync::Mutex;

use crate::error::Result;
use crate::store::{StoredTokens, TokenStore};

/// Token store that never touches disk.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<StoredTokens>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<StoredTokens>> {
        Ok(self.tokens.lock().expect("token store lock").clone())
    }

    async fn save(&self, tokens: &StoredTokens) -> Result<()> {
        *self.tokens.lock().expect("token store lock") = Some(tokens.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.tokens.lock().expect("token store lock") = None;
        Ok(())
    }
}
