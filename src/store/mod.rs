//! Local token persistence layer.

pub mod file;
pub mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The persisted session token pair.
///
/// Both tokens are always written and cleared together; there is no state
/// where only one of them is present on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTokens {
    /// Short-lived bearer token for API calls
    pub access_token: String,
    /// Long-lived token exchanged for a new pair on expiry
    pub refresh_token: String,
}

/// Durable key-value storage for the session token pair.
///
/// Implementations must make `save` visible to any subsequent `load`
/// (last write wins; no transactional guarantee beyond that).
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Load the stored pair, or `None` if no session is persisted.
    async fn load(&self) -> Result<Option<StoredTokens>>;

    /// Persist the pair, replacing any previous one.
    async fn save(&self, tokens: &StoredTokens) -> Result<()>;

    /// Remove the persisted pair.
    async fn clear(&self) -> Result<()>;
}
