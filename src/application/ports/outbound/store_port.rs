//! Character store port - the remote store the sheet is saved to and loaded from

use async_trait::async_trait;

use crate::domain::entities::{CharacterSheet, SkillAllocation};
use crate::domain::value_objects::AttributeSet;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("store returned status {0}")]
    Status(u16),
    #[error("malformed store response: {0}")]
    Malformed(String),
}

/// What the store handed back on load. Either field may be absent; a present
/// field replaces the corresponding local state wholesale.
#[derive(Debug, Clone, Default)]
pub struct StoredSheet {
    pub attributes: Option<AttributeSet>,
    pub skill_points: Option<SkillAllocation>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStorePort: Send + Sync {
    /// Persist the sheet. The returned value is the store's opaque
    /// acknowledgement, only ever logged.
    async fn save(&self, sheet: &CharacterSheet) -> Result<serde_json::Value, StoreError>;

    /// Fetch the stored sheet, with each recognized field extracted
    /// independently.
    async fn load(&self) -> Result<StoredSheet, StoreError>;
}
