//! Port for persisted devolutiva history.

use async_trait::async_trait;

use crate::domain::devolutiva::DevolutivaData;
use crate::domain::foundation::{DevolutivaId, DomainError};

/// Stores finished analysis records, most recent first.
#[async_trait]
pub trait DevolutivaHistory: Send + Sync {
    /// Saves a record. Saving an id that already exists replaces the old
    /// record and moves it to the front.
    async fn save(&self, data: &DevolutivaData) -> Result<(), DomainError>;

    /// Looks up a record by id.
    async fn find(&self, id: &DevolutivaId) -> Result<Option<DevolutivaData>, DomainError>;

    /// Lists all records, most recent first.
    async fn list(&self) -> Result<Vec<DevolutivaData>, DomainError>;
}
