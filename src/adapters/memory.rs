//! In-memory history adapter for tests and demos.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::devolutiva::DevolutivaData;
use crate::domain::foundation::{DevolutivaId, DomainError};
use crate::ports::DevolutivaHistory;

/// History backed by a `RwLock<Vec<_>>`, most recent first.
#[derive(Default)]
pub struct InMemoryHistory {
    records: RwLock<Vec<DevolutivaData>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().expect("history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DevolutivaHistory for InMemoryHistory {
    async fn save(&self, data: &DevolutivaData) -> Result<(), DomainError> {
        let mut records = self.records.write().expect("history lock poisoned");
        records.retain(|record| record.id != data.id);
        records.insert(0, data.clone());
        Ok(())
    }

    async fn find(&self, id: &DevolutivaId) -> Result<Option<DevolutivaData>, DomainError> {
        let records = self.records.read().expect("history lock poisoned");
        Ok(records.iter().find(|record| record.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<DevolutivaData>, DomainError> {
        let records = self.records.read().expect("history lock poisoned");
        Ok(records.clone())
    }
}
