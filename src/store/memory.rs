//! Process-local store. State lives for the lifetime of the process and is
//! discarded on restart, like the demo deployment this service fronts.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Transaction, TransitionEvent};

use super::{StoreError, TransactionStore};

/// Append-only vector behind an async lock. Reads scan linearly; fine at
/// demo scale, and insertion order doubles as the listing order.
#[derive(Default)]
pub struct InMemoryStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for InMemoryStore {
    async fn insert(&self, tx: Transaction) -> Result<Transaction, StoreError> {
        let mut transactions = self.transactions.write().await;
        transactions.push(tx.clone());
        Ok(tx)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Transaction, StoreError> {
        let transactions = self.transactions.read().await;
        transactions
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let transactions = self.transactions.read().await;
        Ok(transactions.clone())
    }

    async fn transition(
        &self,
        id: Uuid,
        event: TransitionEvent,
    ) -> Result<Transaction, StoreError> {
        let mut transactions = self.transactions.write().await;
        let tx = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        tx.apply(event, Utc::now())?;
        Ok(tx.clone())
    }
}
