//! Transaction storage seam.
//! Handlers only see the trait; the in-memory implementation can be replaced
//! by a persistent backend without touching handler logic.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Transaction, TransitionError, TransitionEvent};
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("transaction {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(format!("Transaction {} not found", id)),
            StoreError::Transition(e) => AppError::Conflict(e.to_string()),
        }
    }
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Append a new transaction. Ids are caller-generated and assumed unique.
    async fn insert(&self, tx: Transaction) -> Result<Transaction, StoreError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Transaction, StoreError>;

    /// Every transaction in insertion order.
    async fn list_all(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Apply a lifecycle event to a stored transaction, stamping the event
    /// time. The read-modify-write must be atomic per id.
    async fn transition(
        &self,
        id: Uuid,
        event: TransitionEvent,
    ) -> Result<Transaction, StoreError>;
}
