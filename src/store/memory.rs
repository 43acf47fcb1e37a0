//! In-memory store used as a test double for the services.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Transaction, TransactionKind, User};

use super::{StoreError, TransactionStore, UserStore};

/// Users keyed by username, transactions in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, User>>,
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::Duplicate(format!("users.username = {}", user.username)));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for InMemoryStore {
    async fn insert_transaction(&self, transaction: &Transaction) -> Result<(), StoreError> {
        let mut transactions = self.transactions.write().await;
        if transactions.iter().any(|t| t.id == transaction.id) {
            return Err(StoreError::Duplicate(format!("transactions.id = {}", transaction.id)));
        }
        transactions.push(transaction.clone());
        Ok(())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.transactions.read().await.clone())
    }

    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>, StoreError> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn update_transaction(&self, transaction: &Transaction) -> Result<u64, StoreError> {
        let mut transactions = self.transactions.write().await;
        match transactions.iter_mut().find(|t| t.id == transaction.id) {
            Some(existing) => {
                *existing = transaction.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_transaction(&self, id: &str) -> Result<u64, StoreError> {
        let mut transactions = self.transactions.write().await;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        Ok((before - transactions.len()) as u64)
    }

    async fn total_amount_by_type(&self, kind: TransactionKind) -> Result<f64, StoreError> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| t.kind() == Some(kind))
            .filter_map(|t| t.amount)
            .sum())
    }
}
