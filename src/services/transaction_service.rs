//! CRUD and summary over the transaction store.

use std::sync::Arc;

use crate::domain::{Summary, Transaction, TransactionFields, TransactionKind};
use crate::error::AppError;
use crate::store::TransactionStore;

use super::CreateTransactionResult;

#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Validate the required fields and persist a new transaction.
    pub async fn create(
        &self,
        fields: TransactionFields,
    ) -> Result<CreateTransactionResult, AppError> {
        fields.validate_required()?;

        let transaction = Transaction::create(fields);
        self.store.insert_transaction(&transaction).await?;

        tracing::info!(transaction_id = %transaction.id, "Transaction created");

        Ok(CreateTransactionResult { id: transaction.id })
    }

    pub async fn list(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.store.list_transactions().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Transaction, AppError> {
        self.store
            .get_transaction(id)
            .await?
            .ok_or_else(|| AppError::TransactionNotFound(id.to_string()))
    }

    /// Replace every field of the transaction. Nothing is validated: absent
    /// fields are stored as null.
    pub async fn update(&self, id: &str, fields: TransactionFields) -> Result<(), AppError> {
        let transaction = Transaction::with_id(id, fields);

        if self.store.update_transaction(&transaction).await? == 0 {
            return Err(AppError::TransactionNotFound(id.to_string()));
        }

        tracing::info!(transaction_id = %id, "Transaction updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.store.delete_transaction(id).await? == 0 {
            return Err(AppError::TransactionNotFound(id.to_string()));
        }

        tracing::info!(transaction_id = %id, "Transaction deleted");
        Ok(())
    }

    /// Total income, total expense and their difference.
    pub async fn summary(&self) -> Result<Summary, AppError> {
        let total_income = self
            .store
            .total_amount_by_type(TransactionKind::Income)
            .await?;
        let total_expense = self
            .store
            .total_amount_by_type(TransactionKind::Expense)
            .await?;

        Ok(Summary::new(total_income, total_expense))
    }
}
