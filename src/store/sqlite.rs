//! SQLite-backed store
//!
//! Expects the `users` and `transactions` tables to exist already; see
//! [`crate::db::check_schema`].

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{PasswordHash, Transaction, TransactionKind, User};

use super::{StoreError, TransactionStore, UserStore};

/// Store over a single long-lived SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row: Option<(String, String, String)> =
            sqlx::query_as("SELECT id, username, password FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, username, password)| User {
            id,
            username,
            password: PasswordHash::new_unchecked(password),
        }))
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO users (id, username, password) VALUES (?, ?, ?)")
            .bind(&user.id)
            .bind(&user.username)
            .bind(user.password.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TransactionStore for SqliteStore {
    async fn insert_transaction(&self, transaction: &Transaction) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO transactions (id, type, category, amount, date, description)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&transaction.id)
        .bind(&transaction.transaction_type)
        .bind(&transaction.category)
        .bind(transaction.amount)
        .bind(&transaction.date)
        .bind(&transaction.description)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        // Whole-number amounts are stored as INTEGER under INTEGER or NUMERIC
        // column affinity; cast so they decode into `f64`.
        let rows = sqlx::query_as::<_, Transaction>(
            "SELECT id, type, category, CAST(amount AS REAL) AS amount, date, description FROM transactions",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>, StoreError> {
        let row = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, type, category, CAST(amount AS REAL) AS amount, date, description
            FROM transactions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_transaction(&self, transaction: &Transaction) -> Result<u64, StoreError> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE transactions
            SET type = ?, category = ?, amount = ?, date = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&transaction.transaction_type)
        .bind(&transaction.category)
        .bind(transaction.amount)
        .bind(&transaction.date)
        .bind(&transaction.description)
        .bind(&transaction.id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected)
    }

    async fn delete_transaction(&self, id: &str) -> Result<u64, StoreError> {
        let rows_affected = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn total_amount_by_type(&self, kind: TransactionKind) -> Result<f64, StoreError> {
        // TOTAL() is always a float and yields 0.0 for an empty set, unlike SUM()
        let total: f64 = sqlx::query_scalar("SELECT TOTAL(amount) FROM transactions WHERE type = ?")
            .bind(kind.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
