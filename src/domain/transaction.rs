//! Transaction records
//!
//! A transaction is a flat income or expense entry. Create validates that the
//! core fields are present; update is a full replace and validates nothing, so
//! stored rows may carry nulls in any column but `id`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{is_blank, DomainError};

/// The two transaction types that take part in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Value stored in the `type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Parse a stored `type` value. Anything other than the two known
    /// values is accepted by the store but belongs to neither kind.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// Client-supplied transaction fields, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFields {
    #[serde(rename = "type", default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionFields {
    pub fn new(
        transaction_type: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            transaction_type: Some(transaction_type.into()),
            category: Some(category.into()),
            amount: Some(amount),
            date: Some(date.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check that `type`, `category`, `amount` and `date` are present.
    pub fn validate_required(&self) -> Result<(), DomainError> {
        let mut missing = Vec::new();
        if is_blank(&self.transaction_type) {
            missing.push("type");
        }
        if is_blank(&self.category) {
            missing.push("category");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }
        if is_blank(&self.date) {
            missing.push("date");
        }

        match DomainError::missing(missing) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// A persisted transaction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub transaction_type: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl Transaction {
    /// Create a record with a freshly generated id
    pub fn create(fields: TransactionFields) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// Create a record that replaces the row with the given id
    pub fn with_id(id: impl Into<String>, fields: TransactionFields) -> Self {
        Self {
            id: id.into(),
            transaction_type: fields.transaction_type,
            category: fields.category,
            amount: fields.amount,
            date: fields.date,
            description: fields.description,
        }
    }

    /// The summary kind of this row, if its type is one of the known values
    pub fn kind(&self) -> Option<TransactionKind> {
        self.transaction_type.as_deref().and_then(TransactionKind::parse)
    }
}
