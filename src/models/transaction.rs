use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AMOUNT_SCALE, ERR_AMOUNT_OUT_OF_RANGE, ERR_DESCRIPTION_TOO_SHORT, MAX_AMOUNT_CENTS,
    MIN_DESCRIPTION_CHARS,
};
use crate::error::{AppError, Result};
use crate::models::Category;

/// Ledger entry joined with its category, as returned by the API
///
/// Positive amounts are income, negative amounts are expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    pub description: String,
    pub user_id: i64,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: Category,
}

/// Row shape of the ledger query (transactions joined with categories)
#[derive(Debug, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: i64,
    pub amount_cents: i64,
    pub description: String,
    pub user_id: i64,
    pub category_id: i64,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TransactionRow> for Transaction {
    fn from(row: TransactionRow) -> Self {
        Self {
            id: row.id,
            amount: cents_to_amount(row.amount_cents),
            description: row.description,
            user_id: row.user_id,
            category_id: row.category_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

/// A validated transaction ready to be written to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount_cents: i64,
    pub description: String,
    pub category_id: i64,
}

impl NewTransaction {
    /// Validate raw input
    ///
    /// The amount keeps the caller's sign and is rounded to cents.
    pub fn validate(amount: Decimal, description: String, category_id: i64) -> Result<Self> {
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(AppError::InvalidInput(ERR_DESCRIPTION_TOO_SHORT.to_string()));
        }

        let amount_cents = amount_to_cents(amount)
            .ok_or_else(|| AppError::InvalidInput(ERR_AMOUNT_OUT_OF_RANGE.to_string()))?;

        Ok(Self {
            amount_cents,
            description,
            category_id,
        })
    }
}

/// Round an amount to cents, rejecting anything a decimal(10,2) cannot hold
pub fn amount_to_cents(amount: Decimal) -> Option<i64> {
    let cents = amount
        .round_dp(AMOUNT_SCALE)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()?;
    (cents.abs() <= MAX_AMOUNT_CENTS).then_some(cents)
}

pub fn cents_to_amount(cents: i64) -> Decimal {
    Decimal::new(cents, AMOUNT_SCALE)
}
