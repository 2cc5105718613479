use chrono::Utc;

use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::{NewTransaction, Transaction, TransactionRow};

const SELECT_WITH_CATEGORY: &str = "SELECT t.id, t.amount_cents, t.description, t.user_id, \
     t.category_id, c.name AS category_name, t.created_at, t.updated_at \
     FROM transactions t JOIN categories c ON c.id = t.category_id";

/// Append-only transaction ledger
#[derive(Clone)]
pub struct Ledger {
    db: Db,
}

impl Ledger {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Record a transaction for `user_id`
    ///
    /// A category id with no matching row fails with
    /// [`AppError::UnknownCategory`]; an owner that no longer exists fails
    /// with [`AppError::UserNotFound`].
    pub async fn create(&self, user_id: i64, new: &NewTransaction) -> Result<Transaction> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO transactions
                 (amount_cents, description, user_id, category_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(new.amount_cents)
        .bind(&new.description)
        .bind(user_id)
        .bind(new.category_id)
        .bind(now)
        .bind(now)
        .execute(&self.db)
        .await;

        let id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(e) => return Err(self.classify_insert_error(e, user_id, new.category_id).await),
        };

        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            "{SELECT_WITH_CATEGORY} WHERE t.id = ?"
        ))
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(user_id, transaction_id = id, "Transaction recorded");

        Ok(row.into())
    }

    /// Work out which referenced row a failed insert was missing
    async fn classify_insert_error(
        &self,
        err: sqlx::Error,
        user_id: i64,
        category_id: i64,
    ) -> AppError {
        if !matches!(err, sqlx::Error::Database(_)) {
            return AppError::Database(err);
        }

        match self.references_exist(user_id, category_id).await {
            Ok((false, _)) => {
                tracing::warn!(user_id, "Transaction rejected: owner no longer exists");
                AppError::UserNotFound
            }
            Ok((true, false)) => AppError::UnknownCategory,
            Ok((true, true)) => AppError::Database(err),
            Err(lookup) => lookup,
        }
    }

    async fn references_exist(&self, user_id: i64, category_id: i64) -> Result<(bool, bool)> {
        let exists: (bool, bool) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?),
                    EXISTS(SELECT 1 FROM categories WHERE id = ?)",
        )
        .bind(user_id)
        .bind(category_id)
        .fetch_one(&self.db)
        .await?;

        Ok(exists)
    }

    /// All transactions owned by `user_id`, most recent first
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(&format!(
            "{SELECT_WITH_CATEGORY} WHERE t.user_id = ? ORDER BY t.created_at DESC, t.id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }
}
