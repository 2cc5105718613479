use chrono::Utc;

use crate::db::{is_unique_violation, Db};
use crate::error::{AppError, Result};
use crate::models::UserRecord;

/// Credential store backed by the `users` table
///
/// The only component that reads password hashes.
#[derive(Clone)]
pub struct UserStore {
    db: Db,
}

impl UserStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a new user, failing with [`AppError::EmailTaken`] on a duplicate email
    ///
    /// The insert runs to completion (and commits) before the row is read back.
    pub async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<UserRecord> {
        let now = Utc::now();
        let id = sqlx::query(
            "INSERT INTO users (name, email, password, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::EmailTaken
            } else {
                AppError::Database(e)
            }
        })?
        .last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or(AppError::Database(sqlx::Error::RowNotFound))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password, created_at, updated_at
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password, created_at, updated_at
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(record)
    }
}
