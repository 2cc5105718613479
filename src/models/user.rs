use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

/// User row as stored in the `users` table
///
/// Carries the password hash, so it never leaves the store layer
/// except through [`UserRecord::into_public`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Strip the password hash
    pub fn into_public(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// User model for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity embedded in a session token and echoed back on login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&UserRecord> for UserIdentity {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

impl User {
    /// A name must contain at least one non-whitespace character
    pub fn validate_name(name: &str) -> bool {
        !name.trim().is_empty()
    }

    /// Validate email address syntax
    pub fn validate_email(email: &str) -> bool {
        EmailAddress::is_valid(email.trim())
    }

    /// Passwords only need to be present; strength is left to the client
    pub fn validate_password(password: &str) -> bool {
        !password.is_empty()
    }
}
