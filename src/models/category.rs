use serde::{Deserialize, Serialize};

/// Spending/income classification label, seeded by migration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
