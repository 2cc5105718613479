use crate::db::Db;
use crate::error::Result;
use crate::models::Category;

/// Read-only view of the seeded `categories` table
#[derive(Clone)]
pub struct CategoryCatalog {
    db: Db,
}

impl CategoryCatalog {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&self.db)
                .await?;

        Ok(categories)
    }
}
