//! FinPal Server Library
//!
//! Personal-finance REST API: users, categories, a per-user transaction
//! ledger and a dashboard summary derived from it.

pub mod auth;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use config::Config;
pub use db::{create_pool, run_migrations, Db};
pub use error::{AppError, Result};

use auth::TokenKeys;
use store::{CategoryCatalog, Ledger, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
    pub tokens: TokenKeys,
    pub users: UserStore,
    pub categories: CategoryCatalog,
    pub ledger: Ledger,
}

impl AppState {
    /// Wire every service to the given database handle
    pub fn new(db: Db, config: Config) -> Self {
        let tokens = TokenKeys::new(&config.jwt_secret, config.jwt_expires_in_secs);

        Self {
            users: UserStore::new(db.clone()),
            categories: CategoryCatalog::new(db.clone()),
            ledger: Ledger::new(db.clone()),
            tokens,
            db,
            config,
        }
    }
}
