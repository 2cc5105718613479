pub mod category;
pub mod dashboard;
pub mod transaction;
pub mod user;

pub use category::Category;
pub use dashboard::{CategoryBalance, DashboardSummary};
pub use transaction::{NewTransaction, Transaction, TransactionRow};
pub use user::{User, UserIdentity, UserRecord};
