//! Storage services. Each one owns a clone of the pool it was built with.

pub mod categories;
pub mod transactions;
pub mod users;

pub use categories::CategoryCatalog;
pub use transactions::Ledger;
pub use users::UserStore;
