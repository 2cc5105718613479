use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net amount of one category across a user's ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBalance {
    pub category_id: i64,
    pub category_name: String,
    pub balance: Decimal,
}

/// Summary statistics recomputed from the ledger on every read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_balance: Decimal,
    pub total_income: Decimal,
    /// Sum of negative amounts, so never positive
    pub total_expense: Decimal,
    pub balance_by_category: Vec<CategoryBalance>,
}
