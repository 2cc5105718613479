//! Dashboard aggregation over a ledger snapshot.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{CategoryBalance, DashboardSummary, Transaction};

/// Fold a user's transactions into dashboard totals
///
/// Income is the sum of positive amounts, expense the sum of negative
/// amounts (kept negative). Categories appear once each, ordered by id,
/// and only when they have at least one transaction.
pub fn summarize(transactions: &[Transaction]) -> DashboardSummary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut by_category: BTreeMap<i64, CategoryBalance> = BTreeMap::new();

    for tx in transactions {
        if tx.amount > Decimal::ZERO {
            total_income += tx.amount;
        } else if tx.amount < Decimal::ZERO {
            total_expense += tx.amount;
        }

        by_category
            .entry(tx.category_id)
            .or_insert_with(|| CategoryBalance {
                category_id: tx.category_id,
                category_name: tx.category.name.clone(),
                balance: Decimal::ZERO,
            })
            .balance += tx.amount;
    }

    DashboardSummary {
        total_balance: total_income + total_expense,
        total_income,
        total_expense,
        balance_by_category: by_category.into_values().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionRow;
    use chrono::Utc;

    fn tx(id: i64, amount_cents: i64, category_id: i64, category_name: &str) -> Transaction {
        let now = Utc::now();
        Transaction::from(TransactionRow {
            id,
            amount_cents,
            description: format!("entry {id}"),
            user_id: 1,
            category_id,
            category_name: category_name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    #[test]
    fn test_empty_ledger() {
        let summary = summarize(&[]);

        assert_eq!(summary.total_balance, Decimal::ZERO);
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert!(summary.balance_by_category.is_empty());
    }

    #[test]
    fn test_salary_and_milk() {
        // Newest first, as the ledger returns them
        let ledger = [tx(2, -2_000, 2, "Groceries"), tx(1, 10_000, 1, "Salary")];

        let summary = summarize(&ledger);

        assert_eq!(summary.total_income, Decimal::new(100, 0));
        assert_eq!(summary.total_expense, Decimal::new(-20, 0));
        assert_eq!(summary.total_balance, Decimal::new(80, 0));
        assert_eq!(
            summary.balance_by_category,
            vec![
                CategoryBalance {
                    category_id: 1,
                    category_name: "Salary".to_string(),
                    balance: Decimal::new(100, 0),
                },
                CategoryBalance {
                    category_id: 2,
                    category_name: "Groceries".to_string(),
                    balance: Decimal::new(-20, 0),
                },
            ]
        );
    }

    #[test]
    fn test_mixed_signs_within_category() {
        let ledger = [
            tx(1, 5_000, 8, "Other"),
            tx(2, -1_250, 8, "Other"),
            tx(3, -750, 3, "Rent"),
            tx(4, 0, 3, "Rent"),
        ];

        let summary = summarize(&ledger);

        assert_eq!(summary.total_income, Decimal::new(5_000, 2));
        assert_eq!(summary.total_expense, Decimal::new(-2_000, 2));
        assert_eq!(summary.balance_by_category.len(), 2);
        assert_eq!(summary.balance_by_category[0].category_id, 3);
        assert_eq!(summary.balance_by_category[0].balance, Decimal::new(-750, 2));
        assert_eq!(summary.balance_by_category[1].category_id, 8);
        assert_eq!(summary.balance_by_category[1].balance, Decimal::new(3_750, 2));
    }

    #[test]
    fn test_totals_are_consistent_for_any_ledger() {
        // Deterministic pseudo-random ledgers
        let mut seed: i64 = 0x2545_F491;
        for size in 0..40 {
            let ledger: Vec<Transaction> = (0..size)
                .map(|i| {
                    seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                    let cents = (seed >> 33) % 2_000_000 - 1_000_000;
                    let category = (seed >> 20).rem_euclid(8) + 1;
                    tx(i, cents, category, "c")
                })
                .collect();

            let summary = summarize(&ledger);
            let by_category: Decimal = summary.balance_by_category.iter().map(|c| c.balance).sum();

            assert_eq!(
                summary.total_balance,
                summary.total_income + summary.total_expense
            );
            assert_eq!(by_category, summary.total_balance);
            assert!(summary.total_income >= Decimal::ZERO);
            assert!(summary.total_expense <= Decimal::ZERO);
        }
    }
}
