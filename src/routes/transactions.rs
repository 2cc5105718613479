use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::models::{NewTransaction, Transaction};
use crate::routes::validation::{integer, AppJson};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Signed amount: positive for income, negative for expense
    pub amount: Decimal,
    pub description: String,
    #[serde(rename = "categoryId", deserialize_with = "integer")]
    pub category_id: i64,
}

/// List the caller's transactions, newest first
pub async fn list_transactions(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Transaction>>> {
    Ok(Json(state.ledger.list_by_user(user.id()).await?))
}

/// Record a transaction for the caller
pub async fn create_transaction(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>)> {
    let new = NewTransaction::validate(payload.amount, payload.description, payload.category_id)?;
    let transaction = state.ledger.create(user.id(), &new).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
