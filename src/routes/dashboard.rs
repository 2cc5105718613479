use axum::{extract::State, Json};

use crate::auth::AuthUser;
use crate::dashboard::summarize;
use crate::error::Result;
use crate::models::DashboardSummary;
use crate::AppState;

/// Summary of the caller's ledger, recomputed on every request
pub async fn get_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<DashboardSummary>> {
    let transactions = state.ledger.list_by_user(user.id()).await?;
    Ok(Json(summarize(&transactions)))
}
