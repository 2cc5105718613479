use axum::{extract::State, Json};

use crate::auth::AuthUser;
use crate::error::Result;
use crate::models::Category;
use crate::AppState;

/// List every category
pub async fn list_categories(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.categories.list_all().await?))
}
