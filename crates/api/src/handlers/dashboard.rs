//! Handler for the admin dashboard summary.

use axum::extract::State;
use axum::Json;
use hkv_db::models::dashboard::DashboardSummary;
use hkv_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}
