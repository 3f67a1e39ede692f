use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::middleware::error::ApiResult;
use crate::api::AppState;
use crate::domain::entities::Holiday;

#[derive(Debug, Serialize)]
pub struct HolidayListResponse {
    pub holidays: Vec<Holiday>,
    pub count: usize,
}

/// GET /api/holidays
pub async fn list_holidays(State(state): State<AppState>) -> ApiResult<Json<HolidayListResponse>> {
    let holidays = state.holiday_source.find_all().await?;
    let count = holidays.len();
    Ok(Json(HolidayListResponse { holidays, count }))
}
