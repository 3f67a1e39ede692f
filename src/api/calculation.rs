use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::middleware::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::services::CalculationRequest;

#[derive(Debug, Deserialize)]
pub struct WorkingDateQuery {
    pub days: Option<u32>,
    pub hours: Option<u32>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkingDateResponse {
    pub date: String,
}

fn validate_query(query: &WorkingDateQuery) -> Result<(), ApiError> {
    if query.days.is_none() && query.hours.is_none() {
        return Err(ApiError::BadRequest(
            "At least one of days or hours is required".to_string(),
        ));
    }
    if let Some(date) = &query.date {
        if !date.ends_with('Z') {
            return Err(ApiError::BadRequest(
                "date must be a UTC instant ending in Z".to_string(),
            ));
        }
    }
    Ok(())
}

/// GET /api/working-date?days=&hours=&date=
pub async fn get_working_date(
    State(state): State<AppState>,
    Query(query): Query<WorkingDateQuery>,
) -> ApiResult<Json<WorkingDateResponse>> {
    validate_query(&query)?;

    let request = CalculationRequest {
        days: query.days.unwrap_or(0),
        hours: query.hours.unwrap_or(0),
        start_instant: query.date,
    };
    let date = state.calculation_service.calculate(request).await?;
    Ok(Json(WorkingDateResponse { date }))
}
