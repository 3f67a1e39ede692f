pub mod calculation;
pub mod holidays;
pub mod middleware;

pub use middleware::*;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::domain::ports::HolidaySource;
use crate::services::CalculationService;

#[derive(Clone)]
pub struct AppState {
    pub calculation_service: Arc<CalculationService>,
    pub holiday_source: Arc<dyn HolidaySource>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/working-date", get(calculation::get_working_date))
        .route("/api/holidays", get(holidays::list_holidays))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Habil Working-Date Service"
}

async fn health_handler() -> &'static str {
    "OK"
}
