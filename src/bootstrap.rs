use std::sync::Arc;
use std::time::Duration;

use crate::api::AppState;
use crate::config::Config;
use crate::domain::ports::HolidaySource;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::providers::HolidayApiClient;
use crate::services::{CachedHolidaySource, CalculationService};

pub fn build_app_state(db: Database, config: &Config) -> AppState {
    let store: Arc<dyn HolidaySource> = Arc::new(db.clone());
    let remote: Arc<dyn HolidaySource> =
        Arc::new(HolidayApiClient::new(config.holiday_api_url.clone()));

    let holiday_source: Arc<dyn HolidaySource> = Arc::new(CachedHolidaySource::new(
        store,
        remote,
        Duration::from_secs(config.holiday_cache_ttl_seconds),
    ));
    tracing::info!(
        "Holiday cache initialized ({}s TTL over {})",
        config.holiday_cache_ttl_seconds,
        config.holiday_api_url
    );

    let calculation_service = Arc::new(CalculationService::new(holiday_source.clone()));
    tracing::info!("Calculation service initialized");

    AppState {
        calculation_service,
        holiday_source,
    }
}
