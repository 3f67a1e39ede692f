pub mod calculation_service;
pub mod calendar;
pub mod holiday_cache;

pub use calculation_service::{CalculationRequest, CalculationService};
pub use holiday_cache::CachedHolidaySource;
