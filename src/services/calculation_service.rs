use std::sync::Arc;

use crate::domain::entities::{HolidaySet, WorkingMoment};
use crate::domain::errors::DomainResult;
use crate::domain::ports::HolidaySource;
use crate::services::calendar;

/// Input for one working-date calculation. Counts are applied in order:
/// snap to a valid starting point, then days, then hours.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub days: u32,
    pub hours: u32,
    pub start_instant: Option<String>,
}

/// Use-case layer: fetches the holiday snapshot once per request and
/// drives the calendar rules over it.
pub struct CalculationService {
    holidays: Arc<dyn HolidaySource>,
}

impl CalculationService {
    pub fn new(holidays: Arc<dyn HolidaySource>) -> Self {
        Self { holidays }
    }

    /// Resolves the request to a UTC ISO-8601 instant. Holiday lookup
    /// trouble degrades to an empty set; only a malformed start instant
    /// surfaces as an error.
    pub async fn calculate(&self, request: CalculationRequest) -> DomainResult<String> {
        let snapshot = match self.holidays.find_all().await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Holiday lookup failed, proceeding without holidays: {}", e);
                Vec::new()
            }
        };
        let holidays = HolidaySet::new(&snapshot);

        let start = match request.start_instant.as_deref() {
            Some(raw) => WorkingMoment::from_utc(raw)?,
            None => WorkingMoment::now(),
        };

        let snapped = calendar::snap_to_working_moment(start, &holidays);
        let after_days = calendar::add_working_days(snapped, request.days, &holidays);
        let landed = calendar::add_working_hours(after_days, request.hours, &holidays);
        let result = landed.to_utc_iso8601();

        tracing::debug!(
            "Calculated {} working day(s) and {} working hour(s) from {}: {}",
            request.days,
            request.hours,
            start.to_utc_iso8601(),
            result
        );

        Ok(result)
    }
}
