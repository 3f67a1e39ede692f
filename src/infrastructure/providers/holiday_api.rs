use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;

use crate::domain::entities::holiday::Holiday;
use crate::domain::errors::DomainResult;
use crate::domain::ports::HolidaySource;

/// Name attached to feed dates; the feed carries none of its own.
const PLACEHOLDER_NAME: &str = "Festivo";

/// Read-only client for the remote holiday feed, a JSON array of
/// `YYYY-MM-DD` strings.
pub struct HolidayApiClient {
    client: Client,
    endpoint: String,
}

impl HolidayApiClient {
    pub fn new(endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");
        Self { client, endpoint }
    }
}

#[async_trait::async_trait]
impl HolidaySource for HolidayApiClient {
    async fn find_all(&self) -> DomainResult<Vec<Holiday>> {
        let dates: Vec<String> = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut holidays = Vec::with_capacity(dates.len());
        for raw in dates {
            match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => holidays.push(Holiday::new(date, PLACEHOLDER_NAME)),
                Err(e) => tracing::warn!("Dropping unparseable holiday date {:?}: {}", raw, e),
            }
        }
        tracing::debug!("Fetched {} holiday dates from the feed", holidays.len());
        Ok(holidays)
    }

    async fn save(&self, _holidays: &[Holiday]) -> DomainResult<()> {
        // The feed is read-only.
        tracing::debug!("Ignoring save on the read-only holiday feed");
        Ok(())
    }
}
