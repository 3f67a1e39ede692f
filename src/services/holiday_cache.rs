use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::domain::entities::Holiday;
use crate::domain::errors::DomainResult;
use crate::domain::ports::HolidaySource;

/// TTL freshness policy over the persisted store and the remote feed,
/// itself a `HolidaySource`.
///
/// The freshness check is deliberately not serialized: concurrent requests
/// hitting a stale window may each fetch the feed and upsert the same rows.
pub struct CachedHolidaySource {
    store: Arc<dyn HolidaySource>,
    remote: Arc<dyn HolidaySource>,
    ttl: Duration,
    last_refresh: RwLock<Option<Instant>>,
}

impl CachedHolidaySource {
    pub fn new(store: Arc<dyn HolidaySource>, remote: Arc<dyn HolidaySource>, ttl: Duration) -> Self {
        Self {
            store,
            remote,
            ttl,
            last_refresh: RwLock::new(None),
        }
    }

    async fn is_fresh(&self) -> bool {
        match *self.last_refresh.read().await {
            Some(at) => at.elapsed() < self.ttl,
            None => false,
        }
    }

    async fn mark_refreshed(&self) {
        *self.last_refresh.write().await = Some(Instant::now());
    }

    /// Fire-and-forget write of freshly fetched holidays; failures are
    /// logged, never surfaced to the request that triggered the refresh.
    fn persist_in_background(&self, holidays: Vec<Holiday>) {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            match store.save(&holidays).await {
                Ok(()) => {
                    tracing::debug!(count = holidays.len(), "Persisted refreshed holidays")
                }
                Err(e) => tracing::warn!("Failed to persist refreshed holidays: {}", e),
            }
        });
    }

    async fn stale_fallback(&self) -> Vec<Holiday> {
        match self.store.find_all().await {
            Ok(holidays) if !holidays.is_empty() => {
                tracing::info!(count = holidays.len(), "Serving stale holidays from the store");
                holidays
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::warn!("Holiday store fallback failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl HolidaySource for CachedHolidaySource {
    async fn find_all(&self) -> DomainResult<Vec<Holiday>> {
        if self.is_fresh().await {
            match self.store.find_all().await {
                Ok(holidays) if !holidays.is_empty() => {
                    tracing::debug!(count = holidays.len(), "Holiday cache hit");
                    return Ok(holidays);
                }
                Ok(_) => tracing::debug!("Holiday store empty despite fresh cache"),
                Err(e) => tracing::warn!("Holiday store read failed: {}", e),
            }
        }

        match self.remote.find_all().await {
            Ok(holidays) if !holidays.is_empty() => {
                self.mark_refreshed().await;
                self.persist_in_background(holidays.clone());
                Ok(holidays)
            }
            Ok(holidays) => {
                tracing::warn!("Holiday feed returned no dates");
                Ok(holidays)
            }
            Err(e) => {
                tracing::warn!("Holiday feed refresh failed: {}", e);
                Ok(self.stale_fallback().await)
            }
        }
    }

    async fn save(&self, holidays: &[Holiday]) -> DomainResult<()> {
        self.store.save(holidays).await?;
        self.mark_refreshed().await;
        Ok(())
    }
}
