use crate::domain::entities::holiday::Holiday;
use crate::domain::errors::DomainResult;

/// Where holiday dates come from. Implemented by the persisted store, the
/// remote feed, and the cache strategy composing the two behind a TTL.
#[async_trait::async_trait]
pub trait HolidaySource: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Holiday>>;

    /// Upsert-by-date write. Later writes win; sources without storage
    /// treat this as a no-op.
    async fn save(&self, holidays: &[Holiday]) -> DomainResult<()>;
}
