use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use tokio::sync::Mutex;

use habil::domain::entities::Holiday;
use habil::domain::errors::{DomainError, DomainResult};
use habil::domain::ports::HolidaySource;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn holiday(y: i32, m: u32, d: u32) -> Holiday {
    Holiday::new(ymd(y, m, d), "Festivo")
}

fn source_failure() -> DomainError {
    DomainError::Database(sqlx::Error::PoolClosed)
}

/// In-memory stand-in for the persisted store, with call counters and
/// upsert-by-date semantics.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<NaiveDate, String>>,
    pub find_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    fail_reads: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub async fn seed(&self, holidays: &[Holiday]) {
        let mut rows = self.rows.lock().await;
        for h in holidays {
            rows.insert(h.date, h.name.clone());
        }
    }

    pub async fn snapshot(&self) -> Vec<Holiday> {
        self.rows
            .lock()
            .await
            .iter()
            .map(|(date, name)| Holiday::new(*date, name.clone()))
            .collect()
    }

    pub fn finds(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HolidaySource for MemoryStore {
    async fn find_all(&self) -> DomainResult<Vec<Holiday>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(source_failure());
        }
        Ok(self.snapshot().await)
    }

    async fn save(&self, holidays: &[Holiday]) -> DomainResult<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.seed(holidays).await;
        Ok(())
    }
}

/// Remote feed stand-in returning a fixed list, or failing every call.
pub struct StaticRemote {
    holidays: Vec<Holiday>,
    fail: bool,
    pub calls: AtomicUsize,
}

impl StaticRemote {
    pub fn with(holidays: Vec<Holiday>) -> Self {
        Self {
            holidays,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            holidays: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HolidaySource for StaticRemote {
    async fn find_all(&self) -> DomainResult<Vec<Holiday>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(source_failure());
        }
        Ok(self.holidays.clone())
    }

    async fn save(&self, _holidays: &[Holiday]) -> DomainResult<()> {
        Ok(())
    }
}
