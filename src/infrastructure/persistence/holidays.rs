use chrono::{NaiveDate, Utc};
use sqlx::Row;

use super::Database;
use crate::domain::entities::holiday::Holiday;
use crate::domain::errors::DomainResult;
use crate::domain::ports::HolidaySource;

impl Database {
    pub async fn list_holidays(&self) -> Result<Vec<Holiday>, sqlx::Error> {
        let rows = sqlx::query("SELECT date, name FROM holidays ORDER BY date")
            .fetch_all(&self.pool)
            .await?;

        let mut holidays = Vec::with_capacity(rows.len());
        for row in rows {
            let date: String = row.try_get("date")?;
            let name: String = row.try_get("name")?;
            match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
                Ok(date) => holidays.push(Holiday::new(date, name)),
                Err(e) => tracing::warn!("Skipping stored holiday with bad date {}: {}", date, e),
            }
        }
        Ok(holidays)
    }

    /// One row per date, later writes win.
    pub async fn upsert_holidays(&self, holidays: &[Holiday]) -> Result<(), sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        for holiday in holidays {
            sqlx::query(
                "INSERT INTO holidays (date, name, created_at, updated_at)
                 VALUES (?, ?, ?, ?)
                 ON CONFLICT(date) DO UPDATE SET name = excluded.name, updated_at = excluded.updated_at",
            )
            .bind(holiday.date.format("%Y-%m-%d").to_string())
            .bind(&holiday.name)
            .bind(&now)
            .bind(&now)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl HolidaySource for Database {
    async fn find_all(&self) -> DomainResult<Vec<Holiday>> {
        Ok(self.list_holidays().await?)
    }

    async fn save(&self, holidays: &[Holiday]) -> DomainResult<()> {
        Ok(self.upsert_holidays(holidays).await?)
    }
}
