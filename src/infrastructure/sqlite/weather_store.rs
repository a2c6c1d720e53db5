use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::forecast::SubregionForecast;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::weather_store::{StoreStats, WeatherStore};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;

pub struct SqliteWeatherStore {
    conn: Mutex<Connection>,
}

impl SqliteWeatherStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_snapshot(row: &rusqlite::Row) -> Result<Snapshot, rusqlite::Error> {
        let region: String = row.get(0)?;
        let payload: String = row.get(1)?;
        let fetched_str: String = row.get(2)?;
        let created_str: String = row.get(3)?;

        let subregions: Vec<SubregionForecast> = serde_json::from_str(&payload).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(Snapshot {
            region,
            subregions,
            fetched_at: parse_ts(&fetched_str),
            created_at: parse_ts(&created_str),
        })
    }
}

fn parse_ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

impl WeatherStore for SqliteWeatherStore {
    fn list_favorites(&self) -> Result<Vec<Favorite>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT name, code, created_at FROM favorites ORDER BY created_at ASC, rowid ASC")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let favorites = stmt
            .query_map([], |row| {
                let created: String = row.get(2)?;
                Ok(Favorite {
                    name: row.get(0)?,
                    code: row.get(1)?,
                    created_at: parse_ts(&created),
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(favorites)
    }

    fn add_favorite(&self, name: &str, code: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        // OR IGNORE keeps the original row (and its insertion position) on duplicates.
        conn.execute(
            "INSERT OR IGNORE INTO favorites (name, code, created_at) VALUES (?1, ?2, ?3)",
            params![name, code, Utc::now().to_rfc3339()],
        )
        .map_err(|e| DomainError::Database(format!("failed to add favorite: {e}")))?;
        Ok(())
    }

    fn remove_favorite(&self, name: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute("DELETE FROM favorites WHERE name = ?1", params![name])
            .map_err(|e| DomainError::Database(format!("failed to remove favorite: {e}")))?;
        Ok(())
    }

    fn save_snapshot(
        &self,
        region: &str,
        subregions: &[SubregionForecast],
        fetched_at: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let payload = serde_json::to_string(subregions)
            .map_err(|e| DomainError::Parse(format!("snapshot payload: {e}")))?;
        let fetched = fetched_at.unwrap_or_else(Utc::now);
        conn.execute(
            "INSERT INTO history (region, payload, fetched_at, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                region,
                payload,
                fetched.to_rfc3339(),
                Utc::now().to_rfc3339()
            ],
        )
        .map_err(|e| DomainError::Database(format!("failed to save snapshot: {e}")))?;
        Ok(())
    }

    fn latest_snapshot(&self, region: &str) -> Result<Option<Snapshot>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT region, payload, fetched_at, created_at FROM history
                 WHERE region = ?1 ORDER BY fetched_at DESC, id DESC LIMIT 1",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![region], Self::row_to_snapshot)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn history(&self, region: &str, limit: usize) -> Result<Vec<Snapshot>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT region, payload, fetched_at, created_at FROM history
                 WHERE region = ?1 ORDER BY fetched_at DESC, id DESC LIMIT ?2",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let snapshots = stmt
            .query_map(params![region, limit as i64], Self::row_to_snapshot)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(snapshots)
    }

    fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let deleted = conn
            .execute(
                "DELETE FROM history WHERE fetched_at < ?1",
                params![cutoff.to_rfc3339()],
            )
            .map_err(|e| DomainError::Database(format!("failed to purge history: {e}")))?;
        Ok(deleted)
    }

    fn stats(&self) -> Result<StoreStats, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let favorite_count: usize = conn
            .query_row("SELECT COUNT(*) FROM favorites", [], |r| r.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let snapshot_count: usize = conn
            .query_row("SELECT COUNT(*) FROM history", [], |r| r.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn
            .prepare("SELECT region, COUNT(*) FROM history GROUP BY region ORDER BY region")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let per_region: Vec<(String, usize)> = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, usize>(1)?))
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();

        let (oldest, newest): (Option<String>, Option<String>) = conn
            .query_row(
                "SELECT MIN(fetched_at), MAX(fetched_at) FROM history",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(StoreStats {
            favorite_count,
            snapshot_count,
            per_region,
            oldest_fetch: oldest.as_deref().map(parse_ts),
            newest_fetch: newest.as_deref().map(parse_ts),
        })
    }
}
