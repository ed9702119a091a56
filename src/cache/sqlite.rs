use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::PathBuf;

use crate::paths;
use crate::quotes::DailyEntry;

/// Single-slot persistence for the daily quote.
///
/// The table holds at most one row (`slot = 0`); every write replaces it.
/// Day-based invalidation happens in [`DailyEntry::is_valid_for`], not here.
pub struct DailyCache {
    db_path: PathBuf,
}

impl DailyCache {
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir();

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Self::with_path(paths::daily_db_path())
    }

    pub(crate) fn with_path(db_path: PathBuf) -> Result<Self> {
        let cache = Self { db_path };
        cache.init_db()?;
        Ok(cache)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS daily_quote (
                slot INTEGER PRIMARY KEY CHECK (slot = 0),
                date_key TEXT NOT NULL,
                english TEXT NOT NULL,
                myanmar TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create daily_quote table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self) -> Result<Option<DailyEntry>> {
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT date_key, english, myanmar FROM daily_quote WHERE slot = 0")?;

        let entry = stmt
            .query_row([], |row| {
                Ok(DailyEntry {
                    date_key: row.get(0)?,
                    english: row.get(1)?,
                    myanmar: row.get(2)?,
                })
            })
            .optional()
            .context("Failed to read daily quote slot")?;

        Ok(entry)
    }

    pub fn put(&self, entry: &DailyEntry) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO daily_quote (slot, date_key, english, myanmar)
             VALUES (0, ?1, ?2, ?3)",
            params![entry.date_key, entry.english, entry.myanmar],
        )
        .context("Failed to write daily quote slot")?;

        Ok(())
    }
}
