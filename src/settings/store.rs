//! SQLite-backed settings store
//!
//! Upserts follow the same `ON CONFLICT ... DO UPDATE` shape as the rest of
//! the SQLite code in this crate.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{RecentProject, LAST_USED_FOLDER};
use crate::error::StorageError;

/// Timestamp source for recent-project bookkeeping
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS recent_projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        path TEXT NOT NULL UNIQUE,
        last_opened TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_recent_last_opened ON recent_projects(last_opened);
"#;

const UPSERT_RECENT: &str = r#"
    INSERT INTO recent_projects (path, last_opened)
    VALUES (?1, ?2)
    ON CONFLICT(path) DO UPDATE SET last_opened = excluded.last_opened
"#;

/// Handle to the settings database
///
/// Holds only the file location; connections are opened per call.
pub struct SettingsStore {
    db_path: PathBuf,
    clock: Clock,
    schema_ready: AtomicBool,
}

impl SettingsStore {
    /// Store backed by the given database file
    pub fn open(db_path: impl Into<PathBuf>) -> Self {
        Self::with_clock(db_path, Box::new(Utc::now))
    }

    /// Store with an explicit timestamp source
    pub fn with_clock(db_path: impl Into<PathBuf>, clock: Clock) -> Self {
        Self {
            db_path: db_path.into(),
            clock,
            schema_ready: AtomicBool::new(false),
        }
    }

    /// Create the backing file and schema if missing
    ///
    /// Safe to call any number of times.
    pub fn initialize(&self) -> Result<(), StorageError> {
        self.schema_ready.store(false, Ordering::Release);
        self.connect().map(drop)
    }

    // =========================================================================
    // Recent Projects
    // =========================================================================

    /// Record a project as opened now, refreshing it if already present
    pub fn add_recent_project(&self, path: &str) -> Result<(), StorageError> {
        let conn = self.connect()?;
        let now = self.now();
        conn.execute(UPSERT_RECENT, params![path, now])?;
        tracing::debug!(path, last_opened = %now, "recorded recent project");
        Ok(())
    }

    /// Up to `limit` recent project paths, most recent first
    pub fn get_recent_projects(&self, limit: usize) -> Result<Vec<String>, StorageError> {
        let conn = self.connect()?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut stmt = conn.prepare(
            "SELECT path FROM recent_projects
             ORDER BY last_opened DESC, id DESC
             LIMIT ?1",
        )?;
        let paths = stmt
            .query_map(params![limit], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(paths)
    }

    /// Up to `limit` recent projects with their timestamps, most recent first
    pub fn recent_projects(&self, limit: usize) -> Result<Vec<RecentProject>, StorageError> {
        let conn = self.connect()?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut stmt = conn.prepare(
            "SELECT path, last_opened FROM recent_projects
             ORDER BY last_opened DESC, id DESC
             LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(path, stamp)| -> Result<RecentProject, StorageError> {
                let last_opened = parse_timestamp(&stamp).ok_or_else(|| {
                    StorageError::Timestamp {
                        path: path.clone(),
                        value: stamp.clone(),
                    }
                })?;
                Ok(RecentProject { path, last_opened })
            })
            .collect()
    }

    /// Replace the whole recent list in one transaction
    ///
    /// Every entry gets the current timestamp; duplicates collapse.
    pub fn set_recent_projects<I, S>(&self, projects: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut conn = self.connect()?;
        let now = self.now();

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM recent_projects", [])?;
        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(UPSERT_RECENT)?;
            for project in projects {
                stmt.execute(params![project.as_ref(), now])?;
                count += 1;
            }
        }
        tx.commit()?;

        tracing::debug!(count, "replaced recent projects");
        Ok(())
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Insert or overwrite a setting
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        tracing::debug!(key, "stored setting");
        Ok(())
    }

    /// Read a setting, `None` if never written
    pub fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.connect()?;
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_last_used_folder(&self, folder: &str) -> Result<(), StorageError> {
        self.set_setting(LAST_USED_FOLDER, folder)
    }

    pub fn get_last_used_folder(&self) -> Result<Option<String>, StorageError> {
        self.get_setting(LAST_USED_FOLDER)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Open a connection, applying the schema on first use of this handle
    fn connect(&self) -> Result<Connection, StorageError> {
        let ready = self.schema_ready.load(Ordering::Acquire);

        if !ready {
            if let Some(parent) = self.db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                        path: parent.to_path_buf(),
                        source,
                    })?;
                }
            }
        }

        let conn = Connection::open(&self.db_path).map_err(|source| StorageError::Open {
            path: self.db_path.clone(),
            source,
        })?;

        if !ready {
            conn.execute_batch(SCHEMA)?;
            self.schema_ready.store(true, Ordering::Release);
            tracing::debug!(db = %self.db_path.display(), "settings schema ready");
        }

        Ok(conn)
    }

    fn now(&self) -> String {
        format_timestamp((self.clock)())
    }
}

/// SQLite `CURRENT_TIMESTAMP` layout (UTC) plus microseconds
///
/// Rows stamped by `CURRENT_TIMESTAMP` share the prefix, so text order stays
/// chronological across both.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Accepts `YYYY-MM-DD HH:MM:SS[.ffffff]` and RFC 3339
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|ts| ts.with_timezone(&Utc))
        })
}
