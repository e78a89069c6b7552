//! SQLite-backed report store.

use crate::error::StoreError;
use crate::schema::{COUNT_REPORTS, INSERT_REPORT, SCHEMA, SELECT_REPORT};
use crate::types::{NewReport, Report};
use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tokio_rusqlite::Connection;
use tracing::{debug, info, instrument, warn};

/// Append-only storage for submitted reports.
///
/// Rows are never updated or deleted and ids are never reused. The read
/// methods exist so callers can verify what was committed.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Ensure the backing schema exists. Safe to call on every start.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Atomically persist a report and return its newly assigned id.
    async fn insert(&self, report: &NewReport) -> Result<i64, StoreError>;

    /// Fetch a report by id.
    async fn get(&self, id: i64) -> Result<Option<Report>, StoreError>;

    /// Number of reports stored.
    async fn count(&self) -> Result<u64, StoreError>;
}

/// Report store backed by a SQLite database file.
///
/// Holds only the database path: every operation opens its own connection
/// and closes it before returning, so concurrent requests share nothing but
/// the file itself.
#[derive(Debug, Clone)]
pub struct SqliteReportStore {
    path: PathBuf,
}

impl SqliteReportStore {
    /// Create a store for the database at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path).await?)
    }

    async fn release(&self, conn: Connection) {
        if let Err(e) = conn.close().await {
            warn!(path = %self.path.display(), "Failed to close database connection: {}", e);
        }
    }
}

#[async_trait]
impl ReportStore for SqliteReportStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn initialize(&self) -> Result<(), StoreError> {
        let conn = self.connect().await?;
        conn.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;
        self.release(conn).await;

        info!("Database initialized");
        Ok(())
    }

    #[instrument(skip(self, report))]
    async fn insert(&self, report: &NewReport) -> Result<i64, StoreError> {
        let report = report.clone();
        let conn = self.connect().await?;

        let id = conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(
                    INSERT_REPORT,
                    params![
                        report.name,
                        report.phone,
                        report.species,
                        report.location,
                        report.notes,
                    ],
                )?;
                let id = tx.last_insert_rowid();
                tx.commit()?;
                Ok(id)
            })
            .await?;
        self.release(conn).await;

        debug!(report_id = id, "Report row committed");
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Report>, StoreError> {
        let conn = self.connect().await?;
        let report = conn
            .call(move |conn| {
                let report = conn
                    .query_row(SELECT_REPORT, params![id], report_from_row)
                    .optional()?;
                Ok(report)
            })
            .await?;
        self.release(conn).await;
        Ok(report)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let conn = self.connect().await?;
        let count = conn
            .call(|conn| {
                let count: i64 = conn.query_row(COUNT_REPORTS, [], |row| row.get(0))?;
                Ok(count)
            })
            .await?;
        self.release(conn).await;
        Ok(count.max(0) as u64)
    }
}

// Columns are nullable in the schema; older rows may hold NULL text.
fn report_from_row(row: &Row) -> rusqlite::Result<Report> {
    Ok(Report {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        phone: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        species: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        location: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        notes: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}
