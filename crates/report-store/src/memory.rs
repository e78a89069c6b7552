//! In-memory report store.

use crate::error::StoreError;
use crate::store::ReportStore;
use crate::types::{NewReport, Report};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Report store that keeps rows in process memory.
///
/// Used when persistence is disabled and as a test double. Ids start at 1
/// and increase by one per insert.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    reports: RwLock<Vec<Report>>,
}

impl MemoryReportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored report, in insertion order.
    pub async fn list_all(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        debug!("In-memory report store ready");
        Ok(())
    }

    async fn insert(&self, report: &NewReport) -> Result<i64, StoreError> {
        let mut reports = self.reports.write().await;
        let id = reports.last().map(|r| r.id + 1).unwrap_or(1);
        reports.push(Report::from_new(id, report.clone()));
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Report>, StoreError> {
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.reports.read().await.len() as u64)
    }
}
