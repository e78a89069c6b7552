//! Append-only storage for wildlife-injury reports.
//!
//! Reports are written once and never updated or deleted. The SQLite
//! store opens a fresh connection per operation; the in-memory store backs
//! tests and runs with persistence disabled.

mod error;
mod memory;
mod schema;
mod store;
mod types;

pub use error::StoreError;
pub use memory::MemoryReportStore;
pub use store::{ReportStore, SqliteReportStore};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio_test::{assert_err, assert_ok};

    fn sample_report() -> NewReport {
        NewReport {
            name: "Asha".into(),
            phone: "+919876543210".into(),
            species: "Dog".into(),
            location: "Park Rd".into(),
            notes: "Leg wound".into(),
        }
    }

    fn sqlite_store(dir: &TempDir) -> SqliteReportStore {
        SqliteReportStore::new(dir.path().join("reports.db"))
    }

    #[test]
    fn test_report_from_new() {
        let report = Report::from_new(7, sample_report());

        assert_eq!(report.id, 7);
        assert_eq!(report.name, "Asha");
        assert_eq!(report.phone, "+919876543210");
        assert_eq!(report.notes, "Leg wound");
    }

    #[test]
    fn test_report_serialization() {
        let report = Report::from_new(1, sample_report());
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"species\":\"Dog\""));
        assert!(json.contains("\"location\":\"Park Rd\""));
    }

    // SQLite store tests

    #[tokio::test]
    async fn test_sqlite_insert_and_get() {
        let dir = TempDir::new().unwrap();
        let store = sqlite_store(&dir);
        store.initialize().await.unwrap();

        let id = store.insert(&sample_report()).await.unwrap();

        let report = store.get(id).await.unwrap().unwrap();
        assert_eq!(report, Report::from_new(id, sample_report()));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sqlite_initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = sqlite_store(&dir);
        store.initialize().await.unwrap();

        store.insert(&sample_report()).await.unwrap();

        // Re-initializing must keep existing rows
        assert_ok!(store.initialize().await);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sqlite_identical_reports_get_distinct_ids() {
        let dir = TempDir::new().unwrap();
        let store = sqlite_store(&dir);
        store.initialize().await.unwrap();

        let first = store.insert(&sample_report()).await.unwrap();
        let second = store.insert(&sample_report()).await.unwrap();

        assert_ne!(first, second);
        assert!(second > first);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_sqlite_rows_survive_new_store_handle() {
        let dir = TempDir::new().unwrap();
        let id = {
            let store = sqlite_store(&dir);
            store.initialize().await.unwrap();
            store.insert(&sample_report()).await.unwrap()
        };

        let reopened = sqlite_store(&dir);
        reopened.initialize().await.unwrap();

        let report = reopened.get(id).await.unwrap();
        assert!(report.is_some());
        assert_eq!(report.unwrap().name, "Asha");
    }

    #[tokio::test]
    async fn test_sqlite_get_missing() {
        let dir = TempDir::new().unwrap();
        let store = sqlite_store(&dir);
        store.initialize().await.unwrap();

        assert!(store.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sqlite_insert_without_schema_fails() {
        let dir = TempDir::new().unwrap();
        let store = sqlite_store(&dir);

        // No initialize: the reports table does not exist
        assert_err!(store.insert(&sample_report()).await);
    }

    #[tokio::test]
    async fn test_sqlite_unreachable_path_fails() {
        let dir = TempDir::new().unwrap();
        let store = SqliteReportStore::new(dir.path().join("missing").join("reports.db"));

        assert_err!(store.initialize().await);
        assert_err!(store.insert(&sample_report()).await);
    }

    #[tokio::test]
    async fn test_sqlite_empty_fields_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = sqlite_store(&dir);
        store.initialize().await.unwrap();

        let report = NewReport {
            name: "Unknown".into(),
            phone: String::new(),
            species: "Unknown".into(),
            location: String::new(),
            notes: String::new(),
        };
        let id = store.insert(&report).await.unwrap();

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.phone, "");
        assert_eq!(stored.location, "");
        assert_eq!(stored.notes, "");
    }

    // In-memory store tests

    #[tokio::test]
    async fn test_memory_insert_assigns_sequential_ids() {
        let store = MemoryReportStore::new();
        store.initialize().await.unwrap();

        assert_eq!(store.insert(&sample_report()).await.unwrap(), 1);
        assert_eq!(store.insert(&sample_report()).await.unwrap(), 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_memory_get_and_list() {
        let store = MemoryReportStore::new();
        let id = store.insert(&sample_report()).await.unwrap();

        assert_eq!(store.get(id).await.unwrap().unwrap().species, "Dog");
        assert!(store.get(id + 1).await.unwrap().is_none());

        let all = store.list_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
    }
}
