//! Report record types.

use serde::{Deserialize, Serialize};

/// A report that has not been persisted yet.
///
/// Every field is already normalized and defaulted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    pub name: String,
    pub phone: String,
    pub species: String,
    pub location: String,
    pub notes: String,
}

/// A persisted wildlife-injury report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub species: String,
    pub location: String,
    pub notes: String,
}

impl Report {
    /// Attach a store-assigned id to a new report.
    pub fn from_new(id: i64, report: NewReport) -> Self {
        Self {
            id,
            name: report.name,
            phone: report.phone,
            species: report.species,
            location: report.location,
            notes: report.notes,
        }
    }
}
