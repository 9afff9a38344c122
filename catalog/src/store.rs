use shared_types::ProjectRecord;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::seed;

/// Read-only snapshot of every project in the catalog
///
/// Built once at startup and shared by reference; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ProjectRecord>,
}

impl RecordStore {
    /// Build a store, rejecting duplicate ids
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Store holding the built-in showcase projects
    pub fn seeded() -> Self {
        Self {
            records: seed::seed_projects(),
        }
    }

    /// Load a JSON array of project records
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<ProjectRecord> = serde_json::from_str(&raw)?;
        let store = Self::new(records)?;
        info!(
            "Loaded {} projects from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Linear scan by id; ids are unique so at most one record matches
    pub fn find(&self, id: &str) -> Result<&ProjectRecord> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
