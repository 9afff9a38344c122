use anyhow::Context;
use catalog::RecordStore;
use std::path::Path;
use std::sync::Arc;

/// Build the record store served for the lifetime of the process
///
/// Uses the JSON file at `seed_path` when one is configured, otherwise the
/// built-in showcase projects.
pub fn initialize_store(seed_path: Option<&Path>) -> anyhow::Result<Arc<RecordStore>> {
    let store = match seed_path {
        Some(path) => RecordStore::from_json_file(path)
            .with_context(|| format!("Failed to load project seed from {}", path.display()))?,
        None => {
            tracing::info!("No seed file configured, using built-in showcase projects");
            RecordStore::seeded()
        }
    };

    Ok(Arc::new(store))
}
