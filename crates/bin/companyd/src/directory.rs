use company_core::CompanyDirectory;
use company_store::{Dataset, StoreResult};

use crate::config::CompanydConfig;

/// Loads the configured dataset and wraps it for serving.
///
/// Runs once, before the listener is bound.
pub fn build_directory(config: &CompanydConfig) -> StoreResult<CompanyDirectory> {
    let dataset = Dataset::load(&config.data_path)?;
    if dataset.is_empty() {
        tracing::warn!(
            path = %config.data_path.display(),
            "company dataset is empty; every search will return no results"
        );
    }
    Ok(CompanyDirectory::new(dataset))
}
