use company_store::{Company, CompanySummary, Dataset};
use tracing::debug;

use crate::query::{self, QueryResult};

/// Shared query handle over a loaded dataset.
///
/// Cloning is cheap; every clone reads the same records.
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    dataset: Dataset,
}

impl CompanyDirectory {
    #[must_use]
    pub const fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// Searches company names for `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<CompanySummary> {
        let results = query::search(&self.dataset, query);
        debug!(query, matches = results.len(), "company search");
        results
    }

    /// Fetches a company by exact id.
    ///
    /// # Errors
    /// Returns `QueryError::NotFound` if no record carries that id.
    pub fn lookup(&self, id: &str) -> QueryResult<&Company> {
        let result = query::lookup(&self.dataset, id);
        debug!(id, found = result.is_ok(), "company lookup");
        result
    }
}
