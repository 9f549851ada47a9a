use company_store::{Company, CompanySummary, Dataset};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("company not found: {id}")]
    NotFound { id: String },
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Returns the projection of every record whose name contains `query`,
/// ignoring case, in dataset order.
///
/// An empty query matches every record.
#[must_use]
pub fn search(dataset: &Dataset, query: &str) -> Vec<CompanySummary> {
    let needle = query.to_lowercase();
    dataset
        .iter()
        .filter(|company| company.name.to_lowercase().contains(&needle))
        .map(CompanySummary::from)
        .collect()
}

/// Returns the first record whose id equals `id` exactly.
///
/// # Errors
/// Returns `QueryError::NotFound` if no record carries that id.
pub fn lookup<'a>(dataset: &'a Dataset, id: &str) -> QueryResult<&'a Company> {
    dataset
        .iter()
        .find(|company| company.id == id)
        .ok_or_else(|| QueryError::NotFound { id: id.to_string() })
}
