//! Query engine for the company directory.
//!
//! The two read-only operations, name search and id lookup, are plain
//! functions over a [`Dataset`](company_store::Dataset). [`CompanyDirectory`]
//! bundles a dataset with those operations for callers that hold it as shared
//! state.

pub mod directory;
pub mod query;

pub use directory::CompanyDirectory;
pub use query::{QueryError, QueryResult, lookup, search};
