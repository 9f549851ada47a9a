//! Record model and in-memory dataset for the company directory.
//!
//! This crate defines the company record shared by the query engine and the
//! HTTP surface, along with the immutable [`Dataset`] container and its JSON
//! loader.

pub mod dataset;
pub mod models;

pub use dataset::{Dataset, StoreError, StoreResult};
pub use models::*;
