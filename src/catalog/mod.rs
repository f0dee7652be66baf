//! Catalog search: fetch the publications search page and extract structured
//! records from its HTML.

pub mod client;
pub mod models;
pub mod parser;

pub use client::CatalogClient;
pub use models::PublicationRecord;
pub use parser::parse_search_results;
