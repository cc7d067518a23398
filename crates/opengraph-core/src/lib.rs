pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod image;
pub mod metadata;

#[cfg(test)]
mod test_support;

pub use client::{FetchRequest, OpenGraph};
pub use error::{FetchError, TransferInfo};
pub use metadata::MetadataMap;

/// Fetches `url` with the default configuration and returns its Open Graph metadata.
pub fn fetch(url: &str) -> Result<MetadataMap, FetchError> {
    OpenGraph::default().fetch(&FetchRequest::new(url))
}
