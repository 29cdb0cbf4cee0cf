use std::future::Future;

use crate::Result;

/// Fetches the raw body of a search request.
pub trait Transport: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}
