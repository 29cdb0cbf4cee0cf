use reqwest::Client;
use tracing::debug;

use super::{error::SearchError, transport::Transport};
use crate::Result;

#[derive(Clone, Default)]
pub struct ItunesClient {
    http: Client,
}

impl ItunesClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for ItunesClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "requesting itunes search");

        let body = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| SearchError::Transport(format!("request itunes failed: {err}")))?
            .error_for_status()
            .map_err(|err| SearchError::Transport(format!("itunes returned error status: {err}")))?
            .bytes()
            .await
            .map_err(|err| SearchError::Transport(format!("read itunes response failed: {err}")))?;

        Ok(body.to_vec())
    }
}
