use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{
    config::SearchConfig,
    parser::parse,
    query::build_search_url,
    types::{SearchResult, SearchResultCategory},
    transport::Transport,
};
use crate::Result;

/// One logical search session: at most one search is in flight, and starting
/// a new one cancels the previous one.
pub struct SearchSession<T> {
    transport: T,
    config: SearchConfig,
    current: Mutex<ActiveSearch>,
}

#[derive(Default)]
struct ActiveSearch {
    generation: u64,
    token: Option<CancellationToken>,
}

impl<T: Transport> SearchSession<T> {
    pub fn new(transport: T, config: SearchConfig) -> Self {
        Self {
            transport,
            config,
            current: Mutex::new(ActiveSearch::default()),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs a search. Returns `None` when the search was cancelled, either by
    /// [`cancel`](Self::cancel) or by a newer search on this session.
    pub async fn search(
        &self,
        query: &str,
        category: SearchResultCategory,
    ) -> Option<Result<Vec<SearchResult>>> {
        let url = match build_search_url(&self.config.base_url, query, category, self.config.limit)
        {
            Ok(url) => url,
            Err(err) => return Some(Err(err)),
        };

        let (generation, token) = self.begin();
        let fetched = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            fetched = self.transport.fetch(url.as_str()) => Some(fetched),
        };

        let fetched = match fetched {
            Some(fetched) if !token.is_cancelled() => fetched,
            _ => {
                debug!(query, "search cancelled, dropping completion");
                return None;
            }
        };
        self.finish(generation);

        let outcome = fetched.and_then(|body| parse(&body));
        match &outcome {
            Ok(results) => debug!(query, %category, count = results.len(), "search finished"),
            Err(err) => warn!(query, %category, error = %err, "search failed"),
        }
        Some(outcome)
    }

    /// Like [`search`](Self::search), with the category given by its
    /// human-facing label.
    pub async fn search_label(
        &self,
        query: &str,
        label: &str,
    ) -> Option<Result<Vec<SearchResult>>> {
        self.search(query, SearchResultCategory::from_label(label))
            .await
    }

    pub fn cancel(&self) {
        if let Some(token) = self.current.lock().token.take() {
            token.cancel();
        }
    }

    pub fn is_searching(&self) -> bool {
        self.current.lock().token.is_some()
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let token = CancellationToken::new();
        let mut current = self.current.lock();
        current.generation += 1;
        if let Some(previous) = current.token.replace(token.clone()) {
            debug!("superseding in-flight search");
            previous.cancel();
        }
        (current.generation, token)
    }

    fn finish(&self, generation: u64) {
        let mut current = self.current.lock();
        // A newer search owns the slot once the generation has moved on.
        if current.generation == generation {
            current.token = None;
        }
    }
}
