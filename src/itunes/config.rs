use anyhow::{Context, Result};

use super::query::{DEFAULT_BASE_URL, DEFAULT_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub base_url: String,
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base_url = read("STORESEARCH_BASE_URL")
            .map(|value| value.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let limit = match read("STORESEARCH_LIMIT") {
            Some(value) => value
                .parse::<usize>()
                .with_context(|| format!("STORESEARCH_LIMIT must be a number, got {value:?}"))?,
            None => DEFAULT_LIMIT,
        };
        if limit == 0 {
            anyhow::bail!("STORESEARCH_LIMIT must be greater than 0")
        }

        Ok(Self { base_url, limit })
    }
}
