use anyhow::{Context, Result};

use crate::itunes::SearchConfig;

#[derive(Debug, Clone)]
pub struct McpConfig {
    pub bind: String,
    pub auth_token: Option<String>,
    pub search: SearchConfig,
}

impl McpConfig {
    pub fn from_env() -> Result<Self> {
        let bind = std::env::var("MCP_BIND").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let auth_token = std::env::var("MCP_AUTH_TOKEN")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let search = SearchConfig::from_env().context("invalid search configuration")?;

        Ok(Self {
            bind,
            auth_token,
            search,
        })
    }
}
