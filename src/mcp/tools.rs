use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::itunes::{
    DisplayItem, ItunesClient, SearchConfig, SearchResult, SearchResultCategory, SearchSession,
    Transport, display::sort_by_name,
};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StoreSearchParams {
    pub query: String,
    /// One of "All", "Music", "Software" or "E-books".
    #[serde(default)]
    pub category: Option<String>,
    /// Order results by name instead of store relevance.
    #[serde(default)]
    pub sorted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct StoreSearchItem {
    #[serde(flatten)]
    pub display: DisplayItem,
    pub kind: String,
    pub store_url: String,
    pub artwork_url: String,
    pub price: f64,
    pub currency: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct StoreSearchResponse {
    pub query: String,
    pub category: String,
    pub success: bool,
    pub results: Vec<StoreSearchItem>,
    pub error: Option<String>,
}

impl StoreSearchResponse {
    fn failed(query: String, category: SearchResultCategory, error: impl Into<String>) -> Self {
        Self {
            query,
            category: category.as_label().to_string(),
            success: false,
            results: Vec::new(),
            error: Some(error.into()),
        }
    }
}

fn to_item(result: &SearchResult) -> StoreSearchItem {
    StoreSearchItem {
        display: DisplayItem::from(result),
        kind: result.kind().to_string(),
        store_url: result.store_url().to_string(),
        artwork_url: result.artwork_large_url().to_string(),
        price: result.price(),
        currency: result.currency().to_string(),
        genre: result.genre().to_string(),
    }
}

/// Runs one tool call against a search session.
pub async fn run_store_search<T: Transport>(
    session: &SearchSession<T>,
    params: StoreSearchParams,
) -> StoreSearchResponse {
    let category = params
        .category
        .as_deref()
        .map(SearchResultCategory::from_label)
        .unwrap_or_default();
    let query = params.query.trim().to_string();

    if query.is_empty() {
        return StoreSearchResponse::failed(query, category, "query must not be empty");
    }

    let results = match session.search(&query, category).await {
        None => return StoreSearchResponse::failed(query, category, "search cancelled"),
        Some(Err(err)) => return StoreSearchResponse::failed(query, category, err.to_string()),
        Some(Ok(results)) => results,
    };

    let mut items: Vec<_> = results.iter().map(to_item).collect();
    if params.sorted.unwrap_or(false) {
        sort_by_name(&mut items, |item| item.display.name.as_str());
    }

    StoreSearchResponse {
        query,
        category: category.as_label().to_string(),
        success: true,
        results: items,
        error: None,
    }
}

#[derive(Clone)]
pub struct StoreSearchTools {
    session: Arc<SearchSession<ItunesClient>>,
    tool_router: ToolRouter<Self>,
}

impl StoreSearchTools {
    pub fn new(client: ItunesClient, config: SearchConfig) -> Self {
        Self {
            session: Arc::new(SearchSession::new(client, config)),
            tool_router: Self::tool_router(),
        }
    }

    fn response_to_result(response: StoreSearchResponse) -> CallToolResult {
        match serde_json::to_value(&response) {
            Ok(value) => CallToolResult::structured(value),
            Err(err) => {
                let fallback = serde_json::json!({
                    "query": response.query,
                    "category": response.category,
                    "success": false,
                    "results": [],
                    "error": format!("structured serialization failed: {err}"),
                });
                CallToolResult::success(vec![Content::text(fallback.to_string())])
            }
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StoreSearchTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Storefront search: the storesearch tool looks up songs, apps, e-books and audiobooks by free text, optionally filtered by category".to_string(),
            ),
            ..Default::default()
        }
    }
}

#[tool_router]
impl StoreSearchTools {
    #[tool(
        name = "storesearch",
        description = "Search the iTunes storefront. category is one of All, Music, Software, E-books (unknown values search everything). Set sorted to order results by name."
    )]
    async fn storesearch(
        &self,
        params: Parameters<StoreSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = run_store_search(&self.session, params.0).await;
        Ok(Self::response_to_result(response))
    }
}
