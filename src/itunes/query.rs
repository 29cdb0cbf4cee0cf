use reqwest::Url;

use super::{error::SearchError, types::SearchResultCategory};
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com/search";
pub const DEFAULT_LIMIT: usize = 200;

/// Builds `<base>?term=<query>[&entity=<filter>]&limit=<limit>`.
///
/// The query is percent-encoded as a query component (space becomes `%20`).
/// Any query already present on `base_url` is kept and extended; a fragment
/// is dropped.
pub fn build_search_url(
    base_url: &str,
    query: &str,
    category: SearchResultCategory,
    limit: usize,
) -> Result<Url> {
    let mut base = Url::parse(base_url.trim())
        .map_err(|err| SearchError::Encoding(format!("invalid base url {base_url:?}: {err}")))?;
    if base.cannot_be_a_base() {
        return Err(SearchError::Encoding(format!(
            "base url {base_url:?} cannot carry query parameters"
        )));
    }
    base.set_fragment(None);

    let separator = match base.query() {
        None => "?",
        Some("") => "",
        Some(_) => "&",
    };
    let mut raw = format!(
        "{}{}term={}",
        base.as_str(),
        separator,
        urlencoding::encode(query)
    );
    if let Some(entity) = category.as_entity() {
        raw.push_str("&entity=");
        raw.push_str(entity);
    }
    raw.push_str(&format!("&limit={limit}"));

    Url::parse(&raw).map_err(|err| SearchError::Encoding(format!("invalid search url: {err}")))
}
