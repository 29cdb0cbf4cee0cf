use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{error::SearchError, mapper::normalize, types::SearchResult};
use crate::Result;

/// Parses a search payload, treating a missing `results` array as an empty
/// result set.
pub fn parse(payload: &[u8]) -> Result<Vec<SearchResult>> {
    match parse_strict(payload) {
        Err(SearchError::MissingResultsField) => {
            warn!("search payload has no 'results' array, treating as empty");
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Parses a search payload, failing with
/// [`SearchError::MissingResultsField`] when the `results` array is absent.
///
/// Entries that are not objects or that the normalizer rejects are skipped;
/// the rest keep their payload order.
pub fn parse_strict(payload: &[u8]) -> Result<Vec<SearchResult>> {
    let mut document: Map<String, Value> = serde_json::from_slice(payload)
        .map_err(|err| SearchError::MalformedPayload(err.to_string()))?;

    let entries = match document.remove("results") {
        Some(Value::Array(entries)) => entries,
        _ => return Err(SearchError::MissingResultsField),
    };

    let total = entries.len();
    let results: Vec<_> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(record) => normalize(record),
            _ => None,
        })
        .collect();

    debug!(
        total,
        kept = results.len(),
        dropped = total - results.len(),
        "parsed search payload"
    );
    Ok(results)
}
