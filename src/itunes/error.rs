#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to encode search url: {0}")]
    Encoding(String),

    #[error("malformed search payload: {0}")]
    MalformedPayload(String),

    #[error("search payload has no 'results' array")]
    MissingResultsField,

    #[error("search request failed: {0}")]
    Transport(String),
}
