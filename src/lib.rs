pub mod itunes;
pub mod mcp;

pub use itunes::SearchError;

pub type Result<T> = std::result::Result<T, SearchError>;
