pub mod category;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod kind;
pub mod mapper;
pub mod parser;
pub mod query;
pub mod session;
pub mod transport;
pub mod types;

pub use client::ItunesClient;
pub use config::SearchConfig;
pub use display::DisplayItem;
pub use error::SearchError;
pub use session::SearchSession;
pub use transport::Transport;
pub use types::{RawRecord, RecordShape, SearchResult, SearchResultCategory};
