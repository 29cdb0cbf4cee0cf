#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Value, json};
use storesearch::itunes::{SearchError, Transport};
use tokio::sync::Notify;

/// Canned storefront payload mixing every supported shape with a few
/// entries the normalizer drops.
pub fn storefront_payload() -> Value {
    json!({
        "resultCount": 7,
        "results": [
            {
                "wrapperType": "track",
                "kind": "song",
                "trackName": "Yellow Submarine",
                "artistName": "The Beatles",
                "artworkUrl60": "https://is1.example.com/60.jpg",
                "artworkUrl100": "https://is1.example.com/100.jpg",
                "trackViewUrl": "https://music.example.com/yellow-submarine",
                "currency": "USD",
                "trackPrice": 1.29,
                "primaryGenreName": "Rock"
            },
            {"wrapperType": "track", "kind": "song"},
            {
                "wrapperType": "audiobook",
                "kind": "ebook",
                "collectionName": "a Brief History of Time",
                "artistName": "Stephen Hawking",
                "collectionViewUrl": "https://books.example.com/brief-history",
                "collectionPrice": 19.99,
                "currency": "USD",
                "primaryGenreName": "Science"
            },
            {
                "wrapperType": "software",
                "kind": "software",
                "trackName": "Calculator 2",
                "artistName": "Numbers Inc",
                "trackViewUrl": "https://apps.example.com/calculator",
                "price": 0,
                "currency": "USD",
                "primaryGenreName": "Utilities"
            },
            {"wrapperType": "collection", "collectionName": "Abbey Road"},
            "not a record",
            {
                "kind": "ebook",
                "trackName": "Calculator 10 Handbook",
                "price": "free",
                "genres": ["Computers", "Reference"]
            }
        ]
    })
}

#[derive(Clone, Default)]
pub struct FakeTransport {
    body: Arc<Vec<u8>>,
    fail: bool,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub started: Arc<Notify>,
}

impl FakeTransport {
    pub fn with_body(body: &Value) -> Self {
        Self {
            body: Arc::new(serde_json::to_vec(body).unwrap()),
            ..Default::default()
        }
    }

    pub fn with_raw(body: &[u8]) -> Self {
        Self {
            body: Arc::new(body.to_vec()),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl Transport for FakeTransport {
    /// Requests for the term `slow` never complete on their own.
    async fn fetch(&self, url: &str) -> storesearch::Result<Vec<u8>> {
        self.requests.lock().push(url.to_string());
        if url.contains("term=slow") {
            self.started.notify_one();
            std::future::pending::<()>().await;
        }
        if self.fail {
            return Err(SearchError::Transport("connection refused".to_string()));
        }
        Ok(self.body.to_vec())
    }
}
