use serde_json::{Map, Value};

/// One untyped entry of the `results` array, consumed by the normalizer.
pub type RawRecord = Map<String, Value>;

/// A storefront item normalized from any of the supported record shapes.
///
/// Only [`normalize`](super::mapper::normalize) builds these; the fields are
/// read through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub(crate) name: String,
    pub(crate) artist_name: String,
    pub(crate) artwork_small_url: String,
    pub(crate) artwork_large_url: String,
    pub(crate) store_url: String,
    pub(crate) kind: String,
    pub(crate) currency: String,
    pub(crate) price: f64,
    pub(crate) genre: String,
}

impl SearchResult {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    pub fn artwork_small_url(&self) -> &str {
        &self.artwork_small_url
    }

    pub fn artwork_large_url(&self) -> &str {
        &self.artwork_large_url
    }

    pub fn store_url(&self) -> &str {
        &self.store_url
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchResultCategory {
    #[default]
    Unspecified,
    Music,
    Software,
    Ebooks,
}

/// Record shapes the normalizer knows how to read, decided from
/// `wrapperType` (or `kind` for e-books, which carry no wrapper type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    Track,
    Audiobook,
    Software,
    Ebook,
}

impl RecordShape {
    /// Payload keys holding the name, price and store link for this shape.
    pub(crate) fn fields(self) -> ShapeFields {
        match self {
            RecordShape::Track => ShapeFields {
                name: "trackName",
                price: "trackPrice",
                store_url: "trackViewUrl",
            },
            RecordShape::Audiobook => ShapeFields {
                name: "collectionName",
                price: "collectionPrice",
                store_url: "collectionViewUrl",
            },
            RecordShape::Software | RecordShape::Ebook => ShapeFields {
                name: "trackName",
                price: "price",
                store_url: "trackViewUrl",
            },
        }
    }

    /// Kind code used when the record itself carries none.
    pub(crate) fn fallback_kind(self) -> &'static str {
        match self {
            RecordShape::Track => "track",
            RecordShape::Audiobook => "audiobook",
            RecordShape::Software => "software",
            RecordShape::Ebook => "ebook",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ShapeFields {
    pub name: &'static str,
    pub price: &'static str,
    pub store_url: &'static str,
}
