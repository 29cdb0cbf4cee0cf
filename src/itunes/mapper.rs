use serde_json::Value;

use super::types::{RawRecord, RecordShape, SearchResult};

pub fn classify(record: &RawRecord) -> Option<RecordShape> {
    match record.get("wrapperType").and_then(Value::as_str) {
        Some("track") => Some(RecordShape::Track),
        Some("audiobook") => Some(RecordShape::Audiobook),
        Some("software") => Some(RecordShape::Software),
        Some(_) => None,
        None => match record.get("kind").and_then(Value::as_str) {
            Some("ebook") => Some(RecordShape::Ebook),
            _ => None,
        },
    }
}

/// Normalizes one raw record, or returns `None` when its shape is not
/// supported or its name field is missing.
pub fn normalize(mut record: RawRecord) -> Option<SearchResult> {
    let shape = classify(&record)?;
    let fields = shape.fields();

    let name = take_text(&mut record, fields.name).filter(|name| !name.is_empty())?;
    let kind = match shape {
        RecordShape::Audiobook => shape.fallback_kind().to_string(),
        _ => take_text(&mut record, "kind")
            .filter(|kind| !kind.is_empty())
            .unwrap_or_else(|| shape.fallback_kind().to_string()),
    };
    let genre = match shape {
        RecordShape::Ebook => join_genres(record.remove("genres")),
        _ => take_text(&mut record, "primaryGenreName").unwrap_or_default(),
    };

    Some(SearchResult {
        name,
        artist_name: take_text(&mut record, "artistName").unwrap_or_default(),
        artwork_small_url: take_text(&mut record, "artworkUrl60").unwrap_or_default(),
        artwork_large_url: take_text(&mut record, "artworkUrl100").unwrap_or_default(),
        store_url: take_text(&mut record, fields.store_url).unwrap_or_default(),
        kind,
        currency: take_text(&mut record, "currency").unwrap_or_default(),
        price: record.get(fields.price).and_then(Value::as_f64).unwrap_or(0.0),
        genre,
    })
}

fn take_text(record: &mut RawRecord, key: &str) -> Option<String> {
    match record.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}

fn join_genres(value: Option<Value>) -> String {
    match value {
        Some(Value::Array(genres)) => genres
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}
