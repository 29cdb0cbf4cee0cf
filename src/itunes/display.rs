use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::Serialize;

use super::{kind::label_for, types::SearchResult};

/// What a result row shows: the name, the artist and the kind label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DisplayItem {
    pub name: String,
    pub kind_label: String,
    pub artist_name: String,
}

impl DisplayItem {
    /// Secondary line of a row, e.g. `"The Beatles (Song)"`.
    pub fn subtitle(&self) -> String {
        format!("{} ({})", self.artist_name, self.kind_label)
    }
}

impl From<&SearchResult> for DisplayItem {
    fn from(result: &SearchResult) -> Self {
        let artist_name = if result.artist_name().is_empty() {
            "Unknown".to_string()
        } else {
            result.artist_name().to_string()
        };
        Self {
            name: result.name().to_string(),
            kind_label: label_for(result.kind()).to_string(),
            artist_name,
        }
    }
}

/// Orders items by the name `name_of` picks out, using [`natural_cmp`].
/// Items with equal names keep their relative order.
pub fn sort_by_name<T>(items: &mut [T], name_of: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| natural_cmp(name_of(a), name_of(b)));
}

/// Case-insensitive comparison that orders runs of digits by value, so
/// "Track 2" sorts before "Track 10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_digits = take_digits(&mut left);
                let r_digits = take_digits(&mut right);
                let ordering = compare_digits(&l_digits, &r_digits);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
