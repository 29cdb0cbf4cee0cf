use std::{convert::Infallible, fmt, str::FromStr};

use super::types::SearchResultCategory;

impl SearchResultCategory {
    pub const ALL: [SearchResultCategory; 4] = [
        SearchResultCategory::Unspecified,
        SearchResultCategory::Music,
        SearchResultCategory::Software,
        SearchResultCategory::Ebooks,
    ];

    /// Maps a human-facing label to a category. Unknown labels select the
    /// unfiltered search.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_label().eq_ignore_ascii_case(label))
            .unwrap_or(SearchResultCategory::Unspecified)
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            SearchResultCategory::Unspecified => "All",
            SearchResultCategory::Music => "Music",
            SearchResultCategory::Software => "Software",
            SearchResultCategory::Ebooks => "E-books",
        }
    }

    /// Value of the `entity` query parameter, `None` for an unfiltered search.
    pub fn as_entity(&self) -> Option<&'static str> {
        match self {
            SearchResultCategory::Unspecified => None,
            SearchResultCategory::Music => Some("musicTrack"),
            SearchResultCategory::Software => Some("software"),
            SearchResultCategory::Ebooks => Some("ebook"),
        }
    }

    pub fn from_entity(entity: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_entity() == Some(entity))
            .unwrap_or(SearchResultCategory::Unspecified)
    }
}

impl FromStr for SearchResultCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for SearchResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Music", SearchResultCategory::Music)]
    #[case("Software", SearchResultCategory::Software)]
    #[case("E-books", SearchResultCategory::Ebooks)]
    #[case("All", SearchResultCategory::Unspecified)]
    #[case(" music ", SearchResultCategory::Music)]
    #[case("Podcasts", SearchResultCategory::Unspecified)]
    #[case("", SearchResultCategory::Unspecified)]
    fn maps_labels(#[case] label: &str, #[case] expected: SearchResultCategory) {
        assert_eq!(SearchResultCategory::from_label(label), expected);
    }

    #[test]
    fn music_label_resolves_to_music_track_entity() {
        let category: SearchResultCategory = "Music".parse().unwrap();
        assert_eq!(category.as_entity(), Some("musicTrack"));
    }

    #[test]
    fn unspecified_has_no_entity() {
        assert_eq!(SearchResultCategory::Unspecified.as_entity(), None);
    }

    #[test]
    fn labels_and_entities_map_back() {
        for category in SearchResultCategory::ALL {
            assert_eq!(SearchResultCategory::from_label(category.as_label()), category);
            if let Some(entity) = category.as_entity() {
                assert_eq!(SearchResultCategory::from_entity(entity), category);
            }
        }
    }
}
