/// Human-readable label for a storefront kind code. Codes outside the table
/// are returned unchanged.
pub fn label_for(kind: &str) -> &str {
    match kind {
        "album" => "Album",
        "audiobook" => "Audio Book",
        "book" => "Book",
        "ebook" => "E-Book",
        "feature-movie" => "Movie",
        "music-video" => "Music Video",
        "podcast" => "Podcast",
        "software" => "App",
        "song" => "Song",
        "tv-episode" => "TV Episode",
        other => other,
    }
}
