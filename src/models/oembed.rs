//! Contains the `oEmbed` record returned for an app link or CDN URL.

use serde::{Deserialize, Serialize};

/// An `oEmbed` response describing an image.
///
/// This is the one payload the API serves without an envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oembed {
    /// The comma-delimited names of the image authors.
    author_name: String,

    /// The source URL of the image.
    author_url: String,

    /// Always 7200.
    cache_age: u64,

    /// The number of comments made on the image.
    derpibooru_comments: u64,

    /// The image's ID.
    derpibooru_id: u64,

    /// The image's number of upvotes minus its number of downvotes.
    derpibooru_score: i64,

    /// The names of the image's tags.
    derpibooru_tags: Vec<String>,

    /// Always `Derpibooru`.
    provider_name: String,

    /// Always `https://derpibooru.org`.
    provider_url: String,

    /// The image's ID and associated tags, as given on the title of the
    /// image page.
    title: String,

    /// Always `photo`. Called `type` on the wire.
    #[serde(rename = "type")]
    kind: String,

    /// Always `1.0`.
    version: String,
}

impl Oembed {
    /// Returns the comma-delimited names of the image authors.
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Returns the source URL of the image.
    pub fn author_url(&self) -> &str {
        &self.author_url
    }

    /// Returns the cache age (always 7200).
    pub fn cache_age(&self) -> u64 {
        self.cache_age
    }

    /// Returns the number of comments made on the image.
    pub fn derpibooru_comments(&self) -> u64 {
        self.derpibooru_comments
    }

    /// Returns the image's ID.
    pub fn derpibooru_id(&self) -> u64 {
        self.derpibooru_id
    }

    /// Returns the image's upvotes minus its downvotes.
    pub fn derpibooru_score(&self) -> i64 {
        self.derpibooru_score
    }

    /// Returns the names of the image's tags.
    pub fn derpibooru_tags(&self) -> &[String] {
        &self.derpibooru_tags
    }

    /// Returns the provider name (always `Derpibooru`).
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Returns the provider URL.
    pub fn provider_url(&self) -> &str {
        &self.provider_url
    }

    /// Returns the image page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the `oEmbed` type, `type` on the wire (always `photo`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the `oEmbed` version (always `1.0`).
    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_an_oembed_body() {
        let oembed: Oembed = serde_json::from_str(
            r##"{
                "author_name": "atryl",
                "author_url": "https://example.com/source",
                "cache_age": 7200,
                "derpibooru_comments": 63,
                "derpibooru_id": 1,
                "derpibooru_score": 1400,
                "derpibooru_tags": ["safe", "fluttershy", "solo"],
                "provider_name": "Derpibooru",
                "provider_url": "https://derpibooru.org",
                "title": "#1 - safe, fluttershy, solo - Derpibooru",
                "type": "photo",
                "version": "1.0"
            }"##,
        )
        .unwrap();

        assert_eq!(oembed.author_name(), "atryl");
        assert_eq!(oembed.author_url(), "https://example.com/source");
        assert_eq!(oembed.cache_age(), 7200);
        assert_eq!(oembed.derpibooru_comments(), 63);
        assert_eq!(oembed.derpibooru_id(), 1);
        assert_eq!(oembed.derpibooru_score(), 1400);
        assert_eq!(oembed.derpibooru_tags(), ["safe", "fluttershy", "solo"]);
        assert_eq!(oembed.provider_name(), "Derpibooru");
        assert_eq!(oembed.provider_url(), "https://derpibooru.org");
        assert_eq!(oembed.kind(), "photo");
        assert_eq!(oembed.version(), "1.0");
    }

    #[test]
    fn round_trips_through_the_wire_name_for_type() {
        let input = r##"{"author_name":"a","author_url":"u","cache_age":7200,"derpibooru_comments":0,"derpibooru_id":7,"derpibooru_score":0,"derpibooru_tags":[],"provider_name":"Derpibooru","provider_url":"https://derpibooru.org","title":"#7","type":"photo","version":"1.0"}"##;
        let oembed: Oembed = serde_json::from_str(input).unwrap();
        let value = serde_json::to_value(&oembed).unwrap();

        assert_eq!(value["type"], "photo");
        assert!(value.get("kind").is_none());
    }
}
