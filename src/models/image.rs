//! Contains information about an image, its thumbnail representations
//! and its deduplication intensity data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// A single image, as returned by the image and image-search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// The image's width divided by its height.
    aspect_ratio: f64,

    /// The number of comments made on the image.
    comment_count: u64,

    /// The creation time, in UTC, of the image.
    created_at: DateTime<Utc>,

    /// The hide reason for the image, or null if none provided. Only
    /// carries a value on images deleted for a rule violation.
    deletion_reason: Option<String>,

    /// The image's description.
    description: String,

    /// The number of downvotes the image has.
    downvotes: u64,

    /// The ID of the target image, or null if none provided. Only
    /// carries a value on images merged into another image.
    duplicate_of: Option<u64>,

    /// The number of faves the image has.
    faves: u64,

    /// The time, in UTC, the image was first seen (before any duplicate
    /// merging).
    first_seen_at: DateTime<Utc>,

    /// The file extension of the image. One of `gif`, `jpg`, `jpeg`,
    /// `png`, `svg`, `webm`.
    format: String,

    /// The image's height, in pixels.
    height: u32,

    /// Whether the image is hidden. An image is hidden if it is merged
    /// or deleted for a rule violation.
    hidden_from_users: bool,

    /// The image's ID.
    id: u64,

    /// Internal image intensity data for deduplication purposes. Null if
    /// intensities have not yet been generated.
    intensities: Option<Intensities>,

    /// The MIME type of the image. One of `image/gif`, `image/jpeg`,
    /// `image/png`, `image/svg+xml`, `video/webm`.
    mime_type: String,

    /// The filename the image was uploaded with.
    name: String,

    /// The SHA-512 hash of the image as it was originally uploaded.
    orig_sha512_hash: Option<String>,

    /// Whether the image has finished optimization.
    processed: bool,

    /// A mapping of representation names to their respective URLs.
    representations: Representations,

    /// The image's number of upvotes minus its number of downvotes.
    score: i64,

    /// The SHA-512 hash of the image after it has been processed.
    sha512_hash: String,

    /// The current source URL of the image.
    source_url: Option<String>,

    /// Whether the image is hit by the current filter.
    spoilered: bool,

    /// The number of tags present on the image.
    tag_count: u64,

    /// The IDs of the tags the image contains.
    tag_ids: Vec<u64>,

    /// The names of the tags the image contains.
    tags: Vec<String>,

    /// Whether the image has finished thumbnail generation. Do not
    /// attempt to load images from `view_url` or `representations` while
    /// this is false.
    thumbnails_generated: bool,

    /// The time, in UTC, the image was last updated.
    updated_at: DateTime<Utc>,

    /// The image's uploader. Null for anonymous uploads.
    uploader: Option<String>,

    /// The ID of the image's uploader. Null for anonymous uploads.
    uploader_id: Option<u64>,

    /// The image's number of upvotes.
    upvotes: u64,

    /// The image's view URL, including tags.
    view_url: String,

    /// The image's width, in pixels.
    width: u32,

    /// The lower bound of the Wilson score interval for the image, based
    /// on its upvotes and downvotes, given a z-score corresponding to a
    /// confidence of 99.5%.
    wilson_score: f64,
}

impl Image {
    /// Returns the image's width divided by its height.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Returns the number of comments made on the image.
    pub fn comment_count(&self) -> u64 {
        self.comment_count
    }

    /// Returns the creation time, in UTC, of the image.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the hide reason for the image, if one was provided.
    pub fn deletion_reason(&self) -> Option<&str> {
        str_opt_ref!(self.deletion_reason)
    }

    /// Returns the image's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of downvotes the image has.
    pub fn downvotes(&self) -> u64 {
        self.downvotes
    }

    /// Returns the ID of the image this one was merged into, if any.
    pub fn duplicate_of(&self) -> Option<u64> {
        self.duplicate_of
    }

    /// Returns the number of faves the image has.
    pub fn faves(&self) -> u64 {
        self.faves
    }

    /// Returns the time, in UTC, the image was first seen.
    pub fn first_seen_at(&self) -> DateTime<Utc> {
        self.first_seen_at
    }

    /// Returns the file extension of the image.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Returns the image's height, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the image is hidden.
    pub fn hidden_from_users(&self) -> bool {
        self.hidden_from_users
    }

    /// Returns the image's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the image's intensity data, if it has been generated.
    pub fn intensities(&self) -> Option<&Intensities> {
        self.intensities.as_ref()
    }

    /// Returns the MIME type of the image.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the filename the image was uploaded with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the SHA-512 hash of the original upload, if recorded.
    pub fn orig_sha512_hash(&self) -> Option<&str> {
        str_opt_ref!(self.orig_sha512_hash)
    }

    /// Returns whether the image has finished optimization.
    pub fn processed(&self) -> bool {
        self.processed
    }

    /// Returns the mapping of representation names to their URLs.
    pub fn representations(&self) -> &Representations {
        &self.representations
    }

    /// Returns the image's upvotes minus its downvotes.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Returns the SHA-512 hash of the processed image.
    pub fn sha512_hash(&self) -> &str {
        &self.sha512_hash
    }

    /// Returns the current source URL of the image, if known.
    pub fn source_url(&self) -> Option<&str> {
        str_opt_ref!(self.source_url)
    }

    /// Returns whether the image is hit by the current filter.
    pub fn spoilered(&self) -> bool {
        self.spoilered
    }

    /// Returns the number of tags present on the image.
    pub fn tag_count(&self) -> u64 {
        self.tag_count
    }

    /// Returns the IDs of the tags the image contains.
    pub fn tag_ids(&self) -> &[u64] {
        &self.tag_ids
    }

    /// Returns the names of the tags the image contains.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns whether thumbnail generation has finished.
    pub fn thumbnails_generated(&self) -> bool {
        self.thumbnails_generated
    }

    /// Returns the time, in UTC, the image was last updated.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the name of the image's uploader, unless anonymous.
    pub fn uploader(&self) -> Option<&str> {
        str_opt_ref!(self.uploader)
    }

    /// Returns the ID of the image's uploader, unless anonymous.
    pub fn uploader_id(&self) -> Option<u64> {
        self.uploader_id
    }

    /// Returns the image's number of upvotes.
    pub fn upvotes(&self) -> u64 {
        self.upvotes
    }

    /// Returns the image's view URL, including tags.
    pub fn view_url(&self) -> &str {
        &self.view_url
    }

    /// Returns the image's width, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the lower bound of the Wilson score interval for the
    /// image.
    pub fn wilson_score(&self) -> f64 {
        self.wilson_score
    }
}

/// Corner intensity data the site keeps for image deduplication.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Intensities {
    /// Northeast intensity.
    ne: f64,
    /// Northwest intensity.
    nw: f64,
    /// Southeast intensity.
    se: f64,
    /// Southwest intensity.
    sw: f64,
}

impl Intensities {
    /// Returns the northeast intensity.
    pub fn ne(&self) -> f64 {
        self.ne
    }

    /// Returns the northwest intensity.
    pub fn nw(&self) -> f64 {
        self.nw
    }

    /// Returns the southeast intensity.
    pub fn se(&self) -> f64 {
        self.se
    }

    /// Returns the southwest intensity.
    pub fn sw(&self) -> f64 {
        self.sw
    }
}

/// URLs of the sized renditions the site generates for an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Representations {
    /// URL of the `full` representation.
    full: String,
    /// URL of the `large` representation.
    large: String,
    /// URL of the `medium` representation.
    medium: String,
    /// URL of the `small` representation.
    small: String,
    /// URL of the `tall` representation.
    tall: String,
    /// URL of the `thumb` representation.
    thumb: String,
    /// URL of the `thumb_small` representation.
    thumb_small: String,
    /// URL of the `thumb_tiny` representation.
    thumb_tiny: String,
}

impl Representations {
    /// Returns the URL of the `full` representation.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Returns the URL of the `large` representation.
    pub fn large(&self) -> &str {
        &self.large
    }

    /// Returns the URL of the `medium` representation.
    pub fn medium(&self) -> &str {
        &self.medium
    }

    /// Returns the URL of the `small` representation.
    pub fn small(&self) -> &str {
        &self.small
    }

    /// Returns the URL of the `tall` representation.
    pub fn tall(&self) -> &str {
        &self.tall
    }

    /// Returns the URL of the `thumb` representation.
    pub fn thumb(&self) -> &str {
        &self.thumb
    }

    /// Returns the URL of the `thumb_small` representation.
    pub fn thumb_small(&self) -> &str {
        &self.thumb_small
    }

    /// Returns the URL of the `thumb_tiny` representation.
    pub fn thumb_tiny(&self) -> &str {
        &self.thumb_tiny
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "aspect_ratio": 1.3786982248520711,
        "comment_count": 63,
        "created_at": "2012-01-02T03:12:33Z",
        "deletion_reason": null,
        "description": "Original upload.",
        "downvotes": 34,
        "duplicate_of": null,
        "faves": 1109,
        "first_seen_at": "2012-01-02T03:12:33Z",
        "format": "png",
        "height": 1014,
        "hidden_from_users": false,
        "id": 1,
        "intensities": {
            "ne": 43.666426, "nw": 55.988237, "se": 33.655121, "sw": 45.470358
        },
        "mime_type": "image/png",
        "name": "1__safe_fluttershy.png",
        "orig_sha512_hash": null,
        "processed": true,
        "representations": {
            "full": "https://derpicdn.net/img/view/2012/1/2/1__safe_fluttershy.png",
            "large": "https://derpicdn.net/img/2012/1/2/1/large.png",
            "medium": "https://derpicdn.net/img/2012/1/2/1/medium.png",
            "small": "https://derpicdn.net/img/2012/1/2/1/small.png",
            "tall": "https://derpicdn.net/img/2012/1/2/1/tall.png",
            "thumb": "https://derpicdn.net/img/2012/1/2/1/thumb.png",
            "thumb_small": "https://derpicdn.net/img/2012/1/2/1/thumb_small.png",
            "thumb_tiny": "https://derpicdn.net/img/2012/1/2/1/thumb_tiny.png"
        },
        "score": 1400,
        "sha512_hash": "f16c98e2848c05ae3f8b26d28a0a2cd2808e30b01bbf2187c18c78dbee6b9a6e",
        "source_url": "",
        "spoilered": false,
        "tag_count": 3,
        "tag_ids": [27724, 40482, 75881],
        "tags": ["safe", "fluttershy", "solo"],
        "thumbnails_generated": true,
        "updated_at": "2019-09-03T16:02:30Z",
        "uploader": null,
        "uploader_id": null,
        "upvotes": 1434,
        "view_url": "https://derpicdn.net/img/view/2012/1/2/1__safe_fluttershy.png",
        "width": 1398,
        "wilson_score": 0.9378771251855676
    }"#;

    #[test]
    fn decodes_an_image_field_for_field() {
        let image: Image = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(image.id(), 1);
        assert_eq!(image.aspect_ratio(), 1.378_698_224_852_071_1);
        assert_eq!(image.comment_count(), 63);
        assert_eq!(
            image.created_at(),
            "2012-01-02T03:12:33Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(image.deletion_reason(), None);
        assert_eq!(image.description(), "Original upload.");
        assert_eq!(image.downvotes(), 34);
        assert_eq!(image.duplicate_of(), None);
        assert_eq!(image.faves(), 1109);
        assert_eq!(image.format(), "png");
        assert_eq!(image.height(), 1014);
        assert!(!image.hidden_from_users());
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.name(), "1__safe_fluttershy.png");
        assert_eq!(image.orig_sha512_hash(), None);
        assert!(image.processed());
        assert_eq!(image.score(), 1400);
        assert_eq!(image.source_url(), Some(""));
        assert!(!image.spoilered());
        assert_eq!(image.tag_count(), 3);
        assert_eq!(image.tag_ids(), [27724, 40482, 75881]);
        assert_eq!(image.tags(), ["safe", "fluttershy", "solo"]);
        assert!(image.thumbnails_generated());
        assert_eq!(image.uploader(), None);
        assert_eq!(image.uploader_id(), None);
        assert_eq!(image.upvotes(), 1434);
        assert_eq!(image.width(), 1398);
        assert_eq!(image.wilson_score(), 0.937_877_125_185_567_6);
    }

    #[test]
    fn decodes_the_sub_records() {
        let image: Image = serde_json::from_str(SAMPLE).unwrap();

        let intensities = image.intensities().unwrap();
        assert_eq!(intensities.ne(), 43.666_426);
        assert_eq!(intensities.nw(), 55.988_237);
        assert_eq!(intensities.se(), 33.655_121);
        assert_eq!(intensities.sw(), 45.470_358);

        let repr = image.representations();
        assert_eq!(repr.thumb_tiny(), "https://derpicdn.net/img/2012/1/2/1/thumb_tiny.png");
        assert!(repr.full().ends_with("1__safe_fluttershy.png"));
        assert!(repr.large().contains("/large"));
        assert!(repr.medium().contains("/medium"));
        assert!(repr.small().contains("/small"));
        assert!(repr.tall().contains("/tall"));
        assert!(repr.thumb().contains("/thumb"));
        assert!(repr.thumb_small().contains("/thumb_small"));
    }

    #[test]
    fn tags_keep_their_order() {
        let image: Image = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(image.tags()[0], "safe");
        assert_eq!(image.tags()[2], "solo");
    }

    #[test]
    fn rejects_a_coerced_boolean() {
        // `1` is not `true`; field types are strict.
        let mangled = SAMPLE.replace("\"processed\": true", "\"processed\": 1");
        assert!(serde_json::from_str::<Image>(&mangled).is_err());
    }
}
