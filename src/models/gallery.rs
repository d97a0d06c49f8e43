//! Contains information about an image gallery.

use serde::{Deserialize, Serialize};

/// A user-curated gallery of images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    /// The gallery's description.
    description: String,
    /// The gallery's ID.
    id: u64,
    /// The gallery's spoiler warning.
    spoiler_warning: String,
    /// The ID of the cover image for the gallery, if one is set.
    thumbnail_id: Option<u64>,
    /// The gallery's title.
    title: String,
    /// The name of the gallery's creator.
    user: String,
    /// The ID of the gallery's creator.
    user_id: u64,
}

impl Gallery {
    /// Returns the gallery's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the gallery's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the gallery's spoiler warning.
    pub fn spoiler_warning(&self) -> &str {
        &self.spoiler_warning
    }

    /// Returns the ID of the cover image for the gallery, if set.
    pub fn thumbnail_id(&self) -> Option<u64> {
        self.thumbnail_id
    }

    /// Returns the gallery's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the name of the gallery's creator.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the ID of the gallery's creator.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_gallery() {
        let gallery: Gallery = serde_json::from_str(
            r#"{
                "description": "Mean ponies.",
                "id": 7326,
                "spoiler_warning": "",
                "thumbnail_id": 2228439,
                "title": "Meanies",
                "user": "luckydonald",
                "user_id": 216494
            }"#,
        )
        .unwrap();

        assert_eq!(gallery.id(), 7326);
        assert_eq!(gallery.description(), "Mean ponies.");
        assert_eq!(gallery.spoiler_warning(), "");
        assert_eq!(gallery.thumbnail_id(), Some(2228439));
        assert_eq!(gallery.title(), "Meanies");
        assert_eq!(gallery.user(), "luckydonald");
        assert_eq!(gallery.user_id(), 216494);
    }
}
